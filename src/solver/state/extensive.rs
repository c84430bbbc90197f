//! Conserved (extensive) quantities of a cell.

use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use glam::DVec2;

use crate::equations::EquationOfState;
use crate::error::AleError;

use super::cell::ComputationalCell;
use super::names::TracerStickerNames;

/// Conserved record of one cell: mass, momentum, total energy, tracer masses.
///
/// The same type doubles as a flux vector (conserved quantity per unit area
/// per unit time), which lets the updater scale and accumulate fluxes with
/// plain arithmetic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Extensive {
    /// Mass
    pub mass: f64,
    /// Momentum
    pub momentum: DVec2,
    /// Total (kinetic + internal) energy
    pub energy: f64,
    /// Tracer masses, ordered as in [`TracerStickerNames::tracer_names`]
    pub tracers: Vec<f64>,
}

impl Extensive {
    /// A zero record with `n_tracers` tracer slots.
    pub fn zero(n_tracers: usize) -> Self {
        Self {
            mass: 0.0,
            momentum: DVec2::ZERO,
            energy: 0.0,
            tracers: vec![0.0; n_tracers],
        }
    }

    /// Conserved content of a cell state occupying `volume`.
    pub fn from_cell(
        cell: &ComputationalCell,
        eos: &dyn EquationOfState,
        volume: f64,
        names: &TracerStickerNames,
    ) -> Self {
        let mass = volume * cell.density;
        let internal = eos.dp2e(cell.density, cell.pressure, &cell.tracers, names);
        Self {
            mass,
            momentum: mass * cell.velocity,
            energy: mass * (0.5 * cell.velocity.length_squared() + internal),
            tracers: cell.tracers.iter().map(|t| mass * t).collect(),
        }
    }

    /// Check the tracer list against the registry.
    pub fn check_tracers(
        &self,
        names: &TracerStickerNames,
        what: &'static str,
        index: usize,
    ) -> Result<(), AleError> {
        let expected = names.tracer_count();
        if self.tracers.len() != expected {
            return Err(AleError::tracer_mismatch(
                what,
                index,
                expected,
                self.tracers.len(),
            ));
        }
        Ok(())
    }
}

impl Add for Extensive {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += &other;
        self
    }
}

impl Sub for Extensive {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= &other;
        self
    }
}

impl AddAssign<&Extensive> for Extensive {
    fn add_assign(&mut self, other: &Extensive) {
        self.mass += other.mass;
        self.momentum += other.momentum;
        self.energy += other.energy;
        for (t, o) in self.tracers.iter_mut().zip(&other.tracers) {
            *t += o;
        }
    }
}

impl SubAssign<&Extensive> for Extensive {
    fn sub_assign(&mut self, other: &Extensive) {
        self.mass -= other.mass;
        self.momentum -= other.momentum;
        self.energy -= other.energy;
        for (t, o) in self.tracers.iter_mut().zip(&other.tracers) {
            *t -= o;
        }
    }
}

impl Mul<f64> for &Extensive {
    type Output = Extensive;

    fn mul(self, scalar: f64) -> Extensive {
        Extensive {
            mass: self.mass * scalar,
            momentum: self.momentum * scalar,
            energy: self.energy * scalar,
            tracers: self.tracers.iter().map(|t| t * scalar).collect(),
        }
    }
}

impl Mul<&Extensive> for f64 {
    type Output = Extensive;

    fn mul(self, ext: &Extensive) -> Extensive {
        ext * self
    }
}

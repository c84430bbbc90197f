//! Riemann solver interface.
//!
//! Solvers work in the edge frame: the x-axis is the edge normal (pointing
//! from the first neighbor to the second) and the y-axis is the edge
//! tangent. States are passed as [`Primitive`] and the flux comes back as
//! [`Conserved`], both in that frame. The `velocity` argument is the normal
//! speed of the interface; the returned flux is measured across the moving
//! interface but expressed in the lab frame.

use std::ops::{Add, Mul, Sub};

use glam::DVec2;

use crate::error::AleError;

/// Primitive state in the edge frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Primitive {
    /// Density ρ
    pub density: f64,
    /// Pressure p
    pub pressure: f64,
    /// Velocity (normal, tangential)
    pub velocity: DVec2,
    /// Specific internal energy e
    pub energy: f64,
    /// Sound speed c
    pub sound_speed: f64,
}

impl Primitive {
    /// Total energy per unit volume, ρ(e + |v|²/2).
    #[inline]
    pub fn total_energy(&self) -> f64 {
        self.density * (self.energy + 0.5 * self.velocity.length_squared())
    }

    /// Mirror image about the edge: normal velocity reversed.
    #[inline]
    pub fn reflected(&self) -> Self {
        Self {
            velocity: DVec2::new(-self.velocity.x, self.velocity.y),
            ..*self
        }
    }

    /// Same state seen from a frame moving with `speed` along the normal.
    #[inline]
    pub fn shifted(&self, speed: f64) -> Self {
        Self {
            velocity: DVec2::new(self.velocity.x - speed, self.velocity.y),
            ..*self
        }
    }

    /// Conserved densities (ρ, ρv, E).
    #[inline]
    pub fn conserved(&self) -> Conserved {
        Conserved {
            mass: self.density,
            momentum: self.density * self.velocity,
            energy: self.total_energy(),
        }
    }

    /// Physical flux along the normal.
    #[inline]
    pub fn normal_flux(&self) -> Conserved {
        let un = self.velocity.x;
        Conserved {
            mass: self.density * un,
            momentum: DVec2::new(
                self.density * un * un + self.pressure,
                self.density * un * self.velocity.y,
            ),
            energy: (self.total_energy() + self.pressure) * un,
        }
    }
}

/// Conserved densities or fluxes in the edge frame (no tracers).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Conserved {
    /// Mass
    pub mass: f64,
    /// Momentum (normal, tangential)
    pub momentum: DVec2,
    /// Total energy
    pub energy: f64,
}

impl Conserved {
    /// Convert a flux computed in a frame moving with `speed` along the
    /// normal back to the lab frame.
    #[inline]
    pub fn to_lab_frame(self, speed: f64) -> Self {
        Self {
            mass: self.mass,
            momentum: DVec2::new(self.momentum.x + speed * self.mass, self.momentum.y),
            energy: self.energy + speed * self.momentum.x + 0.5 * speed * speed * self.mass,
        }
    }
}

impl Add for Conserved {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            mass: self.mass + other.mass,
            momentum: self.momentum + other.momentum,
            energy: self.energy + other.energy,
        }
    }
}

impl Sub for Conserved {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            mass: self.mass - other.mass,
            momentum: self.momentum - other.momentum,
            energy: self.energy - other.energy,
        }
    }
}

impl Mul<Conserved> for f64 {
    type Output = Conserved;

    fn mul(self, c: Conserved) -> Conserved {
        Conserved {
            mass: self * c.mass,
            momentum: self * c.momentum,
            energy: self * c.energy,
        }
    }
}

/// Flux across an interface moving with the given normal speed.
pub trait RiemannSolver: Send + Sync {
    /// Solve the Riemann problem between `left` and `right`.
    fn solve(&self, left: &Primitive, right: &Primitive, velocity: f64)
    -> Result<Conserved, AleError>;

    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;
}

/// Result of a Lagrangian Riemann solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LagrangianSolution {
    /// Lab-frame flux
    pub flux: Conserved,
    /// Resolved contact (wave) speed along the normal
    pub wave_speed: f64,
}

/// Riemann solver that also reports the contact speed.
///
/// An instance is built either to suppress the mass flux (the interface
/// moves with the contact, no matter crosses it) or to permit it (the
/// interface moves with the prescribed speed).
pub trait LagrangianRiemannSolver: Send + Sync {
    /// Solve the Riemann problem between `left` and `right`.
    fn solve(
        &self,
        left: &Primitive,
        right: &Primitive,
        velocity: f64,
    ) -> Result<LagrangianSolution, AleError>;

    /// Whether this instance lets mass cross the interface.
    fn allows_mass_flux(&self) -> bool;

    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;
}

/// Reject states no Riemann solver can handle.
pub(crate) fn check_state(state: &Primitive, side: &str) -> Result<(), AleError> {
    if !(state.density > 0.0) || !(state.pressure >= 0.0) || !state.sound_speed.is_finite() {
        return Err(AleError::RiemannFailure(format!(
            "{} state has density {} and pressure {}",
            side, state.density, state.pressure
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn state() -> Primitive {
        Primitive {
            density: 2.0,
            pressure: 1.0,
            velocity: DVec2::new(0.5, -0.25),
            energy: 1.5,
            sound_speed: 1.0,
        }
    }

    #[test]
    fn test_reflection_keeps_tangential_velocity() {
        let r = state().reflected();
        assert_eq!(r.velocity, DVec2::new(-0.5, -0.25));
        assert_eq!(r.pressure, 1.0);
    }

    #[test]
    fn test_lab_frame_transform_matches_shifted_flux() {
        let s = state();
        let speed = 0.3;
        let moving = s.shifted(speed).normal_flux().to_lab_frame(speed);

        // Flux across a surface moving with `speed`: F(U) - speed * U
        let expected = s.normal_flux() - speed * s.conserved();
        assert_relative_eq!(moving.mass, expected.mass, epsilon = 1e-14);
        assert_relative_eq!(moving.momentum.x, expected.momentum.x, epsilon = 1e-14);
        assert_relative_eq!(moving.momentum.y, expected.momentum.y, epsilon = 1e-14);
        assert_relative_eq!(moving.energy, expected.energy, epsilon = 1e-14);
    }

    #[test]
    fn test_check_state() {
        assert!(check_state(&state(), "left").is_ok());
        let bad = Primitive {
            density: -1.0,
            ..state()
        };
        assert!(matches!(
            check_state(&bad, "right"),
            Err(AleError::RiemannFailure(_))
        ));
    }
}

//! Equation of state for the hydrodynamic cells.
//!
//! The conservative update only needs two conversions from the thermodynamic
//! state (density, pressure): the specific internal energy, used when
//! building energy records and Riemann states, and the sound speed, used by
//! the Riemann solvers and as the velocity scale of mesh regularization.
//! The inverse conversion (density, energy) → pressure is used when cell
//! states are recovered from conserved records.
//!
//! Tracers are passed along with their registry so that mixture-dependent
//! equations of state can look up what they need by name.

use crate::solver::TracerStickerNames;

/// Thermodynamic conversions between density, pressure and energy.
pub trait EquationOfState: Send + Sync {
    /// Specific internal energy e(ρ, p).
    fn dp2e(&self, density: f64, pressure: f64, tracers: &[f64], names: &TracerStickerNames)
    -> f64;

    /// Sound speed c(ρ, p).
    fn dp2c(&self, density: f64, pressure: f64, tracers: &[f64], names: &TracerStickerNames)
    -> f64;

    /// Pressure p(ρ, e).
    fn de2p(&self, density: f64, energy: f64, tracers: &[f64], names: &TracerStickerNames)
    -> f64;

    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;
}

/// Ideal gas with constant adiabatic index.
///
/// p = (γ - 1) ρ e, c = sqrt(γ p / ρ)
///
/// # Example
///
/// ```
/// use ale_rs::equations::{EquationOfState, IdealGas};
/// use ale_rs::solver::TracerStickerNames;
///
/// let eos = IdealGas::new(5.0 / 3.0);
/// let names = TracerStickerNames::default();
///
/// let e = eos.dp2e(1.0, 1.0, &[], &names);
/// assert!((e - 1.5).abs() < 1e-12);
/// assert!((eos.de2p(1.0, e, &[], &names) - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdealGas {
    /// Adiabatic index γ
    pub gamma: f64,
}

impl IdealGas {
    /// Create an ideal gas equation of state.
    ///
    /// # Panics
    ///
    /// Panics if `gamma <= 1`.
    pub fn new(gamma: f64) -> Self {
        assert!(gamma > 1.0, "adiabatic index must exceed 1, got {}", gamma);
        Self { gamma }
    }
}

impl Default for IdealGas {
    /// Monatomic gas, γ = 5/3.
    fn default() -> Self {
        Self::new(5.0 / 3.0)
    }
}

impl EquationOfState for IdealGas {
    #[inline]
    fn dp2e(
        &self,
        density: f64,
        pressure: f64,
        _tracers: &[f64],
        _names: &TracerStickerNames,
    ) -> f64 {
        pressure / ((self.gamma - 1.0) * density)
    }

    #[inline]
    fn dp2c(
        &self,
        density: f64,
        pressure: f64,
        _tracers: &[f64],
        _names: &TracerStickerNames,
    ) -> f64 {
        (self.gamma * pressure / density).sqrt()
    }

    #[inline]
    fn de2p(
        &self,
        density: f64,
        energy: f64,
        _tracers: &[f64],
        _names: &TracerStickerNames,
    ) -> f64 {
        (self.gamma - 1.0) * density * energy
    }

    fn name(&self) -> &'static str {
        "ideal_gas"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn names() -> TracerStickerNames {
        TracerStickerNames::default()
    }

    #[test]
    fn test_energy_pressure_round_trip() {
        let eos = IdealGas::new(1.4);
        let e = eos.dp2e(2.0, 3.0, &[], &names());
        assert_relative_eq!(e, 3.0 / (0.4 * 2.0), epsilon = 1e-14);
        assert_relative_eq!(eos.de2p(2.0, e, &[], &names()), 3.0, epsilon = 1e-14);
    }

    #[test]
    fn test_sound_speed() {
        let eos = IdealGas::default();
        // γ p / ρ = (5/3)(0.6)/1 = 1
        assert_relative_eq!(eos.dp2c(1.0, 0.6, &[], &names()), 1.0, epsilon = 1e-14);
    }

    #[test]
    #[should_panic]
    fn test_invalid_gamma() {
        IdealGas::new(1.0);
    }
}

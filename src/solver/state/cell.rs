//! Primitive (per-unit-volume) cell state.

use glam::DVec2;

use crate::equations::EquationOfState;

use super::extensive::Extensive;
use super::names::TracerStickerNames;

/// Hydrodynamic state of one cell.
///
/// Tracers are concentrations (tracer mass per unit mass); stickers are
/// boolean markers used by the flux conditions to pick out special regions
/// such as walls or obstacles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComputationalCell {
    /// Mass density ρ
    pub density: f64,
    /// Thermal pressure p
    pub pressure: f64,
    /// Velocity (u, v)
    pub velocity: DVec2,
    /// Tracer concentrations, ordered as in [`TracerStickerNames::tracer_names`]
    pub tracers: Vec<f64>,
    /// Sticker flags, ordered as in [`TracerStickerNames::sticker_names`]
    pub stickers: Vec<bool>,
}

impl ComputationalCell {
    /// Create a cell without tracers or stickers.
    pub fn new(density: f64, pressure: f64, velocity: DVec2) -> Self {
        Self {
            density,
            pressure,
            velocity,
            tracers: Vec::new(),
            stickers: Vec::new(),
        }
    }

    /// Attach tracer concentrations.
    pub fn with_tracers(mut self, tracers: Vec<f64>) -> Self {
        self.tracers = tracers;
        self
    }

    /// Attach sticker flags.
    pub fn with_stickers(mut self, stickers: Vec<bool>) -> Self {
        self.stickers = stickers;
        self
    }

    /// Whether the sticker at `position` is set. Missing entries read as unset.
    #[inline]
    pub fn sticker(&self, position: usize) -> bool {
        self.stickers.get(position).copied().unwrap_or(false)
    }

    /// Recover the primitive state from a conserved record and the cell volume.
    ///
    /// Stickers cannot be recovered from an extensive record and are copied
    /// from `stickers`.
    pub fn from_extensive(
        extensive: &Extensive,
        volume: f64,
        eos: &dyn EquationOfState,
        names: &TracerStickerNames,
        stickers: Vec<bool>,
    ) -> Self {
        let density = extensive.mass / volume;
        let velocity = extensive.momentum / extensive.mass;
        let tracers: Vec<f64> = extensive
            .tracers
            .iter()
            .map(|t| t / extensive.mass)
            .collect();
        let energy = extensive.energy / extensive.mass - 0.5 * velocity.length_squared();
        let pressure = eos.de2p(density, energy, &tracers, names);
        Self {
            density,
            pressure,
            velocity,
            tracers,
            stickers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::IdealGas;
    use approx::assert_relative_eq;

    #[test]
    fn test_extensive_round_trip() {
        let eos = IdealGas::new(1.4);
        let names = TracerStickerNames::new(["dye"], ["wall"]);
        let cell = ComputationalCell::new(1.3, 2.1, DVec2::new(0.4, -0.7))
            .with_tracers(vec![0.25])
            .with_stickers(vec![true]);

        let ext = Extensive::from_cell(&cell, &eos, 0.5, &names);
        let back = ComputationalCell::from_extensive(&ext, 0.5, &eos, &names, vec![true]);

        assert_relative_eq!(back.density, 1.3, epsilon = 1e-13);
        assert_relative_eq!(back.pressure, 2.1, epsilon = 1e-12);
        assert_relative_eq!(back.velocity.x, 0.4, epsilon = 1e-13);
        assert_relative_eq!(back.velocity.y, -0.7, epsilon = 1e-13);
        assert_relative_eq!(back.tracers[0], 0.25, epsilon = 1e-13);
        assert!(back.sticker(0));
    }

    #[test]
    fn test_missing_sticker_reads_unset() {
        let cell = ComputationalCell::new(1.0, 1.0, DVec2::ZERO);
        assert!(!cell.sticker(3));
    }
}

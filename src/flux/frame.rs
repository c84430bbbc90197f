//! Conversion between cell states and the edge frame.

use glam::DVec2;

use crate::equations::EquationOfState;
use crate::mesh::{Edge, Tessellation};
use crate::solver::{ComputationalCell, Extensive, TracerStickerNames};

use super::riemann::{Conserved, Primitive};

/// Orthonormal frame attached to an edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeFrame {
    /// Unit normal, pointing from the first neighbor to the second
    pub normal: DVec2,
    /// Unit tangent, the normal rotated a quarter turn counter-clockwise
    pub parallel: DVec2,
}

impl EdgeFrame {
    /// Frame of `edge` in `tess`.
    pub fn new(tess: &dyn Tessellation, edge: &Edge) -> Self {
        Self::from_normal(tess.edge_normal(edge))
    }

    /// Frame from a unit normal.
    pub fn from_normal(normal: DVec2) -> Self {
        Self {
            normal,
            parallel: normal.perp(),
        }
    }

    /// Component of `v` along the normal.
    #[inline]
    pub fn normal_speed(&self, v: DVec2) -> f64 {
        v.dot(self.normal)
    }

    /// Rotate a lab-frame vector into the edge frame.
    #[inline]
    pub fn to_local(&self, v: DVec2) -> DVec2 {
        DVec2::new(v.dot(self.normal), v.dot(self.parallel))
    }

    /// Rotate an edge-frame vector back to the lab frame.
    #[inline]
    pub fn to_lab(&self, v: DVec2) -> DVec2 {
        v.x * self.normal + v.y * self.parallel
    }

    /// Primitive state of `cell` in this frame.
    pub fn primitive(
        &self,
        cell: &ComputationalCell,
        eos: &dyn EquationOfState,
        names: &TracerStickerNames,
    ) -> Primitive {
        Primitive {
            density: cell.density,
            pressure: cell.pressure,
            velocity: self.to_local(cell.velocity),
            energy: eos.dp2e(cell.density, cell.pressure, &cell.tracers, names),
            sound_speed: eos.dp2c(cell.density, cell.pressure, &cell.tracers, names),
        }
    }

    /// Lab-frame flux vector from an edge-frame flux.
    ///
    /// Tracers are upwinded: a positive mass flux carries the concentrations
    /// of `upstream`, anything else those of `downstream`.
    pub fn to_extensive(
        &self,
        flux: &Conserved,
        upstream: &ComputationalCell,
        downstream: &ComputationalCell,
    ) -> Extensive {
        let donor = if flux.mass > 0.0 { upstream } else { downstream };
        Extensive {
            mass: flux.mass,
            momentum: self.to_lab(flux.momentum),
            energy: flux.energy,
            tracers: donor.tracers.iter().map(|t| t * flux.mass).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::IdealGas;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotation_round_trip() {
        let frame = EdgeFrame::from_normal(DVec2::new(0.6, 0.8));
        let v = DVec2::new(1.5, -2.0);
        let back = frame.to_lab(frame.to_local(v));
        assert_relative_eq!(back.x, v.x, epsilon = 1e-14);
        assert_relative_eq!(back.y, v.y, epsilon = 1e-14);
        assert_relative_eq!(frame.normal_speed(v), 0.9 - 1.6, epsilon = 1e-14);
    }

    #[test]
    fn test_primitive_uses_eos() {
        let eos = IdealGas::new(2.0);
        let names = TracerStickerNames::default();
        let frame = EdgeFrame::from_normal(DVec2::Y);
        let cell = ComputationalCell::new(2.0, 4.0, DVec2::new(1.0, 3.0));
        let p = frame.primitive(&cell, &eos, &names);
        assert_eq!(p.velocity, DVec2::new(3.0, -1.0));
        assert_relative_eq!(p.energy, 2.0, epsilon = 1e-14);
        assert_relative_eq!(p.sound_speed, 2.0, epsilon = 1e-14);
    }

    #[test]
    fn test_tracers_are_upwinded() {
        let frame = EdgeFrame::from_normal(DVec2::X);
        let left = ComputationalCell::new(1.0, 1.0, DVec2::ZERO).with_tracers(vec![0.2]);
        let right = ComputationalCell::new(1.0, 1.0, DVec2::ZERO).with_tracers(vec![0.7]);

        let forward = Conserved {
            mass: 2.0,
            ..Default::default()
        };
        assert_relative_eq!(frame.to_extensive(&forward, &left, &right).tracers[0], 0.4);

        let backward = Conserved {
            mass: -2.0,
            ..Default::default()
        };
        assert_relative_eq!(frame.to_extensive(&backward, &left, &right).tracers[0], -1.4);
    }
}

//! Mesh point motion.
//!
//! A [`PointMotion`] produces one velocity per real mesh point. It is called
//! twice per timestep: [`PointMotion::velocities`] before the timestep is
//! known and [`PointMotion::apply_fix`] once it is, to adjust velocities
//! that depend on `dt`.
//!
//! - [`Eulerian`]: stationary points
//! - [`Lagrangian`]: points follow their cell velocity
//! - [`RoundCells`]: regularization wrapper steering points toward their
//!   cell's centre of mass
//! - [`edge_velocities`]: per-edge velocities from the point velocities

mod edge_velocity;
mod round_cells;

use glam::DVec2;

use crate::error::AleError;
use crate::mesh::Tessellation;
use crate::solver::{ComputationalCell, TracerStickerNames};

pub use edge_velocity::{edge_velocities, face_velocity};
pub use round_cells::{RoundCells, RoundCellsConfig, cold_rounding_velocity, rounding_velocity};

/// Strategy assigning velocities to mesh points.
pub trait PointMotion: Send + Sync {
    /// Velocity of every real point.
    fn velocities(
        &self,
        tess: &dyn Tessellation,
        cells: &[ComputationalCell],
        time: f64,
        names: &TracerStickerNames,
    ) -> Result<Vec<DVec2>, AleError>;

    /// Adjust `velocities` once the timestep is known.
    ///
    /// The default leaves them unchanged.
    fn apply_fix(
        &self,
        _tess: &dyn Tessellation,
        _cells: &[ComputationalCell],
        _time: f64,
        _dt: f64,
        _velocities: &mut Vec<DVec2>,
        _names: &TracerStickerNames,
    ) -> Result<(), AleError> {
        Ok(())
    }

    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;
}

/// Stationary mesh.
#[derive(Clone, Copy, Debug, Default)]
pub struct Eulerian;

impl PointMotion for Eulerian {
    fn velocities(
        &self,
        tess: &dyn Tessellation,
        _cells: &[ComputationalCell],
        _time: f64,
        _names: &TracerStickerNames,
    ) -> Result<Vec<DVec2>, AleError> {
        Ok(vec![DVec2::ZERO; tess.point_count()])
    }

    fn name(&self) -> &'static str {
        "eulerian"
    }
}

/// Points move with the velocity of their own cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lagrangian;

impl PointMotion for Lagrangian {
    fn velocities(
        &self,
        tess: &dyn Tessellation,
        cells: &[ComputationalCell],
        _time: f64,
        _names: &TracerStickerNames,
    ) -> Result<Vec<DVec2>, AleError> {
        let n = tess.point_count();
        if cells.len() < n {
            return Err(AleError::length_mismatch("cell states", n, cells.len()));
        }
        Ok(cells[..n].iter().map(|c| c.velocity).collect())
    }

    fn name(&self) -> &'static str {
        "lagrangian"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryKind;
    use crate::mesh::PolygonMesh2D;
    use crate::types::Bounds2D;

    #[test]
    fn test_basic_motions() {
        let mesh = PolygonMesh2D::uniform_rectangle(
            Bounds2D::new(0.0, 1.0, 0.0, 1.0),
            2,
            1,
            BoundaryKind::Rigid,
        );
        let names = TracerStickerNames::default();
        let real = vec![
            ComputationalCell::new(1.0, 1.0, DVec2::new(0.1, 0.2)),
            ComputationalCell::new(1.0, 1.0, DVec2::new(-0.3, 0.0)),
        ];
        let cells = mesh.with_ghost_states(&real).unwrap();

        let still = Eulerian.velocities(&mesh, &cells, 0.0, &names).unwrap();
        assert_eq!(still, vec![DVec2::ZERO; 2]);

        let moving = Lagrangian.velocities(&mesh, &cells, 0.0, &names).unwrap();
        assert_eq!(moving, vec![DVec2::new(0.1, 0.2), DVec2::new(-0.3, 0.0)]);

        assert!(Lagrangian.velocities(&mesh, &real[..1], 0.0, &names).is_err());
    }
}

//! Interface value reconstruction for second-order rules.

use crate::error::AleError;
use crate::mesh::Tessellation;
use crate::solver::{ComputationalCell, TracerStickerNames};

/// Produces the (first, second) interface states of every edge.
pub trait SpatialReconstruction: Send + Sync {
    /// Interface values in edge order.
    fn reconstruct(
        &self,
        tess: &dyn Tessellation,
        cells: &[ComputationalCell],
        time: f64,
        names: &TracerStickerNames,
    ) -> Result<Vec<(ComputationalCell, ComputationalCell)>, AleError>;

    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;
}

/// First-order reconstruction: interface values are the cell states.
#[derive(Clone, Copy, Debug, Default)]
pub struct PiecewiseConstant;

impl SpatialReconstruction for PiecewiseConstant {
    fn reconstruct(
        &self,
        tess: &dyn Tessellation,
        cells: &[ComputationalCell],
        _time: f64,
        _names: &TracerStickerNames,
    ) -> Result<Vec<(ComputationalCell, ComputationalCell)>, AleError> {
        if cells.len() < tess.total_point_count() {
            return Err(AleError::length_mismatch(
                "cell states",
                tess.total_point_count(),
                cells.len(),
            ));
        }
        Ok(tess
            .edges()
            .iter()
            .map(|e| (cells[e.neighbors.0].clone(), cells[e.neighbors.1].clone()))
            .collect())
    }

    fn name(&self) -> &'static str {
        "piecewise_constant"
    }
}

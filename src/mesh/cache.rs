//! Per-timestep geometric cache.

use crate::error::AleError;

use super::tessellation::Tessellation;

/// Interface areas and cell volumes for one timestep.
///
/// Computed once after the tessellation is rebuilt and treated as read-only
/// by the flux and update stages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryCache {
    /// Interface areas (edge lengths in 2D), by edge index
    pub areas: Vec<f64>,
    /// Cell volumes (polygon areas in 2D), by point index
    pub volumes: Vec<f64>,
}

impl GeometryCache {
    /// Build from precomputed areas and volumes.
    pub fn new(areas: Vec<f64>, volumes: Vec<f64>) -> Self {
        Self { areas, volumes }
    }

    /// Evaluate areas and volumes from a tessellation.
    ///
    /// Volumes cover real and ghost cells.
    pub fn from_tessellation(tess: &dyn Tessellation) -> Self {
        Self {
            areas: tess.edges().iter().map(|e| e.length()).collect(),
            volumes: (0..tess.total_point_count())
                .map(|i| tess.cell_volume(i))
                .collect(),
        }
    }

    /// Check that the cache matches the tessellation it is used with.
    pub fn check(&self, tess: &dyn Tessellation) -> Result<(), AleError> {
        if self.areas.len() != tess.edges().len() {
            return Err(AleError::length_mismatch(
                "edge areas",
                tess.edges().len(),
                self.areas.len(),
            ));
        }
        if self.volumes.len() < tess.point_count() {
            return Err(AleError::length_mismatch(
                "cell volumes",
                tess.point_count(),
                self.volumes.len(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryKind;
    use crate::mesh::PolygonMesh2D;
    use crate::types::Bounds2D;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_tessellation() {
        let mesh = PolygonMesh2D::uniform_rectangle(
            Bounds2D::new(0.0, 2.0, 0.0, 1.0),
            4,
            2,
            BoundaryKind::Rigid,
        );
        let cache = GeometryCache::from_tessellation(&mesh);
        assert_eq!(cache.areas.len(), mesh.edges().len());
        assert_eq!(cache.volumes.len(), mesh.total_point_count());
        assert_relative_eq!(cache.volumes[0], 0.25, epsilon = 1e-14);
        assert!(cache.areas.iter().all(|&a| (a - 0.5).abs() < 1e-14));
        assert!(cache.check(&mesh).is_ok());
    }

    #[test]
    fn test_check_rejects_stale_cache() {
        let mesh = PolygonMesh2D::uniform_rectangle(
            Bounds2D::new(0.0, 1.0, 0.0, 1.0),
            2,
            2,
            BoundaryKind::Rigid,
        );
        let cache = GeometryCache::new(vec![1.0; 3], vec![1.0; 4]);
        assert!(cache.check(&mesh).is_err());
    }
}

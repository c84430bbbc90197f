//! In-memory polygonal mesh.
//!
//! Stores a tessellation that was computed elsewhere: points, centres of
//! mass, volumes, widths, edges and the ghost-image mapping. A structured
//! builder produces rectangular cells with mirrored (rigid) or translated
//! (periodic) ghost images along the outer boundary.

use std::f64::consts::PI;

use glam::DVec2;

use crate::boundary::BoundaryKind;
use crate::error::AleError;
use crate::solver::ComputationalCell;
use crate::types::Bounds2D;

use super::tessellation::{Edge, Tessellation};

/// Raw tessellation data, indexed by point (real points first, then ghosts).
#[derive(Clone, Debug, Default)]
pub struct MeshParts {
    /// Generating points
    pub points: Vec<DVec2>,
    /// Cell centres of mass
    pub centers_of_mass: Vec<DVec2>,
    /// Cell volumes
    pub volumes: Vec<f64>,
    /// Characteristic cell widths
    pub widths: Vec<f64>,
    /// Neighbor lists
    pub neighbors: Vec<Vec<usize>>,
    /// Original (real) index of every point
    pub original_indices: Vec<usize>,
    /// Interfaces
    pub edges: Vec<Edge>,
    /// Number of real points
    pub n_real: usize,
}

impl MeshParts {
    fn push_point(&mut self, point: DVec2, volume: f64, original: usize) -> usize {
        let index = self.points.len();
        self.points.push(point);
        self.centers_of_mass.push(point);
        self.volumes.push(volume);
        self.widths.push((volume / PI).sqrt());
        self.neighbors.push(Vec::new());
        self.original_indices.push(original);
        index
    }

    fn push_edge(&mut self, vertices: (DVec2, DVec2), first: usize, second: usize) {
        self.neighbors[first].push(second);
        self.neighbors[second].push(first);
        self.edges.push(Edge::new(vertices, (first, second)));
    }
}

/// Polygonal mesh backed by [`MeshParts`].
#[derive(Clone, Debug)]
pub struct PolygonMesh2D {
    parts: MeshParts,
}

impl PolygonMesh2D {
    /// Wrap precomputed tessellation data.
    ///
    /// Every per-point list must have one entry per point and the real
    /// count cannot exceed the number of points.
    pub fn from_parts(parts: MeshParts) -> Result<Self, AleError> {
        let n = parts.points.len();
        let lengths = [
            ("centers_of_mass", parts.centers_of_mass.len()),
            ("volumes", parts.volumes.len()),
            ("widths", parts.widths.len()),
            ("neighbors", parts.neighbors.len()),
            ("original_indices", parts.original_indices.len()),
        ];
        for (what, len) in lengths {
            if len != n {
                return Err(AleError::length_mismatch(what, n, len));
            }
        }
        if parts.n_real > n {
            return Err(AleError::length_mismatch("real points", n, parts.n_real));
        }
        Ok(Self { parts })
    }

    /// Uniform grid of `nx × ny` rectangular cells with generating points at
    /// the cell centres.
    ///
    /// Cell (i, j) has index `j * nx + i`. Each boundary face gets its own
    /// ghost point: a mirror image for wall sides (original index is the
    /// adjacent cell itself) or the periodic image of the opposite cell.
    /// Edges are oriented so that normals point in +x or +y.
    ///
    /// # Example
    ///
    /// ```
    /// use ale_rs::boundary::BoundaryKind;
    /// use ale_rs::mesh::{PolygonMesh2D, Tessellation};
    /// use ale_rs::types::Bounds2D;
    ///
    /// let mesh = PolygonMesh2D::uniform_rectangle(
    ///     Bounds2D::new(0.0, 2.0, 0.0, 1.0),
    ///     2,
    ///     1,
    ///     BoundaryKind::Rigid,
    /// );
    /// assert_eq!(mesh.point_count(), 2);
    /// assert_eq!(mesh.edges().len(), 7);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `nx` or `ny` is zero.
    pub fn uniform_rectangle(bounds: Bounds2D, nx: usize, ny: usize, kind: BoundaryKind) -> Self {
        assert!(
            nx > 0 && ny > 0,
            "Need at least one cell in each direction"
        );

        let dx = bounds.width() / nx as f64;
        let dy = bounds.height() / ny as f64;
        let volume = dx * dy;
        let cell = |i: usize, j: usize| j * nx + i;

        let mut parts = MeshParts {
            n_real: nx * ny,
            ..MeshParts::default()
        };

        for j in 0..ny {
            for i in 0..nx {
                let center =
                    bounds.origin() + DVec2::new((i as f64 + 0.5) * dx, (j as f64 + 0.5) * dy);
                parts.push_point(center, volume, cell(i, j));
            }
        }

        // Faces normal to x
        for j in 0..ny {
            let y0 = bounds.y_min + j as f64 * dy;
            let y1 = y0 + dy;
            for i in 0..=nx {
                let x = bounds.x_min + i as f64 * dx;
                let vertices = (DVec2::new(x, y0), DVec2::new(x, y1));
                let shift = DVec2::new(dx, 0.0);
                if i == 0 {
                    let real = cell(0, j);
                    let original = if kind.periodic_x() { cell(nx - 1, j) } else { real };
                    let ghost = parts.push_point(parts.points[real] - shift, volume, original);
                    parts.push_edge(vertices, ghost, real);
                } else if i == nx {
                    let real = cell(nx - 1, j);
                    let original = if kind.periodic_x() { cell(0, j) } else { real };
                    let ghost = parts.push_point(parts.points[real] + shift, volume, original);
                    parts.push_edge(vertices, real, ghost);
                } else {
                    parts.push_edge(vertices, cell(i - 1, j), cell(i, j));
                }
            }
        }

        // Faces normal to y
        for j in 0..=ny {
            let y = bounds.y_min + j as f64 * dy;
            for i in 0..nx {
                let x0 = bounds.x_min + i as f64 * dx;
                let vertices = (DVec2::new(x0, y), DVec2::new(x0 + dx, y));
                let shift = DVec2::new(0.0, dy);
                if j == 0 {
                    let real = cell(i, 0);
                    let original = if kind.periodic_y() { cell(i, ny - 1) } else { real };
                    let ghost = parts.push_point(parts.points[real] - shift, volume, original);
                    parts.push_edge(vertices, ghost, real);
                } else if j == ny {
                    let real = cell(i, ny - 1);
                    let original = if kind.periodic_y() { cell(i, 0) } else { real };
                    let ghost = parts.push_point(parts.points[real] + shift, volume, original);
                    parts.push_edge(vertices, real, ghost);
                } else {
                    parts.push_edge(vertices, cell(i, j - 1), cell(i, j));
                }
            }
        }

        Self { parts }
    }

    /// Extend real-cell states with ghost states copied from each ghost's
    /// original cell.
    pub fn with_ghost_states(
        &self,
        real: &[ComputationalCell],
    ) -> Result<Vec<ComputationalCell>, AleError> {
        if real.len() != self.parts.n_real {
            return Err(AleError::length_mismatch(
                "real cell states",
                self.parts.n_real,
                real.len(),
            ));
        }
        let mut cells = real.to_vec();
        cells.extend(
            self.parts.original_indices[self.parts.n_real..]
                .iter()
                .map(|&o| real[o].clone()),
        );
        Ok(cells)
    }

    /// Underlying tessellation data.
    pub fn parts(&self) -> &MeshParts {
        &self.parts
    }
}

impl Tessellation for PolygonMesh2D {
    fn point_count(&self) -> usize {
        self.parts.n_real
    }

    fn total_point_count(&self) -> usize {
        self.parts.points.len()
    }

    fn edges(&self) -> &[Edge] {
        &self.parts.edges
    }

    fn mesh_point(&self, index: usize) -> DVec2 {
        self.parts.points[index]
    }

    fn cell_cm(&self, index: usize) -> DVec2 {
        self.parts.centers_of_mass[index]
    }

    fn width(&self, index: usize) -> f64 {
        self.parts.widths[index]
    }

    fn cell_volume(&self, index: usize) -> f64 {
        self.parts.volumes[index]
    }

    fn neighbors(&self, index: usize) -> &[usize] {
        &self.parts.neighbors[index]
    }

    fn original_index(&self, index: usize) -> usize {
        self.parts.original_indices[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square(nx: usize, ny: usize, kind: BoundaryKind) -> PolygonMesh2D {
        PolygonMesh2D::uniform_rectangle(Bounds2D::new(0.0, 1.0, 0.0, 1.0), nx, ny, kind)
    }

    #[test]
    fn test_counts() {
        let mesh = unit_square(3, 2, BoundaryKind::Rigid);
        assert_eq!(mesh.point_count(), 6);
        // (nx+1)*ny + nx*(ny+1) edges, one ghost per boundary face
        assert_eq!(mesh.edges().len(), 4 * 2 + 3 * 3);
        assert_eq!(mesh.total_point_count(), 6 + 2 * 2 + 2 * 3);
    }

    #[test]
    fn test_normals_point_along_axes() {
        let mesh = unit_square(2, 2, BoundaryKind::Rigid);
        for edge in mesh.edges() {
            let n = mesh.edge_normal(edge);
            let along_x = (n - DVec2::X).length() < 1e-12;
            let along_y = (n - DVec2::Y).length() < 1e-12;
            assert!(along_x || along_y, "unexpected normal {:?}", n);
        }
    }

    #[test]
    fn test_rigid_ghosts_are_self_images() {
        let mesh = unit_square(2, 2, BoundaryKind::Rigid);
        let boundary: Vec<_> = mesh
            .edges()
            .iter()
            .filter(|e| !mesh.is_real(e.neighbors.0) || !mesh.is_real(e.neighbors.1))
            .collect();
        assert_eq!(boundary.len(), 8);
        assert!(boundary.iter().all(|e| mesh.is_self_edge(e)));
    }

    #[test]
    fn test_periodic_ghosts_map_to_opposite_cell() {
        let mesh = unit_square(3, 1, BoundaryKind::Periodic);
        let west = mesh.edges()[0];
        assert_eq!(west.neighbors.1, 0);
        assert_eq!(mesh.original_index(west.neighbors.0), 2);
        assert!(!mesh.is_self_edge(&west));

        // ny = 1 makes the y-faces periodic self-images
        let south = mesh
            .edges()
            .iter()
            .find(|e| e.vertices.0.y == 0.0 && e.vertices.1.y == 0.0)
            .unwrap();
        assert!(mesh.is_self_edge(south));
    }

    #[test]
    fn test_ghost_points_mirror_across_wall() {
        let mesh = unit_square(2, 1, BoundaryKind::Rigid);
        let west = mesh.edges()[0];
        assert_relative_eq!(mesh.mesh_point(west.neighbors.0).x, -0.25, epsilon = 1e-14);
        assert_relative_eq!(mesh.width(0), (0.5 / PI).sqrt(), epsilon = 1e-14);
    }

    #[test]
    fn test_ghost_states() {
        let mesh = unit_square(2, 1, BoundaryKind::Periodic);
        let real = vec![
            ComputationalCell::new(1.0, 1.0, DVec2::ZERO),
            ComputationalCell::new(2.0, 1.0, DVec2::ZERO),
        ];
        let cells = mesh.with_ghost_states(&real).unwrap();
        assert_eq!(cells.len(), mesh.total_point_count());
        for i in 0..cells.len() {
            assert_eq!(cells[i].density, real[mesh.original_index(i)].density);
        }
        assert!(mesh.with_ghost_states(&real[..1]).is_err());
    }

    #[test]
    fn test_from_parts_validates_lengths() {
        let parts = MeshParts {
            points: vec![DVec2::ZERO; 2],
            centers_of_mass: vec![DVec2::ZERO; 2],
            volumes: vec![1.0; 2],
            widths: vec![1.0; 1],
            neighbors: vec![Vec::new(); 2],
            original_indices: vec![0, 1],
            edges: Vec::new(),
            n_real: 2,
        };
        let err = PolygonMesh2D::from_parts(parts).unwrap_err();
        assert!(matches!(
            err,
            AleError::LengthMismatch {
                what: "widths",
                ..
            }
        ));
    }
}

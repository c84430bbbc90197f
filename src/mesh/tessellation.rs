//! Tessellation interface consumed by the flux, update and motion stages.
//!
//! Mesh points are the generating points of the polygonal cells. Indices
//! `0..point_count()` are real cells owned by this process; indices from
//! `point_count()` up to `total_point_count()` are ghost cells (mirror images
//! across walls, periodic images, or halo cells of neighboring ranks).
//! Cell-state slices handed to the core cover all of them.

use glam::DVec2;

use crate::types::CellIndex;

/// An interface between two cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    /// Segment endpoints
    pub vertices: (DVec2, DVec2),
    /// Raw point indices (first, second). Indices at or above the real-cell
    /// count refer to ghost cells.
    pub neighbors: (usize, usize),
}

impl Edge {
    /// Create an edge.
    pub fn new(vertices: (DVec2, DVec2), neighbors: (usize, usize)) -> Self {
        Self {
            vertices,
            neighbors,
        }
    }

    /// Edge length (the 2D "area" of the interface).
    #[inline]
    pub fn length(&self) -> f64 {
        self.vertices.0.distance(self.vertices.1)
    }

    /// Midpoint of the segment.
    #[inline]
    pub fn midpoint(&self) -> DVec2 {
        0.5 * (self.vertices.0 + self.vertices.1)
    }
}

/// Classification of a raw neighbor index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellRef {
    /// A real cell whose extensive record this process updates.
    Real(CellIndex),
    /// A ghost cell; its records are never mutated here.
    Ghost(usize),
}

impl CellRef {
    /// The real cell, if any.
    #[inline]
    pub fn real(self) -> Option<CellIndex> {
        match self {
            CellRef::Real(c) => Some(c),
            CellRef::Ghost(_) => None,
        }
    }
}

/// Read-only view of the polygonal mesh.
pub trait Tessellation: Send + Sync {
    /// Number of real cells (and mesh points) owned by this process.
    fn point_count(&self) -> usize;

    /// Number of real plus ghost points.
    fn total_point_count(&self) -> usize;

    /// All interfaces, in enumeration order.
    fn edges(&self) -> &[Edge];

    /// Generating point of a cell.
    fn mesh_point(&self, index: usize) -> DVec2;

    /// Centre of mass of a cell.
    fn cell_cm(&self, index: usize) -> DVec2;

    /// Characteristic width of a cell.
    fn width(&self, index: usize) -> f64;

    /// Volume (area) of a cell.
    fn cell_volume(&self, index: usize) -> f64;

    /// Indices of the cells sharing an edge with `index`.
    fn neighbors(&self, index: usize) -> &[usize];

    /// Index of the real cell a point is an image of. Real cells map to
    /// themselves.
    fn original_index(&self, index: usize) -> usize;

    /// Whether `index` is a real cell.
    #[inline]
    fn is_real(&self, index: usize) -> bool {
        index < self.point_count()
    }

    /// Classify a raw index as real or ghost.
    #[inline]
    fn classify(&self, index: usize) -> CellRef {
        if self.is_real(index) {
            CellRef::Real(CellIndex::new(index))
        } else {
            CellRef::Ghost(index)
        }
    }

    /// Whether both sides of an edge are images of the same cell.
    #[inline]
    fn is_self_edge(&self, edge: &Edge) -> bool {
        self.original_index(edge.neighbors.0) == self.original_index(edge.neighbors.1)
    }

    /// Unit normal of an edge, pointing from the first neighbor toward the
    /// second and perpendicular to the segment.
    fn edge_normal(&self, edge: &Edge) -> DVec2 {
        let d = self.mesh_point(edge.neighbors.1) - self.mesh_point(edge.neighbors.0);
        let t = (edge.vertices.1 - edge.vertices.0).normalize();
        (d - d.dot(t) * t).normalize()
    }
}

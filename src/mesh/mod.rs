//! Mesh representation.
//!
//! - [`Tessellation`]: read-only view of the polygonal mesh used by the core
//! - [`PolygonMesh2D`]: in-memory tessellation with a structured builder
//! - [`GeometryCache`]: per-timestep interface areas and cell volumes

mod cache;
mod polygon_mesh;
mod tessellation;

pub use cache::GeometryCache;
pub use polygon_mesh::{MeshParts, PolygonMesh2D};
pub use tessellation::{CellRef, Edge, Tessellation};

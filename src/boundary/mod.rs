//! Outer boundary description.
//!
//! The wall and ratchet flux strategies live in [`crate::flux`]; this module
//! only describes the rectangle that closes the domain and how it wraps.

mod outer;

pub use outer::{BoundaryKind, OuterBoundary};

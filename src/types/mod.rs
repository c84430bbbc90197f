//! Strongly-typed domain types.
//!
//! - Index newtypes keep cell and edge positions apart
//! - [`Bounds2D`] and [`SideBoundaries`] describe the rectangular outer domain

mod bounds;
mod indices;
mod sides;

pub use bounds::Bounds2D;
pub use indices::{CellIndex, EdgeIndex};
pub use sides::SideBoundaries;

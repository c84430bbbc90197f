//! Outer boundary of the computational domain.

use std::fmt;

use crate::types::{Bounds2D, SideBoundaries};

/// How the outer rectangle closes the domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// Reflecting walls on all four sides.
    #[default]
    Rigid,
    /// Periodic in both directions.
    Periodic,
    /// Periodic in x, walls in y.
    HalfPeriodic,
}

impl BoundaryKind {
    /// Whether the x-direction wraps around.
    pub fn periodic_x(self) -> bool {
        matches!(self, BoundaryKind::Periodic | BoundaryKind::HalfPeriodic)
    }

    /// Whether the y-direction wraps around.
    pub fn periodic_y(self) -> bool {
        matches!(self, BoundaryKind::Periodic)
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BoundaryKind::Rigid => "rigid",
            BoundaryKind::Periodic => "periodic",
            BoundaryKind::HalfPeriodic => "half_periodic",
        };
        f.write_str(s)
    }
}

/// Rectangular outer boundary.
///
/// # Example
///
/// ```
/// use ale_rs::boundary::{BoundaryKind, OuterBoundary};
/// use ale_rs::types::Bounds2D;
///
/// let outer = OuterBoundary::new(Bounds2D::new(0.0, 1.0, 0.0, 2.0), BoundaryKind::Rigid);
/// assert_eq!(outer.extent().north, 2.0);
/// assert!(!outer.is_periodic());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OuterBoundary {
    /// Domain rectangle
    pub bounds: Bounds2D,
    /// Boundary kind
    pub kind: BoundaryKind,
}

impl OuterBoundary {
    /// Create an outer boundary.
    pub fn new(bounds: Bounds2D, kind: BoundaryKind) -> Self {
        Self { bounds, kind }
    }

    /// Coordinate of each side of the domain.
    pub fn extent(&self) -> SideBoundaries<f64> {
        self.bounds.sides()
    }

    /// Fully periodic domains have no side a point could cross.
    pub fn is_periodic(&self) -> bool {
        self.kind == BoundaryKind::Periodic
    }
}

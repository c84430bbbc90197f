//! Rectangular outer domain.

use glam::DVec2;

use super::SideBoundaries;

/// Axis-aligned rectangle enclosing the mesh.
///
/// # Example
///
/// ```
/// use ale_rs::types::Bounds2D;
///
/// let bounds = Bounds2D::new(-1.0, 1.0, 0.0, 0.5);
/// assert_eq!(bounds.width(), 2.0);
/// assert_eq!(bounds.sides().north, 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2D {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds2D {
    /// Create the rectangle `[x_min, x_max] × [y_min, y_max]`.
    ///
    /// # Panics
    ///
    /// Panics if either extent is empty.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        assert!(x_max > x_min, "empty x extent [{x_min}, {x_max}]");
        assert!(y_max > y_min, "empty y extent [{y_min}, {y_max}]");
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Lower-left corner.
    #[inline]
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.x_min, self.y_min)
    }

    /// Coordinate of each side: y for south and north, x for east and west.
    pub fn sides(&self) -> SideBoundaries<f64> {
        SideBoundaries::new(self.y_min, self.x_max, self.y_max, self.x_min)
    }
}

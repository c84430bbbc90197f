//! Values attached to the four sides of the outer rectangle.

/// One value per side of the domain.
///
/// The overshoot clamp visits the sides as east, west, north, south.
///
/// # Example
///
/// ```
/// use ale_rs::types::SideBoundaries;
///
/// let extent = SideBoundaries::new(0.0, 2.0, 1.0, -2.0);
/// assert_eq!(extent.east, 2.0);
/// assert_eq!(extent.west, -2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SideBoundaries<T> {
    /// y = y_min
    pub south: T,
    /// x = x_max
    pub east: T,
    /// y = y_max
    pub north: T,
    /// x = x_min
    pub west: T,
}

impl<T> SideBoundaries<T> {
    /// Side values in south, east, north, west order.
    pub fn new(south: T, east: T, north: T, west: T) -> Self {
        Self {
            south,
            east,
            north,
            west,
        }
    }
}

impl SideBoundaries<f64> {
    /// Distance from `point` to each side, positive inside the rectangle.
    pub fn distances(&self, point: glam::DVec2) -> Self {
        Self {
            south: point.y - self.south,
            east: self.east - point.x,
            north: self.north - point.y,
            west: point.x - self.west,
        }
    }
}

//! Offsets between points.

use num_traits::Float;

/// The offset from one [`Point2`](super::Point2) to another.
///
/// Produced by subtracting points; the orientation tests of point location are
/// written as cross products of these offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Computes the 2D cross product.
    ///
    /// Positive when `other` turns counter-clockwise from `self`, zero when
    /// the two are parallel. For offsets `b - a` and `c - a` this is twice the
    /// signed area of the triangle `a`, `b`, `c`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }
}

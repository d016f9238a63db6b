//! Cached circumcircle data per simplex.

use crate::primitives::Point2;
use crate::triangle::{circumcenter, circumradius};
use num_traits::Float;

/// Circumcenter and circumradius of one simplex.
///
/// Either value is `None` when the simplex is degenerate: the circumcenter
/// when its determinant is zero, the radius when its area is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleInfo<F> {
    /// Center of the circumcircle.
    pub circumcenter: Option<Point2<F>>,
    /// Radius of the circumcircle.
    pub circumradius: Option<F>,
}

impl<F: Float> TriangleInfo<F> {
    /// Computes the circumcircle data of the triangle `a`, `b`, `c`.
    pub fn from_vertices(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self {
            circumcenter: circumcenter(a, b, c).ok(),
            circumradius: circumradius(a, b, c),
        }
    }

    /// Returns the circumcircle as `(center, radius)` if both are defined.
    #[inline]
    pub fn circumcircle(&self) -> Option<(Point2<F>, F)> {
        self.circumcenter.zip(self.circumradius)
    }

    /// Returns true if the simplex has no usable circumcircle.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.circumcircle().is_none()
    }
}

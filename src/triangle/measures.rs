//! Distances and triangle area.

use crate::primitives::Point2;
use num_traits::Float;

/// Returns the squared distance between two points.
///
/// Faster than [`distance`]; use it when only comparing against other
/// squared quantities.
#[inline]
pub fn squared_distance<F: Float>(p0: Point2<F>, p1: Point2<F>) -> F {
    p0.distance_squared(p1)
}

/// Returns the Euclidean distance between two points.
#[inline]
pub fn distance<F: Float>(p0: Point2<F>, p1: Point2<F>) -> F {
    squared_distance(p0, p1).sqrt()
}

/// Returns the (unsigned) area of the triangle `a`, `b`, `c`.
///
/// Computed as half the absolute shoelace sum over the three vertices, so the
/// result does not depend on vertex order. Collinear or repeated vertices give
/// zero.
///
/// # Example
///
/// ```
/// use sibson::triangle::triangle_area;
/// use sibson::Point2;
///
/// let area = triangle_area(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(0.0, 3.0),
/// );
/// assert_eq!(area, 6.0);
/// ```
pub fn triangle_area<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    let mut sum = F::zero();
    sum = sum + (a.x * b.y - b.x * a.y);
    sum = sum + (b.x * c.y - c.x * b.y);
    sum = sum + (c.x * a.y - a.x * c.y);

    sum.abs() / F::from(2.0).unwrap()
}

//! Circumcircle of a triangle.

use super::measures::{distance, triangle_area};
use crate::error::GeometryError;
use crate::primitives::Point2;
use num_traits::Float;

/// Computes the circumcenter of the triangle `a`, `b`, `c`.
///
/// Uses the closed-form determinant solution. All three points must be
/// distinct and not collinear.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateTriangle`] when the denominator
/// determinant is exactly zero (collinear or coincident points). No fallback
/// center is produced.
///
/// # Example
///
/// ```
/// use sibson::triangle::circumcenter;
/// use sibson::{GeometryError, Point2};
///
/// let cc = circumcenter(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(0.0, 2.0),
/// )
/// .unwrap();
/// assert_eq!(cc, Point2::new(1.0, 1.0));
///
/// let collinear = circumcenter(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(2.0, 2.0),
/// );
/// assert_eq!(collinear, Err(GeometryError::DegenerateTriangle));
/// ```
pub fn circumcenter<F: Float>(
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
) -> Result<Point2<F>, GeometryError> {
    let bc_y = b.y - c.y;
    let ca_y = c.y - a.y;
    let ab_y = a.y - b.y;
    let cb_x = c.x - b.x;
    let ac_x = a.x - c.x;
    let ba_x = b.x - a.x;

    let det = a.x * bc_y + b.x * ca_y + c.x * ab_y;
    if det == F::zero() {
        return Err(GeometryError::DegenerateTriangle);
    }

    let half = F::from(0.5).unwrap();
    let inv = half / det;

    let a_mag = a.x * a.x + a.y * a.y;
    let b_mag = b.x * b.x + b.y * b.y;
    let c_mag = c.x * c.x + c.y * c.y;

    Ok(Point2::new(
        (a_mag * bc_y + b_mag * ca_y + c_mag * ab_y) * inv,
        (a_mag * cb_x + b_mag * ac_x + c_mag * ba_x) * inv,
    ))
}

/// Returns the circumradius of the triangle `a`, `b`, `c`.
///
/// Computed as `|ab|·|bc|·|ca| / (4·area)`. Returns `None` when the triangle
/// has zero area; check for it before using the radius in a containment test.
pub fn circumradius<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Option<F> {
    let area = triangle_area(a, b, c);
    if area > F::zero() {
        let product = distance(a, b) * distance(b, c) * distance(c, a);
        Some(product / (F::from(4.0).unwrap() * area))
    } else {
        None
    }
}

/// Returns the squared circumradius of the triangle `a`, `b`, `c`.
///
/// Avoids the square root of [`circumradius`] for callers that only compare
/// against squared distances. Returns `None` when the triangle has zero area.
pub fn squared_circumradius<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Option<F> {
    let area = triangle_area(a, b, c);
    if area > F::zero() {
        let product = distance(a, b) * distance(b, c) * distance(c, a);
        Some(product * product / (F::from(16.0).unwrap() * area * area))
    } else {
        None
    }
}

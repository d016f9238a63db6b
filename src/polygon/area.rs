//! Shoelace area of an ordered vertex ring.

use crate::primitives::Point2;
use num_traits::Float;

/// Computes the signed area of a polygon using the shoelace formula.
///
/// The polygon is implicitly closed (the last vertex connects to the first).
/// Positive for CCW winding, negative for CW winding. Returns zero for fewer
/// than three vertices.
pub fn signed_shoelace_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y;
        area = area - vertices[j].x * vertices[i].y;
    }

    area / F::from(2.0).unwrap()
}

/// Computes the absolute area of a polygon given as an ordered traversal of
/// its vertices.
///
/// # Example
///
/// ```
/// use sibson::polygon::shoelace_area;
/// use sibson::Point2;
///
/// let square = [
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(0.0, 2.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(2.0, 0.0),
/// ];
/// assert_eq!(shoelace_area(&square), 4.0);
/// ```
pub fn shoelace_area<F: Float>(vertices: &[Point2<F>]) -> F {
    signed_shoelace_area(vertices).abs()
}

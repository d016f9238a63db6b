//! Small meshes shared by unit tests.

use super::{Mesh, Triangle};
use crate::primitives::Point2;

/// The unit square split along its (0,0)-(1,1) diagonal.
pub(crate) fn unit_square() -> Mesh<f64> {
    Mesh::new(
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ],
        vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)],
    )
    .unwrap()
}

/// An `n` x `n` vertex grid with unit spacing, each cell split along its
/// rising diagonal into two CCW triangles.
///
/// Vertex `(i, j)` has id `j * n + i`; cell `(i, j)` owns simplices
/// `2 * (j * (n - 1) + i)` and the one after it.
pub(crate) fn grid_mesh(n: usize) -> Mesh<f64> {
    let mut points = Vec::with_capacity(n * n);
    for j in 0..n {
        for i in 0..n {
            points.push(Point2::new(i as f64, j as f64));
        }
    }

    let mut simplices = Vec::with_capacity(2 * (n - 1) * (n - 1));
    for j in 0..n - 1 {
        for i in 0..n - 1 {
            let v = j * n + i;
            simplices.push(Triangle::new(v, v + 1, v + n + 1));
            simplices.push(Triangle::new(v, v + n + 1, v + n));
        }
    }

    Mesh::new(points, simplices).unwrap()
}

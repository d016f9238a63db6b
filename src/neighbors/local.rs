//! Natural neighbors of a single located point.

use crate::error::GeometryError;
use crate::primitives::Point2;
use crate::triangle::{circumcenter, squared_circumradius, squared_distance};
use crate::triangulation::Triangulation;
use std::collections::BTreeSet;

/// Finds the natural-neighbor simplices of `point`, which is known to lie in
/// `containing_simplex`.
///
/// Only simplices within two adjacency hops of `containing_simplex` are
/// considered: its neighbors and their neighbors. A candidate qualifies when
/// `point` lies strictly inside its circumcircle (squared distance to the
/// circumcenter below the squared circumradius); points exactly on the circle
/// do not qualify. Degenerate candidates are skipped. No spatial index is
/// built.
///
/// `containing_simplex` itself is only considered when it is reached as a
/// neighbor of one of its neighbors, which is always the case when it has any
/// neighbor.
///
/// Returns simplex ids in ascending order.
///
/// # Errors
///
/// Returns [`GeometryError::SimplexOutOfRange`] if `containing_simplex` is not
/// part of the triangulation.
///
/// # Example
///
/// ```
/// use sibson::neighbors::find_nn_triangles_point;
/// use sibson::triangulation::{Mesh, Triangle, Triangulation};
/// use sibson::Point2;
///
/// let mesh = Mesh::new(
///     vec![
///         Point2::new(0.0_f64, 0.0),
///         Point2::new(1.0, 0.0),
///         Point2::new(1.0, 1.0),
///         Point2::new(0.0, 1.0),
///     ],
///     vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)],
/// )
/// .unwrap();
///
/// let point = Point2::new(0.7, 0.2);
/// let containing = mesh.find_simplex(point).unwrap();
/// let nn = find_nn_triangles_point(&mesh, containing, point).unwrap();
/// assert_eq!(nn, vec![0, 1]);
/// ```
pub fn find_nn_triangles_point<T: Triangulation>(
    tri: &T,
    containing_simplex: usize,
    point: Point2<T::Scalar>,
) -> Result<Vec<usize>, GeometryError> {
    let len = tri.simplices().len();
    if containing_simplex >= len {
        return Err(GeometryError::SimplexOutOfRange {
            index: containing_simplex,
            len,
        });
    }

    let mut candidates = BTreeSet::new();
    for neighbor in tri.neighbors(containing_simplex).into_iter().flatten() {
        candidates.insert(neighbor);
        candidates.extend(tri.neighbors(neighbor).into_iter().flatten());
    }

    let mut nn = Vec::new();
    for candidate in candidates {
        let [a, b, c] = tri.simplex_points(candidate);

        let circle = circumcenter(a, b, c)
            .ok()
            .zip(squared_circumradius(a, b, c));
        let Some((center, radius_squared)) = circle else {
            tracing::trace!(simplex = candidate, "skipping degenerate candidate");
            continue;
        };

        if squared_distance(point, center) < radius_squared {
            nn.push(candidate);
        }
    }

    tracing::trace!(
        containing_simplex,
        natural_neighbors = nn.len(),
        "local natural-neighbor search finished"
    );

    Ok(nn)
}

//! The triangulation trait and an owned mesh implementing it.

use super::locate::SimplexGrid;
use super::simplex::{EdgeKey, Triangle};
use crate::error::GeometryError;
use crate::primitives::Point2;
use num_traits::Float;
use std::collections::HashMap;

/// Raw adjacency value meaning "no neighbor across this edge".
///
/// Only meaningful for [`Mesh::from_parts`]; the [`Triangulation`] interface
/// reports missing neighbors as `None`.
pub const NO_NEIGHBOR: i64 = -1;

/// Read-only access to a 2D triangulation.
///
/// Simplex ids are indices into [`simplices`](Triangulation::simplices) and
/// must stay stable for the lifetime of the value. Adjacency is expected to be
/// symmetric: if `j` is a neighbor of `i`, then `i` is a neighbor of `j`.
pub trait Triangulation {
    /// Coordinate type of the sample points.
    type Scalar: Float;

    /// The sample points, indexed by vertex id.
    fn points(&self) -> &[Point2<Self::Scalar>];

    /// The simplices, indexed by simplex id.
    fn simplices(&self) -> &[Triangle];

    /// The neighbors of `simplex`, where entry `k` is the simplex across the
    /// edge opposite vertex `k`, or `None` on the triangulation boundary.
    ///
    /// # Panics
    ///
    /// May panic if `simplex` is out of range.
    fn neighbors(&self, simplex: usize) -> [Option<usize>; 3];

    /// Returns a simplex containing `point`, or `None` if it lies outside the
    /// triangulation.
    fn find_simplex(&self, point: Point2<Self::Scalar>) -> Option<usize>;

    /// Returns the coordinates of the three vertices of `simplex`.
    ///
    /// # Panics
    ///
    /// Panics if `simplex` or one of its vertices is out of range.
    fn simplex_points(&self, simplex: usize) -> [Point2<Self::Scalar>; 3] {
        let tri = self.simplices()[simplex];
        let points = self.points();
        [points[tri.a], points[tri.b], points[tri.c]]
    }
}

/// An owned triangulation: points, simplices and their adjacency.
///
/// `Mesh` does not triangulate anything itself. It stores simplices produced
/// by a triangulator and derives (or accepts) the neighbor table.
///
/// # Example
///
/// ```
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
/// assert_eq!(mesh.neighbors(0), [None, Some(1), None]);
/// assert_eq!(mesh.find_simplex(Point2::new(0.2, 0.8)), Some(1));
/// assert_eq!(mesh.find_simplex(Point2::new(2.0, 0.5)), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh<F> {
    points: Vec<Point2<F>>,
    simplices: Vec<Triangle>,
    neighbors: Vec<[Option<usize>; 3]>,
    locator: SimplexGrid<F>,
}

impl<F: Float> Mesh<F> {
    /// Creates a mesh and derives adjacency from shared edges.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::VertexOutOfRange`] if a simplex refers to a
    /// point that does not exist.
    pub fn new(points: Vec<Point2<F>>, simplices: Vec<Triangle>) -> Result<Self, GeometryError> {
        check_vertices(&points, &simplices)?;

        let mut neighbors = vec![[None; 3]; simplices.len()];
        let mut open_edges: HashMap<EdgeKey, (usize, usize)> = HashMap::new();

        for (s, tri) in simplices.iter().enumerate() {
            for k in 0..3 {
                let (u, v) = tri.opposite_edge(k);
                let key = EdgeKey::new(u, v);
                match open_edges.remove(&key) {
                    Some((t, kt)) => {
                        neighbors[s][k] = Some(t);
                        neighbors[t][kt] = Some(s);
                    }
                    None => {
                        open_edges.insert(key, (s, k));
                    }
                }
            }
        }

        let locator = SimplexGrid::new(&points, &simplices);
        Ok(Self {
            points,
            simplices,
            neighbors,
            locator,
        })
    }

    /// Creates a mesh from an externally computed adjacency table.
    ///
    /// `neighbors[i][k]` is the simplex across the edge opposite vertex `k` of
    /// simplex `i`; any negative value (conventionally [`NO_NEIGHBOR`]) marks a
    /// boundary edge.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::VertexOutOfRange`] for a simplex vertex with no point
    /// - [`GeometryError::AdjacencyMismatch`] if the table length differs from
    ///   the simplex count
    /// - [`GeometryError::SimplexOutOfRange`] for a neighbor id with no simplex
    pub fn from_parts(
        points: Vec<Point2<F>>,
        simplices: Vec<Triangle>,
        neighbors: Vec<[i64; 3]>,
    ) -> Result<Self, GeometryError> {
        check_vertices(&points, &simplices)?;

        if neighbors.len() != simplices.len() {
            return Err(GeometryError::AdjacencyMismatch {
                simplices: simplices.len(),
                rows: neighbors.len(),
            });
        }

        let len = simplices.len();
        let neighbors = neighbors
            .iter()
            .map(|row| {
                let mut out = [None; 3];
                for (slot, &raw) in out.iter_mut().zip(row) {
                    if raw < 0 {
                        continue;
                    }
                    let index = usize::try_from(raw).unwrap_or(usize::MAX);
                    if index >= len {
                        return Err(GeometryError::SimplexOutOfRange { index, len });
                    }
                    *slot = Some(index);
                }
                Ok(out)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let locator = SimplexGrid::new(&points, &simplices);
        Ok(Self {
            points,
            simplices,
            neighbors,
            locator,
        })
    }

    /// Returns the number of simplices.
    #[inline]
    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    /// Returns true if the mesh has no simplices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }
}

fn check_vertices<F>(points: &[Point2<F>], simplices: &[Triangle]) -> Result<(), GeometryError> {
    let len = points.len();
    for tri in simplices {
        if let Some(&index) = tri.vertices().iter().find(|&&v| v >= len) {
            return Err(GeometryError::VertexOutOfRange { index, len });
        }
    }
    Ok(())
}

/// Tests whether `p` lies inside or on the boundary of the triangle `a`, `b`, `c`.
///
/// Degenerate triangles contain nothing.
fn triangle_contains<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, p: Point2<F>) -> bool {
    if (b - a).cross(c - a) == F::zero() {
        return false;
    }

    let d0 = (b - a).cross(p - a);
    let d1 = (c - b).cross(p - b);
    let d2 = (a - c).cross(p - c);

    let has_neg = d0 < F::zero() || d1 < F::zero() || d2 < F::zero();
    let has_pos = d0 > F::zero() || d1 > F::zero() || d2 > F::zero();
    !(has_neg && has_pos)
}

impl<F: Float> Triangulation for Mesh<F> {
    type Scalar = F;

    fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    fn simplices(&self) -> &[Triangle] {
        &self.simplices
    }

    fn neighbors(&self, simplex: usize) -> [Option<usize>; 3] {
        self.neighbors[simplex]
    }

    /// Returns the lowest-numbered simplex containing `point`.
    ///
    /// Only the simplices listed in the point's grid cell are tested.
    /// Non-finite points and simplices with a non-finite vertex are never
    /// matched.
    fn find_simplex(&self, point: Point2<F>) -> Option<usize> {
        self.locator.candidates(point).iter().copied().find(|&s| {
            let [a, b, c] = self.simplex_points(s);
            triangle_contains(a, b, c, point)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangulation::fixtures::{grid_mesh, unit_square};

    /// Square with a center vertex, split into four triangles around it.
    fn square_with_center() -> Mesh<f64> {
        Mesh::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(2.0, 0.0),
                Point2::new(2.0, 2.0),
                Point2::new(0.0, 2.0),
                Point2::new(1.0, 1.0),
            ],
            vec![
                Triangle::new(0, 1, 4),
                Triangle::new(1, 2, 4),
                Triangle::new(2, 3, 4),
                Triangle::new(3, 0, 4),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_adjacency_two_triangles() {
        let mesh = unit_square();
        assert_eq!(mesh.len(), 2);
        assert_eq!(mesh.neighbors(0), [None, Some(1), None]);
        assert_eq!(mesh.neighbors(1), [None, None, Some(0)]);
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let mesh = square_with_center();
        for s in 0..mesh.len() {
            let boundary = mesh.neighbors(s).iter().filter(|n| n.is_none()).count();
            assert_eq!(boundary, 1, "each fan triangle has one hull edge");
            for t in mesh.neighbors(s).into_iter().flatten() {
                assert!(mesh.neighbors(t).contains(&Some(s)));
            }
        }
        // Neighbor 2 of triangle 0 sits across the hull edge (0, 1)
        assert_eq!(mesh.neighbors(0), [Some(1), Some(3), None]);
    }

    #[test]
    fn test_new_rejects_bad_vertex() {
        let result = Mesh::new(
            vec![Point2::new(0.0_f64, 0.0), Point2::new(1.0, 0.0)],
            vec![Triangle::new(0, 1, 2)],
        );
        assert_eq!(
            result,
            Err(GeometryError::VertexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_from_parts_sentinel() {
        let square = unit_square();
        let mesh = Mesh::from_parts(
            square.points().to_vec(),
            square.simplices().to_vec(),
            vec![[NO_NEIGHBOR, 1, NO_NEIGHBOR], [-1, -1, 0]],
        )
        .unwrap();
        assert_eq!(mesh, square);
    }

    #[test]
    fn test_from_parts_errors() {
        let square = unit_square();

        let short = Mesh::from_parts(
            square.points().to_vec(),
            square.simplices().to_vec(),
            vec![[-1, 1, -1]],
        );
        assert_eq!(
            short,
            Err(GeometryError::AdjacencyMismatch {
                simplices: 2,
                rows: 1
            })
        );

        let dangling = Mesh::from_parts(
            square.points().to_vec(),
            square.simplices().to_vec(),
            vec![[-1, 5, -1], [-1, -1, 0]],
        );
        assert_eq!(
            dangling,
            Err(GeometryError::SimplexOutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_find_simplex() {
        let mesh = square_with_center();
        assert_eq!(mesh.find_simplex(Point2::new(1.0, 0.2)), Some(0));
        assert_eq!(mesh.find_simplex(Point2::new(1.8, 1.0)), Some(1));
        assert_eq!(mesh.find_simplex(Point2::new(1.0, 1.8)), Some(2));
        assert_eq!(mesh.find_simplex(Point2::new(0.2, 1.0)), Some(3));
        assert_eq!(mesh.find_simplex(Point2::new(-0.1, 1.0)), None);
        assert_eq!(mesh.find_simplex(Point2::new(3.0, 3.0)), None);
    }

    #[test]
    fn test_find_simplex_boundary_inclusive() {
        let mesh = unit_square();
        assert!(mesh.find_simplex(Point2::new(0.0, 0.0)).is_some());
        assert!(mesh.find_simplex(Point2::new(0.5, 0.0)).is_some());
        assert!(mesh.find_simplex(Point2::new(1.0, 1.0)).is_some());
        assert!(mesh.find_simplex(Point2::new(1.0 + 1e-9, 0.5)).is_none());
    }

    #[test]
    fn test_find_simplex_skips_degenerate() {
        let mesh = Mesh::new(
            vec![
                Point2::new(0.0_f64, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(2.0, 0.0),
            ],
            vec![Triangle::new(0, 1, 2)],
        )
        .unwrap();
        assert_eq!(mesh.find_simplex(Point2::new(0.5, 0.0)), None);
    }

    #[test]
    fn test_find_simplex_matches_full_scan() {
        let mesh = grid_mesh(7);
        let full_scan = |p: Point2<f64>| {
            (0..mesh.len()).find(|&s| {
                let [a, b, c] = mesh.simplex_points(s);
                triangle_contains(a, b, c, p)
            })
        };

        // Vertices, edge points and interior points, plus a margin outside
        for j in -2..=26 {
            for i in -2..=26 {
                let p = Point2::new(f64::from(i) * 0.25, f64::from(j) * 0.25 + 0.1);
                assert_eq!(mesh.find_simplex(p), full_scan(p), "{p:?}");
            }
        }
    }

    #[test]
    fn test_find_simplex_non_finite() {
        let mesh = unit_square();
        assert_eq!(mesh.find_simplex(Point2::new(f64::NAN, 0.5)), None);
        assert_eq!(mesh.find_simplex(Point2::new(0.5, f64::NAN)), None);
        assert_eq!(mesh.find_simplex(Point2::new(f64::INFINITY, 0.5)), None);
    }

    #[test]
    fn test_simplex_points() {
        let mesh = unit_square();
        assert_eq!(
            mesh.simplex_points(1),
            [
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0)
            ]
        );
    }
}

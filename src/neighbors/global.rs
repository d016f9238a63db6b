//! Batch natural-neighbor discovery over a grid.

use super::info::TriangleInfo;
use super::sync::{MaybeSend, MaybeSync};
use crate::primitives::Point2;
use crate::spatial::{KdTree, SpatialIndex};
use crate::triangulation::Triangulation;
use std::ops::Index;

/// Natural-neighbor simplices of every grid point.
///
/// Holds one entry per grid point, in grid order. Each entry lists the
/// simplices whose circumcircle contains the grid point, without duplicates
/// and in ascending simplex order. Grid points outside the triangulation have
/// empty entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipMap {
    members: Vec<Vec<usize>>,
}

impl MembershipMap {
    fn with_grid_points(count: usize) -> Self {
        Self {
            members: vec![Vec::new(); count],
        }
    }

    /// The natural-neighbor simplices of `grid_point`, or `None` if there is
    /// no such grid point.
    pub fn get(&self, grid_point: usize) -> Option<&[usize]> {
        self.members.get(grid_point).map(Vec::as_slice)
    }

    /// Returns true if `simplex` is a natural neighbor of `grid_point`.
    pub fn contains(&self, grid_point: usize, simplex: usize) -> bool {
        self.get(grid_point)
            .is_some_and(|simplices| simplices.binary_search(&simplex).is_ok())
    }

    /// Returns the number of grid points.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the map covers no grid points.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over `(grid_point, simplices)` pairs in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.members.iter().map(Vec::as_slice).enumerate()
    }
}

impl Index<usize> for MembershipMap {
    type Output = [usize];

    fn index(&self, grid_point: usize) -> &[usize] {
        &self.members[grid_point]
    }
}

/// Finds the natural-neighbor simplices of every grid point.
///
/// For every simplex, the grid points within its circumcircle (closed disk)
/// are looked up in a [`KdTree`] built over `grid_points`; those that fall
/// inside the triangulation record the simplex as a natural neighbor.
/// Degenerate simplices are skipped.
///
/// Returns the membership map and the circumcircle data of every simplex,
/// indexed by simplex id.
///
/// With the `parallel` feature, simplices are processed on the rayon thread
/// pool; the result is identical to the sequential one.
///
/// # Example
///
/// ```
/// use sibson::neighbors::find_natural_neighbors;
/// use sibson::triangulation::{Mesh, Triangle};
/// use sibson::Point2;
///
/// let mesh = Mesh::new(
///     vec![
///         Point2::new(0.0_f64, 0.0),
///         Point2::new(4.0, 0.0),
///         Point2::new(4.0, 3.0),
///         Point2::new(0.0, 3.0),
///     ],
///     vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)],
/// )
/// .unwrap();
///
/// let grid = [Point2::new(1.0, 1.0), Point2::new(9.0, 9.0)];
/// let (members, info) = find_natural_neighbors(&mesh, &grid);
///
/// // Both triangles share the rectangle's circumcircle
/// assert_eq!(&members[0], &[0, 1]);
/// // Outside the triangulation
/// assert!(members[1].is_empty());
/// assert_eq!(info.len(), 2);
/// ```
pub fn find_natural_neighbors<T>(
    tri: &T,
    grid_points: &[Point2<T::Scalar>],
) -> (MembershipMap, Vec<TriangleInfo<T::Scalar>>)
where
    T: Triangulation + MaybeSync,
    T::Scalar: MaybeSend + MaybeSync,
{
    find_natural_neighbors_with::<KdTree<T::Scalar>, T>(tri, grid_points)
}

/// Same as [`find_natural_neighbors`], using the index type `I` over the grid.
pub fn find_natural_neighbors_with<I, T>(
    tri: &T,
    grid_points: &[Point2<T::Scalar>],
) -> (MembershipMap, Vec<TriangleInfo<T::Scalar>>)
where
    I: SpatialIndex<T::Scalar> + MaybeSync,
    T: Triangulation + MaybeSync,
    T::Scalar: MaybeSend + MaybeSync,
{
    let index = I::build(grid_points);

    let in_triangulation: Vec<bool> = index
        .points()
        .iter()
        .map(|&p| tri.find_simplex(p).is_some())
        .collect();

    let discover = |simplex: usize| {
        let [a, b, c] = tri.simplex_points(simplex);
        let info = TriangleInfo::from_vertices(a, b, c);

        let qualifiers = match info.circumcircle() {
            Some((center, radius)) => {
                let mut hits: Vec<usize> = index
                    .query_radius(center, radius)
                    .into_iter()
                    .filter(|&g| in_triangulation[g])
                    .collect();
                hits.sort_unstable();
                hits
            }
            None => {
                tracing::debug!(simplex, "skipping degenerate simplex");
                Vec::new()
            }
        };

        (info, qualifiers)
    };

    let simplex_count = tri.simplices().len();

    #[cfg(feature = "parallel")]
    let per_simplex: Vec<_> = {
        use rayon::prelude::*;
        (0..simplex_count).into_par_iter().map(discover).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let per_simplex: Vec<_> = (0..simplex_count).map(discover).collect();

    // Merge in simplex order so every entry comes out sorted.
    let mut members = MembershipMap::with_grid_points(grid_points.len());
    let mut triangle_info = Vec::with_capacity(simplex_count);
    for (simplex, (info, qualifiers)) in per_simplex.into_iter().enumerate() {
        for grid_point in qualifiers {
            members.members[grid_point].push(simplex);
        }
        triangle_info.push(info);
    }

    tracing::debug!(
        simplices = simplex_count,
        grid_points = grid_points.len(),
        inside = in_triangulation.iter().filter(|&&inside| inside).count(),
        "natural-neighbor discovery finished"
    );

    (members, triangle_info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::BruteForceIndex;
    use crate::triangulation::fixtures::grid_mesh;
    use crate::triangulation::{Mesh, Triangle};

    #[test]
    fn test_cell_center_neighbors() {
        let mesh = grid_mesh(3);
        // Center of the lower-left cell lies strictly inside only its own
        // two triangles' (shared) circumcircle
        let (members, info) = find_natural_neighbors(&mesh, &[Point2::new(0.5, 0.5)]);

        assert_eq!(members.len(), 1);
        assert_eq!(&members[0], &[0, 1]);
        assert_eq!(info.len(), 8);
        assert!(info.iter().all(|i| !i.is_degenerate()));
    }

    #[test]
    fn test_closed_disk_includes_cocircular_grid_point() {
        let mesh = grid_mesh(3);
        // (1, 0) is a vertex of cells 0 and 1: it lies on the circumcircles
        // of triangles 0, 1 (lower-left cell) and 2, 3 (lower-right cell)
        let (members, _) = find_natural_neighbors(&mesh, &[Point2::new(1.0, 0.0)]);
        for simplex in [0, 1, 2, 3] {
            assert!(members.contains(0, simplex), "missing simplex {}", simplex);
        }
        assert!(!members.contains(0, 6));
    }

    #[test]
    fn test_outside_points_have_no_members() {
        let mesh = grid_mesh(3);
        // (2.05, 0.5) is inside the circumcircle of the lower-right cell but
        // outside the triangulation
        let grid = [Point2::new(2.05, 0.5), Point2::new(-1.0, -1.0)];
        let (members, _) = find_natural_neighbors(&mesh, &grid);
        assert!(members.get(0).unwrap().is_empty());
        assert!(members.get(1).unwrap().is_empty());
        assert!(members.get(2).is_none());
    }

    #[test]
    fn test_empty_grid() {
        let mesh = grid_mesh(3);
        let (members, info) = find_natural_neighbors(&mesh, &[]);
        assert!(members.is_empty());
        assert_eq!(info.len(), 8);
    }

    #[test]
    fn test_degenerate_simplex_is_skipped() {
        let mesh = Mesh::new(
            vec![
                Point2::new(0.0_f64, 0.0),
                Point2::new(2.0, 0.0),
                Point2::new(0.0, 2.0),
                Point2::new(4.0, 0.0),
            ],
            // The second simplex is collinear along the x axis
            vec![Triangle::new(0, 1, 2), Triangle::new(0, 1, 3)],
        )
        .unwrap();

        let (members, info) = find_natural_neighbors(&mesh, &[Point2::new(0.5, 0.5)]);
        assert_eq!(&members[0], &[0]);
        assert!(!info[0].is_degenerate());
        assert!(info[1].is_degenerate());
    }

    #[test]
    fn test_entries_are_sorted_and_unique() {
        let mesh = grid_mesh(3);
        let mut grid = Vec::new();
        for j in 0..9 {
            for i in 0..9 {
                grid.push(Point2::new(i as f64 * 0.25, j as f64 * 0.25));
            }
        }
        let (members, _) = find_natural_neighbors(&mesh, &grid);

        assert_eq!(members.len(), grid.len());
        for (_, simplices) in members.iter() {
            assert!(simplices.windows(2).all(|w| w[0] < w[1]));
        }
        // Every grid point inside the triangulation has at least its own simplex
        assert!(members.iter().all(|(_, s)| !s.is_empty()));
    }

    #[test]
    fn test_nan_grid_point_does_not_hide_others() {
        let mesh = grid_mesh(3);
        let mut grid: Vec<Point2<f64>> = (0..7).map(|i| Point2::new(i as f64 * 0.3, 0.5)).collect();
        let clean = find_natural_neighbors(&mesh, &grid).0;
        grid[3] = Point2::new(f64::NAN, 0.5);

        let (members, _) = find_natural_neighbors(&mesh, &grid);
        let (brute, _) = find_natural_neighbors_with::<BruteForceIndex<f64>, _>(&mesh, &grid);
        assert_eq!(members, brute);
        assert!(members[3].is_empty());
        for g in [0, 1, 2, 4, 5, 6] {
            assert_eq!(&members[g], &clean[g], "grid point {}", g);
        }
    }

    #[cfg(not(feature = "parallel"))]
    #[test]
    fn test_sequential_accepts_non_sync_triangulation() {
        use std::rc::Rc;

        struct Shared(Rc<Mesh<f64>>);

        impl Triangulation for Shared {
            type Scalar = f64;

            fn points(&self) -> &[Point2<f64>] {
                self.0.points()
            }
            fn simplices(&self) -> &[Triangle] {
                self.0.simplices()
            }
            fn neighbors(&self, simplex: usize) -> [Option<usize>; 3] {
                self.0.neighbors(simplex)
            }
            fn find_simplex(&self, point: Point2<f64>) -> Option<usize> {
                self.0.find_simplex(point)
            }
        }

        let mesh = Rc::new(grid_mesh(3));
        let shared = Shared(Rc::clone(&mesh));
        let grid = [Point2::new(0.5, 0.5), Point2::new(1.6, 1.2)];

        assert_eq!(find_natural_neighbors(&shared, &grid), find_natural_neighbors(&*mesh, &grid));
    }

    #[test]
    fn test_index_choice_is_transparent() {
        let mesh = grid_mesh(3);
        let grid: Vec<Point2<f64>> = (0..40)
            .map(|i| Point2::new((i % 8) as f64 * 0.3, (i / 8) as f64 * 0.45))
            .collect();

        let kd = find_natural_neighbors(&mesh, &grid);
        let brute = find_natural_neighbors_with::<BruteForceIndex<f64>, _>(&mesh, &grid);
        assert_eq!(kd, brute);
    }
}

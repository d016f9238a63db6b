//! The spatial index capability.

use crate::primitives::Point2;
use num_traits::Float;

/// A point index answering closed-ball radius queries.
///
/// Implementations own (or copy) the points they were built from and report
/// results as indices into [`points`](SpatialIndex::points), which preserves
/// the order of the slice passed to [`build`](SpatialIndex::build).
pub trait SpatialIndex<F: Float>: Sized {
    /// Builds the index over `points`. An empty slice yields an empty index.
    fn build(points: &[Point2<F>]) -> Self;

    /// The indexed points, in build order.
    fn points(&self) -> &[Point2<F>];

    /// Returns the indices of all points whose distance to `center` is at most `radius`.
    ///
    /// The order of the returned indices is unspecified.
    fn query_radius(&self, center: Point2<F>, radius: F) -> Vec<usize>;

    /// Returns the number of points within `radius` of `center`.
    ///
    /// Always equal to `query_radius(center, radius).len()`.
    fn count_radius(&self, center: Point2<F>, radius: F) -> usize {
        self.query_radius(center, radius).len()
    }

    /// Returns the number of indexed points.
    fn len(&self) -> usize {
        self.points().len()
    }

    /// Returns true if the index holds no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Closed-ball membership shared by every index.
#[inline]
pub(crate) fn within_radius<F: Float>(point: Point2<F>, center: Point2<F>, radius: F) -> bool {
    point.distance(center) <= radius
}

/// A spatial "index" that scans every point.
///
/// O(n) per query with no construction cost beyond copying the points.
#[derive(Debug, Clone, PartialEq)]
pub struct BruteForceIndex<F> {
    points: Vec<Point2<F>>,
}

impl<F: Float> SpatialIndex<F> for BruteForceIndex<F> {
    fn build(points: &[Point2<F>]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }

    fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    fn query_radius(&self, center: Point2<F>, radius: F) -> Vec<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, &p)| within_radius(p, center, radius))
            .map(|(i, _)| i)
            .collect()
    }

    fn count_radius(&self, center: Point2<F>, radius: F) -> usize {
        self.points
            .iter()
            .filter(|&&p| within_radius(p, center, radius))
            .count()
    }
}

//! Batch radius queries of target points around a set of centers.

use super::{KdTree, SpatialIndex};
use crate::primitives::Point2;
use num_traits::Float;

/// For each center, returns every target point within `radius` of it.
///
/// Results are in the same order as `centers`. Points at exactly `radius` are
/// included. A single [`KdTree`] is built over `targets` and shared by all
/// centers; an empty `targets` slice yields an empty list per center.
///
/// # Example
///
/// ```
/// use sibson::spatial::points_within_radius;
/// use sibson::Point2;
///
/// let centers = [Point2::new(0.0_f64, 0.0), Point2::new(10.0, 10.0)];
/// let targets = [
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 2.0),
///     Point2::new(10.0, 9.5),
/// ];
///
/// let matches = points_within_radius(&centers, &targets, 1.0);
/// assert_eq!(matches[0], vec![Point2::new(1.0, 0.0)]);
/// assert_eq!(matches[1], vec![Point2::new(10.0, 9.5)]);
/// ```
pub fn points_within_radius<F: Float>(
    centers: &[Point2<F>],
    targets: &[Point2<F>],
    radius: F,
) -> Vec<Vec<Point2<F>>> {
    points_within_radius_with::<KdTree<F>, F>(centers, targets, radius)
}

/// Same as [`points_within_radius`], using the index type `I`.
///
/// Within each center's list, points appear in the order of `targets`.
pub fn points_within_radius_with<I, F>(
    centers: &[Point2<F>],
    targets: &[Point2<F>],
    radius: F,
) -> Vec<Vec<Point2<F>>>
where
    I: SpatialIndex<F>,
    F: Float,
{
    let index = I::build(targets);
    centers
        .iter()
        .map(|&center| {
            let mut hits = index.query_radius(center, radius);
            hits.sort_unstable();
            hits.into_iter().map(|i| index.points()[i]).collect()
        })
        .collect()
}

/// For each center, returns how many target points lie within `radius` of it.
///
/// Uses the same predicate as [`points_within_radius`], so the counts always
/// equal the lengths of its lists, without materializing them.
pub fn count_within_radius<F: Float>(
    centers: &[Point2<F>],
    targets: &[Point2<F>],
    radius: F,
) -> Vec<usize> {
    count_within_radius_with::<KdTree<F>, F>(centers, targets, radius)
}

/// Same as [`count_within_radius`], using the index type `I`.
pub fn count_within_radius_with<I, F>(
    centers: &[Point2<F>],
    targets: &[Point2<F>],
    radius: F,
) -> Vec<usize>
where
    I: SpatialIndex<F>,
    F: Float,
{
    let index = I::build(targets);
    centers
        .iter()
        .map(|&center| index.count_radius(center, radius))
        .collect()
}

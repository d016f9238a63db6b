//! KD-tree for closed-ball radius queries.
//!
//! A KD-tree is a space-partitioning data structure for organizing points
//! in k-dimensional space. This implementation is specialized for 2D points
//! and answers "which points lie within `r` of this center" queries, which
//! is all natural-neighbor discovery needs.
//!
//! # Example
//!
//! ```
//! use sibson::spatial::{KdTree, SpatialIndex};
//! use sibson::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(2.0, 3.0),
//!     Point2::new(5.0, 4.0),
//!     Point2::new(9.0, 6.0),
//!     Point2::new(4.0, 7.0),
//!     Point2::new(8.0, 1.0),
//!     Point2::new(7.0, 2.0),
//! ];
//!
//! let tree = KdTree::build(&points);
//!
//! let mut hits = tree.query_radius(Point2::new(6.0, 3.0), 1.5);
//! hits.sort();
//! assert_eq!(hits, vec![1, 5]);
//! assert_eq!(tree.count_radius(Point2::new(6.0, 3.0), 1.5), 2);
//! ```

use super::index::{within_radius, SpatialIndex};
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;

/// A node in the KD-tree.
#[derive(Debug, Clone)]
enum KdNode {
    /// A leaf node containing a single point index.
    Leaf {
        /// Index of the point in the tree's point array.
        index: usize,
    },
    /// An internal node that splits space along an axis.
    Internal {
        /// Index of the point at this node (median point).
        index: usize,
        /// The axis along which this node splits (0 = x, 1 = y).
        axis: u8,
        /// Left child (points with smaller coordinate on split axis).
        left: Option<Box<KdNode>>,
        /// Right child (points with larger coordinate on split axis).
        right: Option<Box<KdNode>>,
    },
}

/// A 2D KD-tree over an owned copy of a point set.
///
/// # Construction
///
/// The tree is built by sorting on the split axis and taking the median,
/// alternating split axes at each level.
///
/// # Complexity
///
/// - Construction: O(n log² n)
/// - Radius query: O(√n + k) where k is the number of results
#[derive(Debug, Clone)]
pub struct KdTree<F> {
    points: Vec<Point2<F>>,
    root: Option<Box<KdNode>>,
}

impl<F: Float> KdTree<F> {
    /// Recursively builds the tree.
    fn build_recursive(points: &[Point2<F>], indices: &mut [usize], depth: usize) -> Box<KdNode> {
        let axis = (depth % 2) as u8;

        if indices.len() == 1 {
            return Box::new(KdNode::Leaf { index: indices[0] });
        }

        indices.sort_by(|&a, &b| {
            let (val_a, val_b) = if axis == 0 {
                (points[a].x, points[b].x)
            } else {
                (points[a].y, points[b].y)
            };
            val_a.partial_cmp(&val_b).unwrap_or(Ordering::Equal)
        });

        let median = indices.len() / 2;
        let median_index = indices[median];

        let left = if median > 0 {
            Some(Self::build_recursive(
                points,
                &mut indices[..median],
                depth + 1,
            ))
        } else {
            None
        };

        let right = if median + 1 < indices.len() {
            Some(Self::build_recursive(
                points,
                &mut indices[median + 1..],
                depth + 1,
            ))
        } else {
            None
        };

        Box::new(KdNode::Internal {
            index: median_index,
            axis,
            left,
            right,
        })
    }

    /// Visits every point within `radius` of `query`, pruning subtrees whose
    /// split plane is farther than `radius` away.
    fn visit_radius(
        &self,
        node: &KdNode,
        query: Point2<F>,
        radius: F,
        visit: &mut impl FnMut(usize),
    ) {
        match node {
            KdNode::Leaf { index } => {
                if within_radius(self.points[*index], query, radius) {
                    visit(*index);
                }
            }
            KdNode::Internal {
                index,
                axis,
                left,
                right,
            } => {
                let point = self.points[*index];
                if within_radius(point, query, radius) {
                    visit(*index);
                }

                let (query_val, point_val) = if *axis == 0 {
                    (query.x, point.x)
                } else {
                    (query.y, point.y)
                };

                // Prune only when the split plane is provably out of reach; a
                // NaN comparison visits the child.
                if let Some(child) = left {
                    if (query_val - radius).partial_cmp(&point_val) != Some(Ordering::Greater) {
                        self.visit_radius(child, query, radius, visit);
                    }
                }

                if let Some(child) = right {
                    if (query_val + radius).partial_cmp(&point_val) != Some(Ordering::Less) {
                        self.visit_radius(child, query, radius, visit);
                    }
                }
            }
        }
    }
}

impl<F: Float> SpatialIndex<F> for KdTree<F> {
    /// Builds a KD-tree from a slice of points.
    ///
    /// Points with a NaN coordinate are kept in [`points`](SpatialIndex::points)
    /// but left out of the tree; no radius query can match them. Returns an
    /// empty tree if no point is left.
    fn build(points: &[Point2<F>]) -> Self {
        let points = points.to_vec();
        let mut indices: Vec<usize> = (0..points.len())
            .filter(|&i| !points[i].x.is_nan() && !points[i].y.is_nan())
            .collect();
        if indices.is_empty() {
            return KdTree { points, root: None };
        }

        let root = Self::build_recursive(&points, &mut indices, 0);

        KdTree {
            points,
            root: Some(root),
        }
    }

    fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    fn query_radius(&self, center: Point2<F>, radius: F) -> Vec<usize> {
        let mut results = Vec::new();
        if let Some(root) = &self.root {
            self.visit_radius(root, center, radius, &mut |i| results.push(i));
        }
        results
    }

    fn count_radius(&self, center: Point2<F>, radius: F) -> usize {
        let mut count = 0;
        if let Some(root) = &self.root {
            self.visit_radius(root, center, radius, &mut |_| count += 1);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::BruteForceIndex;

    fn sample_points() -> Vec<Point2<f64>> {
        vec![
            Point2::new(2.0, 3.0),
            Point2::new(5.0, 4.0),
            Point2::new(9.0, 6.0),
            Point2::new(4.0, 7.0),
            Point2::new(8.0, 1.0),
            Point2::new(7.0, 2.0),
        ]
    }

    fn sorted(mut v: Vec<usize>) -> Vec<usize> {
        v.sort_unstable();
        v
    }

    #[test]
    fn test_build_empty() {
        let tree = KdTree::<f64>::build(&[]);
        assert!(tree.is_empty());
        assert!(tree.query_radius(Point2::new(0.0, 0.0), 100.0).is_empty());
        assert_eq!(tree.count_radius(Point2::new(0.0, 0.0), 100.0), 0);
    }

    #[test]
    fn test_build_single() {
        let tree = KdTree::build(&[Point2::new(1.0, 2.0)]);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.query_radius(Point2::new(1.0, 2.0), 0.0), vec![0]);
    }

    #[test]
    fn test_points_keep_build_order() {
        let points = sample_points();
        let tree = KdTree::build(&points);
        assert_eq!(tree.points(), points.as_slice());
    }

    #[test]
    fn test_within_radius_none() {
        let tree = KdTree::build(&sample_points());
        assert!(tree.query_radius(Point2::new(0.0, 0.0), 0.5).is_empty());
    }

    #[test]
    fn test_within_radius_some() {
        let points = sample_points();
        let tree = KdTree::build(&points);
        let center = Point2::new(5.0, 4.0);

        let results = tree.query_radius(center, 2.0);
        assert!(results.contains(&1));
        for idx in &results {
            assert!(points[*idx].distance(center) <= 2.0);
        }
    }

    #[test]
    fn test_within_radius_all() {
        let tree = KdTree::build(&sample_points());
        assert_eq!(tree.query_radius(Point2::new(5.0, 4.0), 100.0).len(), 6);
        assert_eq!(tree.count_radius(Point2::new(5.0, 4.0), 100.0), 6);
    }

    #[test]
    fn test_radius_boundary_is_inclusive() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(3.0, 4.0),
            Point2::new(-3.0, -4.0),
            Point2::new(6.0, 8.0),
        ];
        let tree = KdTree::build(&points);
        assert_eq!(sorted(tree.query_radius(Point2::new(0.0, 0.0), 5.0)), vec![0, 1, 2]);
    }

    #[test]
    fn test_zero_radius_finds_coincident_only() {
        let points = vec![
            Point2::new(1.0_f64, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 1.0 + 1e-12),
            Point2::new(5.0, 5.0),
        ];
        let tree = KdTree::build(&points);
        assert_eq!(sorted(tree.query_radius(Point2::new(1.0, 1.0), 0.0)), vec![0, 1]);
        assert!(tree.query_radius(Point2::new(2.0, 2.0), 0.0).is_empty());
    }

    #[test]
    fn test_nan_point_does_not_hide_neighbors() {
        let mut points: Vec<Point2<f64>> = (0..7).map(|i| Point2::new(i as f64, 0.0)).collect();
        points[3] = Point2::new(f64::NAN, 0.0);

        let tree = KdTree::build(&points);
        let brute = BruteForceIndex::build(&points);
        assert_eq!(tree.len(), 7);

        let center = Point2::new(1.0, 0.0);
        assert_eq!(sorted(tree.query_radius(center, 1.5)), vec![0, 1, 2]);
        assert_eq!(
            sorted(tree.query_radius(center, 1.5)),
            sorted(brute.query_radius(center, 1.5))
        );
        assert_eq!(tree.count_radius(center, 1.5), 3);

        // The NaN point never matches, however large the radius
        assert_eq!(tree.count_radius(Point2::new(3.0, 0.0), 100.0), 6);
    }

    #[test]
    fn test_all_nan_points() {
        let points = vec![Point2::new(f64::NAN, 1.0), Point2::new(2.0, f64::NAN)];
        let tree = KdTree::build(&points);
        assert_eq!(tree.len(), 2);
        assert!(tree.query_radius(Point2::new(2.0, 1.0), 10.0).is_empty());
    }

    #[test]
    fn test_f32_support() {
        let points: Vec<Point2<f32>> = vec![
            Point2::new(1.0, 2.0),
            Point2::new(3.0, 4.0),
            Point2::new(5.0, 6.0),
        ];
        let tree = KdTree::build(&points);
        assert_eq!(tree.query_radius(Point2::new(3.0, 4.0), 0.5), vec![1]);
    }

    #[test]
    fn test_matches_brute_force() {
        let mut points = Vec::new();
        for i in 0..1000 {
            let x = (i * 7 % 100) as f64;
            let y = (i * 13 % 100) as f64;
            points.push(Point2::new(x, y));
        }
        let tree = KdTree::build(&points);
        let brute = BruteForceIndex::build(&points);

        for (center, radius) in [
            (Point2::new(50.0, 50.0), 10.0),
            (Point2::new(0.0, 0.0), 25.0),
            (Point2::new(99.5, 12.25), 3.0),
            (Point2::new(-20.0, 40.0), 21.0),
        ] {
            assert_eq!(
                sorted(tree.query_radius(center, radius)),
                sorted(brute.query_radius(center, radius))
            );
            assert_eq!(
                tree.count_radius(center, radius),
                brute.count_radius(center, radius)
            );
        }
    }
}

//! Spatial indexing and radius queries.
//!
//! Radius queries go through the [`SpatialIndex`] capability so callers can
//! choose the acceleration structure:
//!
//! - [`KdTree`] - A balanced 2D KD-tree, the default
//! - [`BruteForceIndex`] - A linear scan, useful as a reference and for tiny inputs
//!
//! All indexes use the same closed-ball predicate (`distance <= radius`), so
//! points exactly on the query circle are always included.

mod index;
mod kdtree;
mod query;

pub use index::{BruteForceIndex, SpatialIndex};
pub use kdtree::KdTree;
pub use query::{
    count_within_radius, count_within_radius_with, points_within_radius,
    points_within_radius_with,
};

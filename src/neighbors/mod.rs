//! Natural-neighbor triangle discovery.
//!
//! A triangle is a natural neighbor of a point when the point lies within the
//! triangle's circumcircle. Two discovery strategies are provided:
//!
//! - [`find_natural_neighbors`] - for every triangle, finds the grid points
//!   inside its circumcircle. Use it when neighbor sets for a whole grid are
//!   needed at once.
//! - [`find_nn_triangles_point`] - for one point already located in a
//!   triangle, searches the surrounding triangles only. Use it inside
//!   per-point loops.
//!
//! The batch variant treats the circumcircle as a closed disk (points exactly
//! on the circle qualify) while the point variant uses the open disk. The two
//! conventions are kept as they are; they decide how cocircular ties are
//! classified.

mod global;
mod info;
mod local;
mod sync;

pub use global::{find_natural_neighbors, find_natural_neighbors_with, MembershipMap};
pub use info::TriangleInfo;
pub use local::find_nn_triangles_point;
pub use sync::{MaybeSend, MaybeSync};

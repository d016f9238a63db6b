//! Read-only view of a 2D triangulation.
//!
//! Natural-neighbor discovery consumes a triangulation through the
//! [`Triangulation`] trait: sample points, simplices, per-simplex adjacency and
//! point location. Building the triangulation is left to the caller; [`Mesh`]
//! stores one that was produced elsewhere.

#[cfg(test)]
pub(crate) mod fixtures;
mod locate;
mod mesh;
mod simplex;

pub use mesh::{Mesh, Triangulation, NO_NEIGHBOR};
pub use simplex::Triangle;

pub(crate) use simplex::EdgeKey;

//! Error types for natural-neighbor geometry.

use thiserror::Error;

/// Errors that can occur while computing natural-neighbor geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The triangle's vertices are collinear or coincident, so it has no circumcircle.
    #[error("degenerate triangle: vertices are collinear or coincident")]
    DegenerateTriangle,

    /// A simplex or edge refers to a point that does not exist.
    #[error("vertex index {index} out of range for {len} points")]
    VertexOutOfRange {
        /// The offending vertex index.
        index: usize,
        /// Number of points available.
        len: usize,
    },

    /// A simplex id is not part of the triangulation.
    #[error("simplex index {index} out of range for {len} simplices")]
    SimplexOutOfRange {
        /// The offending simplex index.
        index: usize,
        /// Number of simplices available.
        len: usize,
    },

    /// An adjacency table does not have one row per simplex.
    #[error("adjacency table has {rows} rows for {simplices} simplices")]
    AdjacencyMismatch {
        /// Number of simplices.
        simplices: usize,
        /// Number of adjacency rows supplied.
        rows: usize,
    },
}

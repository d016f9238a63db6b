//! Outer boundary of a set of triangles.
//!
//! The natural-neighbor triangles of a point form a star-shaped region whose
//! outline is the polygon used for Sibson weights. Building it takes two
//! steps:
//!
//! 1. [`assemble_boundary_edges`] cancels every edge shared by two triangles
//!    of the set, leaving the outer edges in an [`EdgeSet`].
//! 2. [`order_edges`] chains those edges head to tail into an
//!    [`OrderedBoundary`], which converts to a vertex ring for
//!    [`shoelace_area`](crate::polygon::shoelace_area).
//!
//! The region is not necessarily convex, so a convex hull of the vertices is
//! not a substitute.
//!
//! # Example
//!
//! ```
//! use sibson::boundary::assemble_boundary_edges;
//! use sibson::polygon::shoelace_area;
//! use sibson::triangulation::{Mesh, Triangle, Triangulation};
//! use sibson::Point2;
//!
//! let mesh = Mesh::new(
//!     vec![
//!         Point2::new(0.0_f64, 0.0),
//!         Point2::new(1.0, 0.0),
//!         Point2::new(1.0, 1.0),
//!         Point2::new(0.0, 1.0),
//!     ],
//!     vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)],
//! )
//! .unwrap();
//!
//! let edges = assemble_boundary_edges(&[0, 1], &mesh).unwrap();
//! assert_eq!(edges.len(), 4); // the shared diagonal cancels
//!
//! let boundary = edges.ordered();
//! assert!(boundary.is_closed());
//!
//! let polygon = boundary.to_polygon(mesh.points()).unwrap();
//! assert_eq!(shoelace_area(&polygon), 1.0);
//! ```

mod edges;
mod order;

pub use edges::{assemble_boundary_edges, Edge, EdgeSet};
pub use order::{order_edges, OrderedBoundary};

//! sibson - Geometric machinery for natural-neighbor interpolation
//!
//! Given a triangulation of scattered samples and a set of target points,
//! this crate finds the natural-neighbor triangles of each target, extracts
//! the local boundary polygon of those triangles, and measures it. Turning
//! that geometry into interpolation weights is left to the caller.
//!
//! - [`triangle`] - distances, triangle area and circumcircles
//! - [`spatial`] - radius queries behind the [`SpatialIndex`](spatial::SpatialIndex) capability
//! - [`triangulation`] - the [`Triangulation`](triangulation::Triangulation) interface and [`Mesh`](triangulation::Mesh)
//! - [`neighbors`] - batch and per-point natural-neighbor discovery
//! - [`boundary`] - edge cancellation and ordering into a polygon
//! - [`polygon`] - shoelace area
//!
//! # Example
//!
//! ```
//! use sibson::boundary::assemble_boundary_edges;
//! use sibson::neighbors::find_natural_neighbors;
//! use sibson::polygon::shoelace_area;
//! use sibson::triangulation::{Mesh, Triangle, Triangulation};
//! use sibson::Point2;
//!
//! let mesh = Mesh::new(
//!     vec![
//!         Point2::new(0.0_f64, 0.0),
//!         Point2::new(2.0, 0.0),
//!         Point2::new(2.0, 2.0),
//!         Point2::new(0.0, 2.0),
//!     ],
//!     vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)],
//! )
//! .unwrap();
//!
//! let (members, _info) = find_natural_neighbors(&mesh, &[Point2::new(1.0, 0.5)]);
//! let edges = assemble_boundary_edges(&members[0], &mesh).unwrap();
//! let polygon = edges.ordered().to_polygon(mesh.points()).unwrap();
//! assert_eq!(shoelace_area(&polygon), 4.0);
//! ```

pub mod boundary;
pub mod error;
pub mod neighbors;
pub mod polygon;
pub mod primitives;
pub mod spatial;
pub mod triangle;
pub mod triangulation;

pub use error::GeometryError;
pub use primitives::{Point2, Vec2};

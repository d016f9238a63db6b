//! Pure numeric functions on points and triangles.
//!
//! These are the building blocks of natural-neighbor discovery:
//!
//! - [`squared_distance`] / [`distance`] between two points
//! - [`triangle_area`] via the shoelace sum over three vertices
//! - [`circumcenter`], [`circumradius`] and [`squared_circumradius`]
//!
//! Degenerate triangles (collinear or coincident vertices) have no
//! circumcircle. [`circumcenter`] reports this as
//! [`GeometryError::DegenerateTriangle`](crate::GeometryError::DegenerateTriangle),
//! while the radius functions return `None` so batch callers can skip the
//! triangle without aborting.

mod circumcircle;
mod measures;

pub use circumcircle::{circumcenter, circumradius, squared_circumradius};
pub use measures::{distance, squared_distance, triangle_area};

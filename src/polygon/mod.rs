//! Polygon area via the shoelace formula.

mod area;

pub use area::{shoelace_area, signed_shoelace_area};

//! Planar computational geometry over generic coordinates.
//!
//! Purpose
//! - Orientation, on-segment and segment-intersection predicates that every
//!   other routine routes its turn decisions through.
//! - Derived algorithms: monotone-chain hull, ray-casting containment,
//!   shoelace area, divide-and-conquer closest pair, rotating-calipers
//!   diameter.
//!
//! Conventions
//! - Stateless: each call copies what it sorts; nothing is cached.
//! - Degenerate inputs return degenerate values (0, false, input unchanged)
//!   rather than errors.
//! - One tolerance (`GeomCfg::eps`, default `EPS`) governs collinearity and
//!   float equality; `*_with` variants take it explicitly.
//! - Cross products go through `Coord::cross_diff`: exact 128-bit arithmetic
//!   for integer coordinates, `nalgebra::Vector2<f64>` for floats.

mod calipers;
mod closest;
mod hull;
mod polygon;
mod predicates;
pub mod rand;
mod types;
mod util;

pub use calipers::{diameter_pair, diameter_pair_with, polygon_diameter, polygon_diameter_with};
pub use closest::{closest_pair, closest_pair_points};
pub use hull::{convex_hull, convex_hull_with};
pub use polygon::{is_inside, is_inside_with, polygon_area, signed_polygon_area};
pub use predicates::{
    do_intersect, do_intersect_with, on_segment, orientation, orientation_with, Orientation,
};
pub use types::{CfgError, Coord, GeomCfg, Point, EPS};

//! Planar computational-geometry primitives.
//!
//! Predicates (orientation, on-segment, segment intersection) and the
//! algorithms built from them: convex hull, point in polygon, polygon area,
//! closest pair and polygon diameter. Everything is stateless and generic
//! over the coordinate type (`geom2::Coord`: integers or floats).
//!
//! ```
//! use planar::prelude::*;
//!
//! let square = vec![
//!     Point::new(0, 0),
//!     Point::new(4, 0),
//!     Point::new(4, 4),
//!     Point::new(0, 4),
//! ];
//! assert_eq!(polygon_area(&square), 16.0);
//! assert!(is_inside(&square, Point::new(2, 2)));
//! assert!((polygon_diameter(&square) - 32f64.sqrt()).abs() < 1e-12);
//! ```

pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_convex_polygon, draw_int_cloud, draw_point_cloud, Bounds2, RadialCfg, ReplayToken,
        VertexCount,
    };
    pub use crate::geom2::{
        closest_pair, closest_pair_points, convex_hull, convex_hull_with, diameter_pair,
        do_intersect, do_intersect_with, is_inside, is_inside_with, on_segment, orientation,
        orientation_with, polygon_area, polygon_diameter, polygon_diameter_with,
        signed_polygon_area, CfgError, Coord, GeomCfg, Orientation, Point, EPS,
    };
}

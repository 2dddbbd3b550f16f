//! Simple-polygon queries: ray-casting containment and shoelace area.
//!
//! A polygon is a vertex sequence closed implicitly (last → first), without
//! a repeated closing vertex. Fewer than three vertices is degenerate:
//! area 0, nothing inside.

use super::predicates::{on_segment, orientation_with, Orientation};
use super::types::{Coord, GeomCfg, Point};

/// Point-in-polygon (boundary counts as inside), default tolerance.
pub fn is_inside<T: Coord>(polygon: &[Point<T>], p: Point<T>) -> bool {
    is_inside_with(polygon, p, GeomCfg::default())
}

/// Ray casting towards +x with parity counting.
///
/// An edge counts when its endpoints lie on opposite sides of the ray's
/// line, with a vertex exactly on the line treated as above it. A ray
/// through a vertex therefore counts once, and horizontal edges never
/// count. The crossing side comes from the edge's orientation against `p`,
/// so no ray endpoint is ever constructed.
pub fn is_inside_with<T: Coord>(polygon: &[Point<T>], p: Point<T>, cfg: GeomCfg) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        let turn = orientation_with(a, b, p, cfg);
        if turn == Orientation::Collinear && on_segment(a, p, b) {
            return true;
        }
        if (a.y > p.y) != (b.y > p.y) {
            // Upward edges cross right of p when p is on their left.
            let right_of_p = if b.y > a.y {
                turn == Orientation::CounterClockwise
            } else {
                turn == Orientation::Clockwise
            };
            inside ^= right_of_p;
        }
    }
    inside
}

/// Twice-signed shoelace sum → signed area; positive for CCW vertex order.
///
/// Terms are fanned from the first vertex, so each one is an exact
/// `Coord::cross_diff` for integer coordinates.
pub fn signed_polygon_area<T: Coord>(polygon: &[Point<T>]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let o = polygon[0];
    let twice: f64 = (1..n - 1)
        .map(|i| T::cross_diff(o, polygon[i], o, polygon[i + 1]))
        .sum();
    0.5 * twice
}

/// Unsigned area of a simple polygon (0 below three vertices).
#[inline]
pub fn polygon_area<T: Coord>(polygon: &[Point<T>]) -> f64 {
    signed_polygon_area(polygon).abs()
}

//! Andrew's monotone chain convex hull.
//!
//! Output: hull vertices in CCW order starting at the lexicographically
//! smallest point, no duplicates, no three consecutive collinear vertices.
//! Collinear input collapses to its two extreme points.

use super::predicates::{orientation_with, Orientation};
use super::types::{Coord, GeomCfg, Point};

/// Convex hull with the default tolerance.
pub fn convex_hull<T: Coord>(points: &[Point<T>]) -> Vec<Point<T>> {
    convex_hull_with(points, GeomCfg::default())
}

/// Convex hull; inputs with at most two points are returned unchanged.
pub fn convex_hull_with<T: Coord>(points: &[Point<T>], cfg: GeomCfg) -> Vec<Point<T>> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    let mut pts: Vec<Point<T>> = points.to_vec();
    pts.sort_by(|a, b| a.lex_cmp(b));
    pts.dedup_by(|a, b| a.approx_eq(b, cfg.eps));
    if pts.len() <= 2 {
        return pts;
    }

    let n = pts.len();
    let mut hull: Vec<Point<T>> = Vec::with_capacity(n + 1);
    // Pops on Collinear too, so redundant boundary points never survive.
    let turns_ccw = |hull: &[Point<T>], p: Point<T>| {
        let (a, b) = (hull[hull.len() - 2], hull[hull.len() - 1]);
        orientation_with(a, b, p, cfg) == Orientation::CounterClockwise
    };

    // lower chain
    for &p in &pts {
        while hull.len() >= 2 && !turns_ccw(&hull, p) {
            hull.pop();
        }
        hull.push(p);
    }
    // upper chain; never pops into the lower one
    let floor = hull.len() + 1;
    for &p in pts[..n - 1].iter().rev() {
        while hull.len() >= floor && !turns_ccw(&hull, p) {
            hull.pop();
        }
        hull.push(p);
    }
    // last point repeats the first
    hull.pop();

    tracing::trace!(input = points.len(), hull = hull.len(), "convex_hull");
    hull
}

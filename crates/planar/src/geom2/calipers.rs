//! Polygon diameter via rotating calipers over the convex hull.
//!
//! The antipodal advance (`cross > 0`, via `Coord::cross_diff`) needs strictly
//! convex position; the hull already drops collinear vertices under the same
//! tolerance.

use super::hull::convex_hull_with;
use super::types::{Coord, GeomCfg, Point};

/// Largest pairwise distance of the point set, default tolerance.
pub fn polygon_diameter<T: Coord>(points: &[Point<T>]) -> f64 {
    polygon_diameter_with(points, GeomCfg::default())
}

/// Largest pairwise distance (0 below two points).
pub fn polygon_diameter_with<T: Coord>(points: &[Point<T>], cfg: GeomCfg) -> f64 {
    diameter_pair_with(points, cfg).map_or(0.0, |(_, _, d)| d)
}

/// Antipodal pair realizing the diameter; `None` below two points.
pub fn diameter_pair<T: Coord>(points: &[Point<T>]) -> Option<(Point<T>, Point<T>, f64)> {
    diameter_pair_with(points, GeomCfg::default())
}

/// Antipodal diameter pair, hull built with `cfg`.
pub fn diameter_pair_with<T: Coord>(
    points: &[Point<T>],
    cfg: GeomCfg,
) -> Option<(Point<T>, Point<T>, f64)> {
    if points.len() < 2 {
        return None;
    }
    let hull = convex_hull_with(points, cfg);
    let n = hull.len();
    match n {
        0 | 1 => return None,
        2 => return Some((hull[0], hull[1], hull[0].dist_sq(&hull[1]).sqrt())),
        _ => {}
    }

    let edge_turn = |i: usize, j: usize| {
        T::cross_diff(hull[i], hull[(i + 1) % n], hull[j], hull[(j + 1) % n])
    };
    let mut best = (0.0f64, 0usize, 0usize);
    let mut j = 1usize;
    for i in 0..n {
        // Advance j while edge j still turns left relative to edge i.
        while edge_turn(i, j) > 0.0 {
            j = (j + 1) % n;
        }
        let next = (i + 1) % n;
        for k in [i, next] {
            let d2 = hull[k].dist_sq(&hull[j]);
            if d2 > best.0 {
                best = (d2, k, j);
            }
        }
    }

    let (d2, a, b) = best;
    let d = d2.sqrt();
    tracing::trace!(input = points.len(), hull = n, diameter = d, "polygon_diameter");
    Some((hull[a], hull[b], d))
}

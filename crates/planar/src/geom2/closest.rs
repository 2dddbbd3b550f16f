//! Closest pair of points (divide and conquer, O(n log n)).
//!
//! - Points are sorted once by x (rank order) and once by y.
//! - Each level splits the x-sorted slice at its midpoint and partitions the
//!   y-sorted list by x-rank, so y-order survives without re-sorting and
//!   duplicates of the split point land on the correct side.
//! - Distances stay squared until the single final `sqrt`.

use std::cmp::Ordering;

use nalgebra::Vector2;

use super::types::{Coord, Point};

/// Point tagged with its position in the x-sorted order and in the input.
#[derive(Clone, Copy, Debug)]
struct Ranked {
    v: Vector2<f64>,
    rank: usize,
    orig: usize,
}

/// Best squared distance found so far and the input indices realizing it.
#[derive(Clone, Copy, Debug)]
struct Best {
    d2: f64,
    pair: Option<(usize, usize)>,
}

impl Best {
    const NONE: Best = Best {
        d2: f64::MAX,
        pair: None,
    };

    #[inline]
    fn offer(&mut self, a: &Ranked, b: &Ranked) {
        let d2 = (a.v - b.v).norm_squared();
        if d2 < self.d2 {
            self.d2 = d2;
            self.pair = Some((a.orig, b.orig));
        }
    }

    #[inline]
    fn min(self, other: Best) -> Best {
        if other.d2 < self.d2 {
            other
        } else {
            self
        }
    }
}

/// Minimum Euclidean distance between two input points (0 below two points).
pub fn closest_pair<T: Coord>(points: &[Point<T>]) -> f64 {
    closest_pair_points(points).map_or(0.0, |(_, _, d)| d)
}

/// Closest pair together with its distance; `None` below two points.
pub fn closest_pair_points<T: Coord>(points: &[Point<T>]) -> Option<(Point<T>, Point<T>, f64)> {
    if points.len() < 2 {
        return None;
    }
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&i, &j| points[i].lex_cmp(&points[j]));
    let by_x: Vec<Ranked> = order
        .iter()
        .enumerate()
        .map(|(rank, &orig)| Ranked {
            v: points[orig].to_vector(),
            rank,
            orig,
        })
        .collect();
    let mut by_y = by_x.clone();
    by_y.sort_by(|a, b| a.v.y.partial_cmp(&b.v.y).unwrap_or(Ordering::Equal));

    let best = recurse(&by_x, &by_y);
    let (i, j) = best.pair?;
    let d = best.d2.sqrt();
    tracing::trace!(n = points.len(), distance = d, "closest_pair");
    Some((points[i], points[j], d))
}

/// `xs` is a contiguous rank range; `ys` holds exactly those points by y.
fn recurse(xs: &[Ranked], ys: &[Ranked]) -> Best {
    let n = xs.len();
    if n <= 3 {
        let mut best = Best::NONE;
        for i in 0..n {
            for j in (i + 1)..n {
                best.offer(&xs[i], &xs[j]);
            }
        }
        return best;
    }

    let mid = n / 2;
    let split = xs[mid].rank;
    let mid_x = xs[mid].v.x;
    let (ys_left, ys_right): (Vec<Ranked>, Vec<Ranked>) =
        ys.iter().copied().partition(|r| r.rank < split);

    let best = recurse(&xs[..mid], &ys_left).min(recurse(&xs[mid..], &ys_right));

    let strip: Vec<Ranked> = ys
        .iter()
        .filter(|r| {
            let dx = r.v.x - mid_x;
            dx * dx < best.d2
        })
        .copied()
        .collect();
    strip_closest(&strip, best)
}

/// Scan the y-ordered strip; the y-gap bound keeps the inner loop short.
fn strip_closest(strip: &[Ranked], mut best: Best) -> Best {
    for i in 0..strip.len() {
        for j in (i + 1)..strip.len() {
            let dy = strip[j].v.y - strip[i].v.y;
            if dy * dy >= best.d2 {
                break;
            }
            best.offer(&strip[i], &strip[j]);
        }
    }
    best
}

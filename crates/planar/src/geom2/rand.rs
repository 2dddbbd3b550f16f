//! Seeded point sets and convex polygons for tests and benchmarks.
//!
//! - `draw_point_cloud` / `draw_int_cloud`: uniform samples in a box.
//! - `draw_convex_polygon`: points on a perturbed circle, closed up by
//!   `convex_hull` (strictly convex, CCW).
//! - Every draw takes a `ReplayToken`; equal tokens give equal output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::hull::convex_hull;
use super::types::Point;

/// How many circle points `draw_convex_polygon` places (at least 3).
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Shape of the perturbed circle behind `draw_convex_polygon`.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Max angular shift of a point, relative to the even spacing `2π/n`.
    /// Kept below 0.5 so neighbours never swap.
    pub angle_jitter_frac: f64,
    /// Max relative change of each point's distance from `center`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: (f64, f64),
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            center: (0.0, 0.0),
        }
    }
}

/// Axis-aligned sampling box `[min, max)` per coordinate.
#[derive(Clone, Copy, Debug)]
pub struct Bounds2 {
    pub min: f64,
    pub max: f64,
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self {
            min: -1.0,
            max: 1.0,
        }
    }
}

/// Names one draw: a test or bench picks a `seed`, then numbers its cases
/// with `index`. Neighbouring indices yield unrelated point sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    fn rng(self) -> StdRng {
        // splitmix64 finalizer over the index, then over seed ^ that
        fn scramble(mut z: u64) -> u64 {
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
            z ^ (z >> 31)
        }
        let stream = scramble(self.index.wrapping_add(0x9e3779b97f4a7c15));
        StdRng::seed_from_u64(scramble(self.seed ^ stream))
    }
}

/// `n` uniform float points in `bounds × bounds`.
///
/// A box with `min >= max` (or NaN) yields `n` copies of `(min, min)`.
pub fn draw_point_cloud(n: usize, bounds: Bounds2, tok: ReplayToken) -> Vec<Point<f64>> {
    let (lo, hi) = (bounds.min, bounds.max);
    if !(lo < hi) {
        // empty box: every sample collapses onto its corner
        return vec![Point::new(lo, lo); n];
    }
    let mut rng = tok.rng();
    (0..n)
        .map(|_| Point::new(rng.gen_range(lo..hi), rng.gen_range(lo..hi)))
        .collect()
}

/// `n` uniform integer points in `[-half_extent, half_extent]²`.
///
/// Small extents give many duplicates and collinear triples.
pub fn draw_int_cloud(n: usize, half_extent: i64, tok: ReplayToken) -> Vec<Point<i64>> {
    let mut rng = tok.rng();
    let r = half_extent.saturating_abs();
    (0..n)
        .map(|_| Point::new(rng.gen_range(-r..=r), rng.gen_range(-r..=r)))
        .collect()
}

/// Random strictly convex polygon (CCW) via radial jitter + convex hull.
///
/// The hull may drop a vertex that jitter pushed inside, so the vertex count
/// can be below the sampled `n`.
pub fn draw_convex_polygon(cfg: RadialCfg, tok: ReplayToken) -> Vec<Point<f64>> {
    let mut rng = tok.rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let pts: Vec<Point<f64>> = (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Point::new(cfg.center.0 + th.cos() * r, cfg.center.1 + th.sin() * r)
        })
        .collect();
    convex_hull(&pts)
}

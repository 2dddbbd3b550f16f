//! Orientation, on-segment and segment intersection predicates.
//!
//! `classify` is the only place a three-point turn is decided; hull,
//! point-in-polygon and the public wrappers all go through it so the eps
//! policy stays uniform. The cross product itself comes from
//! `Coord::cross_diff` (exact for integer coordinates).

use serde::{Deserialize, Serialize};

use super::types::{Coord, GeomCfg, Point};

/// Turn direction of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

#[inline]
fn classify(c: f64, eps: f64) -> Orientation {
    if c.abs() < eps {
        Orientation::Collinear
    } else if c > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

#[inline]
fn between<T: PartialOrd>(a: T, q: T, b: T) -> bool {
    if a <= b {
        a <= q && q <= b
    } else {
        b <= q && q <= a
    }
}

/// Orientation of `(p, q, r)` from the cross product of `q − p` and `r − q`,
/// with the default tolerance.
#[inline]
pub fn orientation<T: Coord>(p: Point<T>, q: Point<T>, r: Point<T>) -> Orientation {
    orientation_with(p, q, r, GeomCfg::default())
}

/// Orientation with an explicit tolerance: `|cross| < cfg.eps` is collinear.
#[inline]
pub fn orientation_with<T: Coord>(p: Point<T>, q: Point<T>, r: Point<T>, cfg: GeomCfg) -> Orientation {
    classify(T::cross_diff(p, q, q, r), cfg.eps)
}

/// True iff `q` lies in the axis-aligned bounding box of segment `p–r`.
///
/// Pair with an `Orientation::Collinear` result to test "q on segment".
#[inline]
pub fn on_segment<T: Coord>(p: Point<T>, q: Point<T>, r: Point<T>) -> bool {
    between(p.x, q.x, r.x) && between(p.y, q.y, r.y)
}

/// True iff segment `p1–q1` crosses or touches segment `p2–q2`.
#[inline]
pub fn do_intersect<T: Coord>(p1: Point<T>, q1: Point<T>, p2: Point<T>, q2: Point<T>) -> bool {
    do_intersect_with(p1, q1, p2, q2, GeomCfg::default())
}

/// Segment intersection with an explicit collinearity tolerance.
pub fn do_intersect_with<T: Coord>(
    p1: Point<T>,
    q1: Point<T>,
    p2: Point<T>,
    q2: Point<T>,
    cfg: GeomCfg,
) -> bool {
    use Orientation::Collinear;
    let o1 = orientation_with(p1, q1, p2, cfg);
    let o2 = orientation_with(p1, q1, q2, cfg);
    let o3 = orientation_with(p2, q2, p1, cfg);
    let o4 = orientation_with(p2, q2, q1, cfg);

    let straddle = o1 != Collinear
        && o2 != Collinear
        && o3 != Collinear
        && o4 != Collinear
        && o1 != o2
        && o3 != o4;
    if straddle {
        return true;
    }
    // Touching or overlapping: a collinear endpoint inside the other segment.
    (o1 == Collinear && on_segment(p1, p2, q1))
        || (o2 == Collinear && on_segment(p1, q2, q1))
        || (o3 == Collinear && on_segment(p2, p1, q2))
        || (o4 == Collinear && on_segment(p2, q1, q2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: i32, y: i32) -> Point<i32> {
        Point::new(x, y)
    }

    #[test]
    fn orientation_signs() {
        assert_eq!(orientation(p(0, 0), p(4, 0), p(4, 4)), Orientation::CounterClockwise);
        assert_eq!(orientation(p(0, 0), p(4, 4), p(4, 0)), Orientation::Clockwise);
        assert_eq!(orientation(p(0, 0), p(1, 1), p(5, 5)), Orientation::Collinear);
        // Repeated point is collinear with anything.
        assert_eq!(orientation(p(2, 3), p(2, 3), p(9, -1)), Orientation::Collinear);
    }

    #[test]
    fn orientation_eps_is_injectable() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(2.0, 1e-6);
        assert_eq!(orientation(a, b, c), Orientation::CounterClockwise);
        let loose = GeomCfg::with_eps(1e-3).unwrap();
        assert_eq!(orientation_with(a, b, c, loose), Orientation::Collinear);
    }

    #[test]
    fn large_integers_do_not_overflow() {
        let big = i32::MAX;
        assert_eq!(
            orientation(p(-big, -big), p(big, -big), p(big, big)),
            Orientation::CounterClockwise
        );
    }

    #[test]
    fn fibonacci_triple_is_not_collinear() {
        // |cross| = 1 while each product is ~2^61; f64 products round it away.
        let (a, b, c) = ((-1836311903, -1134903170), (0, 0), (1134903170, 701408733));
        assert_eq!(
            orientation(Point::new(a.0, a.1), Point::new(b.0, b.1), Point::new(c.0, c.1)),
            Orientation::Clockwise
        );
        let wide = |t: (i32, i32)| Point::new(t.0 as i64, t.1 as i64);
        assert_eq!(orientation(wide(a), wide(b), wide(c)), Orientation::Clockwise);
        assert_eq!(orientation(wide(c), wide(b), wide(a)), Orientation::CounterClockwise);
    }

    #[test]
    fn unsigned_orientation_at_type_max() {
        let m = u64::MAX;
        let o = Point::new(0u64, 0);
        let turn = |q: (u64, u64)| orientation(o, Point::new(q.0, q.1), Point::new(m, m));
        assert_eq!(turn((m, m - 1)), Orientation::CounterClockwise);
        assert_eq!(turn((m - 1, m)), Orientation::Clockwise);
        assert_eq!(turn((m - 1, m - 1)), Orientation::Collinear);
    }

    #[test]
    fn on_segment_is_bounding_box() {
        assert!(on_segment(p(0, 0), p(2, 2), p(4, 4)));
        assert!(on_segment(p(4, 4), p(4, 4), p(0, 0)));
        assert!(!on_segment(p(0, 0), p(5, 5), p(4, 4)));
        // Off-line points inside the box pass; callers check collinearity first.
        assert!(on_segment(p(0, 0), p(1, 3), p(4, 4)));
    }

    #[test]
    fn intersections() {
        // Proper crossing.
        assert!(do_intersect(p(0, 0), p(4, 4), p(0, 4), p(4, 0)));
        // Parallel, disjoint.
        assert!(!do_intersect(p(0, 0), p(4, 0), p(0, 1), p(4, 1)));
        // Touching at an endpoint.
        assert!(do_intersect(p(0, 0), p(2, 2), p(2, 2), p(5, 0)));
        // T-junction.
        assert!(do_intersect(p(0, 0), p(4, 0), p(2, 0), p(2, 3)));
        // Collinear overlap.
        assert!(do_intersect(p(0, 0), p(3, 0), p(2, 0), p(6, 0)));
        // Collinear, disjoint.
        assert!(!do_intersect(p(0, 0), p(1, 0), p(2, 0), p(3, 0)));
        // Lines cross, segments don't.
        assert!(!do_intersect(p(0, 0), p(1, 1), p(3, 0), p(2, 1)));
    }

    #[test]
    fn intersection_is_symmetric() {
        let segs = [
            (p(0, 0), p(4, 4), p(0, 4), p(4, 0)),
            (p(0, 0), p(1, 0), p(2, 0), p(3, 0)),
            (p(0, 0), p(2, 2), p(2, 2), p(5, 0)),
        ];
        for (a, b, c, d) in segs {
            assert_eq!(do_intersect(a, b, c, d), do_intersect(c, d, a, b));
            assert_eq!(do_intersect(a, b, c, d), do_intersect(b, a, d, c));
        }
    }

    fn exact_sign(p: (i128, i128), q: (i128, i128), r: (i128, i128)) -> Orientation {
        let c = (q.0 - p.0) * (r.1 - q.1) - (q.1 - p.1) * (r.0 - q.0);
        match c.signum() {
            0 => Orientation::Collinear,
            1 => Orientation::CounterClockwise,
            _ => Orientation::Clockwise,
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        // r = q + k·(q − p) + e: the determinant is d × e, tiny next to |d|².
        #[test]
        fn near_collinear_i64_matches_exact_sign(
            px in -(1i64 << 60)..(1i64 << 60),
            py in -(1i64 << 60)..(1i64 << 60),
            dx in -(1i64 << 60)..(1i64 << 60),
            dy in -(1i64 << 60)..(1i64 << 60),
            k in -1i64..=1,
            ex in -1i64..=1,
            ey in -1i64..=1,
        ) {
            let q = (px + dx, py + dy);
            let r = (q.0 + k * dx + ex, q.1 + k * dy + ey);
            let got = orientation(Point::new(px, py), Point::new(q.0, q.1), Point::new(r.0, r.1));
            let want = exact_sign(
                (px as i128, py as i128),
                (q.0 as i128, q.1 as i128),
                (r.0 as i128, r.1 as i128),
            );
            prop_assert_eq!(got, want);
        }

        #[test]
        fn near_collinear_i32_matches_exact_sign(
            px in -(1i32 << 29)..(1i32 << 29),
            py in -(1i32 << 29)..(1i32 << 29),
            dx in -(1i32 << 28)..(1i32 << 28),
            dy in -(1i32 << 28)..(1i32 << 28),
            k in -1i32..=1,
            ex in -1i32..=1,
            ey in -1i32..=1,
        ) {
            let q = (px + dx, py + dy);
            let r = (q.0 + k * dx + ex, q.1 + k * dy + ey);
            let got = orientation(Point::new(px, py), Point::new(q.0, q.1), Point::new(r.0, r.1));
            let want = exact_sign(
                (px as i128, py as i128),
                (q.0 as i128, q.1 as i128),
                (r.0 as i128, r.1 as i128),
            );
            prop_assert_eq!(got, want);
            // Reversing the triple flips the turn.
            let back = orientation(Point::new(r.0, r.1), Point::new(q.0, q.1), Point::new(px, py));
            let flipped = match got {
                Orientation::Clockwise => Orientation::CounterClockwise,
                Orientation::CounterClockwise => Orientation::Clockwise,
                Orientation::Collinear => Orientation::Collinear,
            };
            prop_assert_eq!(back, flipped);
        }
    }
}

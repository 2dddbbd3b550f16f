use nalgebra::Vector2;

/// z-component of `a × b`; positive when `b` turns counter-clockwise from `a`.
#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.perp(&b)
}

/// `a·b − c·d` for integer factors of magnitude at most 2^64.
///
/// Sign and zero are exact: magnitudes are multiplied in `u128` and only the
/// final difference is rounded to `f64`.
pub(crate) fn det2_exact(a: i128, b: i128, c: i128, d: i128) -> f64 {
    let (neg_ab, ab) = ((a < 0) != (b < 0), a.unsigned_abs() * b.unsigned_abs());
    let (neg_cd, cd) = ((c < 0) != (d < 0), c.unsigned_abs() * d.unsigned_abs());
    let signed = |neg: bool, m: f64| if neg { -m } else { m };
    if neg_ab != neg_cd {
        // ab and −cd share a sign; the sum may exceed u128.
        signed(neg_ab, ab as f64 + cd as f64)
    } else if ab >= cd {
        signed(neg_ab, (ab - cd) as f64)
    } else {
        signed(!neg_ab, (cd - ab) as f64)
    }
}

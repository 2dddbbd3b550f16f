//! Basic 2D types and tolerances shared by every planar routine.
//!
//! - `Coord`: numeric coordinate contract (integers exact, floats eps-tolerant).
//! - `Point<T>`: immutable coordinate pair with lexicographic sort order.
//! - `GeomCfg`: centralizes the collinearity/equality epsilon.
//!
//! Numerics
//! - Cross products go through `Coord::cross_diff`. Integer coordinates are
//!   differenced and multiplied in 128-bit arithmetic, so orientation signs
//!   are exact over the full range of every integer type.
//! - Float coordinates are widened to `f64` (`Point::to_vector`). Callers
//!   working at very large or very small magnitudes should rescale or supply
//!   their own `GeomCfg`.

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::util::{cross, det2_exact};

/// Default tolerance for collinearity and float point equality.
pub const EPS: f64 = 1e-9;

/// Numeric coordinate type accepted by all routines.
pub trait Coord: Copy + PartialOrd + fmt::Debug + fmt::Display + 'static {
    /// True for floating-point types (equality is eps-tolerant).
    const IS_FLOAT: bool;

    /// Widen to the accumulation type.
    fn wide(self) -> f64;

    /// Coordinate equality: exact for integers, `|a - b| < eps` for floats.
    fn coord_eq(self, other: Self, eps: f64) -> bool;

    /// z-component of `(u1 − u0) × (v1 − v0)`.
    ///
    /// Integers: exact sign and zero, magnitude rounded to `f64` at the end.
    fn cross_diff(u0: Point<Self>, u1: Point<Self>, v0: Point<Self>, v1: Point<Self>) -> f64;
}

macro_rules! impl_coord_int {
    ($($t:ty),*) => {$(
        impl Coord for $t {
            const IS_FLOAT: bool = false;
            #[inline]
            fn wide(self) -> f64 {
                self as f64
            }
            #[inline]
            fn coord_eq(self, other: Self, _eps: f64) -> bool {
                self == other
            }
            #[inline]
            fn cross_diff(
                u0: Point<Self>,
                u1: Point<Self>,
                v0: Point<Self>,
                v1: Point<Self>,
            ) -> f64 {
                let d = |a: Self, b: Self| b as i128 - a as i128;
                det2_exact(d(u0.x, u1.x), d(v0.y, v1.y), d(u0.y, u1.y), d(v0.x, v1.x))
            }
        }
    )*};
}

macro_rules! impl_coord_float {
    ($($t:ty),*) => {$(
        impl Coord for $t {
            const IS_FLOAT: bool = true;
            #[inline]
            fn wide(self) -> f64 {
                self as f64
            }
            #[inline]
            fn coord_eq(self, other: Self, eps: f64) -> bool {
                (self.wide() - other.wide()).abs() < eps
            }
            #[inline]
            fn cross_diff(
                u0: Point<Self>,
                u1: Point<Self>,
                v0: Point<Self>,
                v1: Point<Self>,
            ) -> f64 {
                cross(u1.to_vector() - u0.to_vector(), v1.to_vector() - v0.to_vector())
            }
        }
    )*};
}

impl_coord_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_coord_float!(f32, f64);

/// Point in the plane.
///
/// Equality follows `Coord::coord_eq` with `EPS`. There is no
/// `PartialOrd`: `lex_cmp` is a sort key only, not a geometric notion.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: Coord> Point<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Widened copy used for all arithmetic.
    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x.wide(), self.y.wide())
    }

    /// Equality with an explicit tolerance (ignored for integer `T`).
    #[inline]
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.x.coord_eq(other.x, eps) && self.y.coord_eq(other.y, eps)
    }

    /// Lexicographic order (x, then y). Incomparable values (NaN) tie.
    #[inline]
    pub fn lex_cmp(&self, other: &Self) -> Ordering {
        match self.x.partial_cmp(&other.x).unwrap_or(Ordering::Equal) {
            Ordering::Equal => self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal),
            o => o,
        }
    }

    /// Squared Euclidean distance, accumulated in `f64`.
    #[inline]
    pub fn dist_sq(&self, other: &Self) -> f64 {
        (self.to_vector() - other.to_vector()).norm_squared()
    }
}

impl<T: Coord> PartialEq for Point<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, EPS)
    }
}

impl<T: Coord> From<(T, T)> for Point<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Coord> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rejected tolerance values.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum CfgError {
    #[error("tolerance must be non-negative, got {0}")]
    NegativeEps(f64),
    #[error("tolerance must be finite, got {0}")]
    NonFiniteEps(f64),
}

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeomCfg {
    /// `|cross| < eps` counts as collinear.
    pub eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: EPS }
    }
}

impl GeomCfg {
    /// Validated tolerance; the appropriate value is scale-dependent.
    pub fn with_eps(eps: f64) -> Result<Self, CfgError> {
        if !eps.is_finite() {
            return Err(CfgError::NonFiniteEps(eps));
        }
        if eps < 0.0 {
            return Err(CfgError::NegativeEps(eps));
        }
        Ok(Self { eps })
    }
}

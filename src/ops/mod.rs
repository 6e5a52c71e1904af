/*!
Rounded scalar operations.

This is the leaf layer of the crate: given a scalar bound type `F` (`f64` or
`f32`), expose every arithmetic and transcendental primitive [`BareInterval`]
needs, each parameterized by an explicit [`RoundDirection`] and a
[`RoundingPolicy`] selecting the back-end. Every `$trait` below
is generated by a small macro producing one trait per operation (`RoundedAdd`,
`RoundedSub`, etc.) rather than a single do-everything trait, so call sites
read as `x.sqrt(dir, policy)` instead of `Ops::sqrt(x, dir, policy)`.

[`BareInterval`]: crate::bare_interval::BareInterval
*/

pub mod correct;
pub mod native;

use std::fmt;

use crate::round::RoundDirection;

/// Which back-end computes a rounded result.
///
/// `Correct` round-trips through MPFR (via `rug`) and returns the true
/// correctly-rounded image of the exact real operation in the requested
/// direction. `None` uses the platform's native (round-to-nearest) float
/// ops and then widens by one ULP in the requested direction; it is always
/// conservative but never tight, and it raises NG on every result, enforced
/// by the callers in [`crate::interval`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum RoundingPolicy {
    #[default]
    Correct,
    None,
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingPolicy::Correct => f.write_str("correct"),
            RoundingPolicy::None => f.write_str("none"),
        }
    }
}

/// The scalar bound type underlying a [`BareInterval`][crate::bare_interval::BareInterval].
///
/// Implemented for `f64` (`binary64`, the default and primary instantiation)
/// and `f32` (`binary32`). Everything here is exact/native — no rounding
/// direction is involved, since these are either representation queries or
/// operations with no rounding error (`zero`, `is_nan`, `abs`, ...).
pub trait FloatBound:
    Copy + Clone + PartialEq + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Radix of the format; always 2 for `f64`/`f32`.
    const RADIX: u32 = 2;

    /// Binary precision (significand width in bits) used as the MPFR
    /// working precision by the `correct` back-end.
    const PRECISION: u32;

    fn zero() -> Self;
    fn one() -> Self;
    fn neg_one() -> Self;
    fn infinity() -> Self;
    fn neg_infinity() -> Self;
    fn nan() -> Self;

    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_finite(self) -> bool;
    fn is_zero(self) -> bool;
    fn is_sign_negative(self) -> bool;

    /// Exact absolute value; never rounds.
    fn abs(self) -> Self;
    /// Exact negation; never rounds.
    fn neg(self) -> Self;

    /// `min`/`max` ignoring NaN the way interval bound comparisons want
    /// (every caller has already excluded NaN bounds).
    fn min_raw(self, other: Self) -> Self;
    fn max_raw(self, other: Self) -> Self;

    /// Lossy conversion used only by generic norm accumulation ([`crate::matrix::opnorm`])
    /// and `Display`; never used in a path that must preserve enclosure.
    fn to_f64_lossy(self) -> f64;
    fn from_f64_lossy(x: f64) -> Self;

    /// The representable value immediately above `self` (`+infinity` is its
    /// own successor). Used by the `none` back-end to widen by one ULP.
    fn next_up(self) -> Self;
    /// The representable value immediately below `self`.
    fn next_down(self) -> Self;
}

/// Declares one trait per unary rounded operation.
macro_rules! rounded_1ary {
    ($trait:ident, $method:ident, $descr:expr) => {
        #[doc = "Rounded "]
        #[doc = $descr]
        #[doc = ", dispatching on a `RoundingPolicy`."]
        pub trait $trait: FloatBound {
            fn $method(self, dir: RoundDirection, policy: RoundingPolicy) -> Self;
        }
    };
}

macro_rules! rounded_2ary {
    ($trait:ident, $method:ident, $descr:expr) => {
        #[doc = "Rounded "]
        #[doc = $descr]
        #[doc = ", dispatching on a `RoundingPolicy`."]
        pub trait $trait: FloatBound {
            fn $method(self, other: Self, dir: RoundDirection, policy: RoundingPolicy) -> Self;
        }
    };
}

macro_rules! rounded_3ary {
    ($trait:ident, $method:ident, $descr:expr) => {
        #[doc = "Rounded "]
        #[doc = $descr]
        #[doc = ", dispatching on a `RoundingPolicy`."]
        pub trait $trait: FloatBound {
            fn $method(self, b: Self, c: Self, dir: RoundDirection, policy: RoundingPolicy)
                -> Self;
        }
    };
}

rounded_1ary!(RoundedSqrt, sqrt, "sqrt(x)");
rounded_1ary!(RoundedCbrt, cbrt, "cbrt(x)");
rounded_1ary!(RoundedInv, inv, "1/x");
rounded_1ary!(RoundedExp, exp, "exp(x)");
rounded_1ary!(RoundedExp2, exp2, "2^x");
rounded_1ary!(RoundedExp10, exp10, "10^x");
rounded_1ary!(RoundedExpm1, expm1, "exp(x) - 1");
rounded_1ary!(RoundedLog, log, "ln(x)");
rounded_1ary!(RoundedLog2, log2, "log2(x)");
rounded_1ary!(RoundedLog10, log10, "log10(x)");
rounded_1ary!(RoundedLog1p, log1p, "ln(1 + x)");
rounded_1ary!(RoundedSin, sin, "sin(x)");
rounded_1ary!(RoundedCos, cos, "cos(x)");
rounded_1ary!(RoundedTan, tan, "tan(x)");
rounded_1ary!(RoundedAsin, asin, "arcsin(x)");
rounded_1ary!(RoundedAcos, acos, "arccos(x)");
rounded_1ary!(RoundedAtan, atan, "arctan(x)");
rounded_1ary!(RoundedSinh, sinh, "sinh(x)");
rounded_1ary!(RoundedCosh, cosh, "cosh(x)");
rounded_1ary!(RoundedTanh, tanh, "tanh(x)");
rounded_1ary!(RoundedAsinh, asinh, "arsinh(x)");
rounded_1ary!(RoundedAcosh, acosh, "arcosh(x)");
rounded_1ary!(RoundedAtanh, atanh, "artanh(x)");

rounded_2ary!(RoundedAdd, radd, "x + y");
rounded_2ary!(RoundedSub, rsub, "x - y");
rounded_2ary!(RoundedMul, rmul, "x * y");
rounded_2ary!(RoundedDiv, rdiv, "x / y");
rounded_2ary!(RoundedPow, rpow, "x ^ y");
rounded_2ary!(RoundedAtan2, atan2, "arctan(y / x)");
rounded_2ary!(RoundedHypot, hypot, "sqrt(x^2 + y^2)");

rounded_3ary!(RoundedFma, rfma, "a*b + c");

/// Every rounded scalar primitive [`BareInterval`][crate::bare_interval::BareInterval]
/// relies on, bundled into one supertrait so generic code can write
/// `F: RoundedOps` instead of listing two dozen traits.
pub trait RoundedOps:
    RoundedSqrt
    + RoundedCbrt
    + RoundedInv
    + RoundedExp
    + RoundedExp2
    + RoundedExp10
    + RoundedExpm1
    + RoundedLog
    + RoundedLog2
    + RoundedLog10
    + RoundedLog1p
    + RoundedSin
    + RoundedCos
    + RoundedTan
    + RoundedAsin
    + RoundedAcos
    + RoundedAtan
    + RoundedSinh
    + RoundedCosh
    + RoundedTanh
    + RoundedAsinh
    + RoundedAcosh
    + RoundedAtanh
    + RoundedAdd
    + RoundedSub
    + RoundedMul
    + RoundedDiv
    + RoundedPow
    + RoundedAtan2
    + RoundedHypot
    + RoundedFma
{
    /// Integer power `x^n`, rounded, via binary exponentiation using
    /// [`RoundedMul`]/[`RoundedInv`]. Kept distinct from [`RoundedPow::rpow`]
    /// because literal integer powers must not be rewritten through `inv`
    /// for intervals straddling zero — this helper is for the
    /// scalar corner evaluations the interval layer explicitly chooses to
    /// run it on.
    fn rpowi(self, n: i32, dir: RoundDirection, policy: RoundingPolicy) -> Self {
        if n == 0 {
            return Self::one();
        }
        let neg = n < 0;
        let mut n = n.unsigned_abs();
        let mut base = self;
        let mut acc = Self::one();
        // Binary exponentiation; every partial product rounds in the same
        // `dir`, so by induction the accumulated product is a valid
        // `dir`-rounding of the exact power (see `ops::correct` module docs).
        while n > 0 {
            if n & 1 == 1 {
                acc = acc.rmul(base, dir, policy);
            }
            n >>= 1;
            if n > 0 {
                base = base.rmul(base, dir, policy);
            }
        }
        if neg {
            acc.inv(dir, policy)
        } else {
            acc
        }
    }
}

impl<F> RoundedOps for F where
    F: RoundedSqrt
        + RoundedCbrt
        + RoundedInv
        + RoundedExp
        + RoundedExp2
        + RoundedExp10
        + RoundedExpm1
        + RoundedLog
        + RoundedLog2
        + RoundedLog10
        + RoundedLog1p
        + RoundedSin
        + RoundedCos
        + RoundedTan
        + RoundedAsin
        + RoundedAcos
        + RoundedAtan
        + RoundedSinh
        + RoundedCosh
        + RoundedTanh
        + RoundedAsinh
        + RoundedAcosh
        + RoundedAtanh
        + RoundedAdd
        + RoundedSub
        + RoundedMul
        + RoundedDiv
        + RoundedPow
        + RoundedAtan2
        + RoundedHypot
        + RoundedFma
{
}

mod f32_impl;
mod f64_impl;

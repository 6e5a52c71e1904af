/*!
`BareInterval<F>`: a closed interval `[lo, hi]` with outward-rounded
arithmetic, carrying no decoration or NG flag. This is the
layer [`crate::interval::Interval`] wraps to add decoration/NG bookkeeping;
everything that can be proven about enclosure lives here.
*/

use crate::config::PowerMode;
use crate::error::{Error, Result};
use crate::ops::{RoundedOps, RoundingPolicy};
use crate::round::RoundDirection;

/// A closed interval `[lo, hi] ⊆ ℝ`, or the distinguished empty set.
///
/// Represented as a `(lo, hi)` pair; the canonical empty interval is
/// `(+inf, -inf)` and is only ever produced by [`BareInterval::empty`]
/// or an operation that detects emptiness — never by a public constructor
/// handed `lo > hi` directly, which is instead a [`Error::InvalidBounds`].
#[derive(Clone, Copy, Debug)]
pub struct BareInterval<F> {
    lo: F,
    hi: F,
}

impl<F: RoundedOps> BareInterval<F> {
    /// `[a, b]`. Fails if `a > b`, `a = +inf`, or `b = -inf`;
    /// use [`BareInterval::empty`]/[`BareInterval::entire`] for those.
    pub fn from_bounds(a: F, b: F) -> Result<Self> {
        if a.is_nan() || b.is_nan() {
            return Ok(Self::empty());
        }
        if a == F::infinity() || b == F::neg_infinity() || a > b {
            return Err(Error::InvalidBounds {
                lo: a.to_f64_lossy(),
                hi: b.to_f64_lossy(),
            });
        }
        Ok(BareInterval { lo: a, hi: b })
    }

    /// `[x, x]`; `NaN` collapses to [`BareInterval::empty`].
    pub fn singleton(x: F) -> Self {
        if x.is_nan() {
            Self::empty()
        } else {
            BareInterval { lo: x, hi: x }
        }
    }

    /// The canonical empty interval, represented as `(+inf, -inf)`.
    pub fn empty() -> Self {
        BareInterval {
            lo: F::infinity(),
            hi: F::neg_infinity(),
        }
    }

    /// `(-inf, +inf)`.
    pub fn entire() -> Self {
        BareInterval {
            lo: F::neg_infinity(),
            hi: F::infinity(),
        }
    }

    pub fn lo(&self) -> F {
        self.lo
    }

    pub fn hi(&self) -> F {
        self.hi
    }

    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    pub fn is_entire(&self) -> bool {
        self.lo == F::neg_infinity() && self.hi == F::infinity()
    }

    pub fn contains(&self, x: F) -> bool {
        !self.is_empty() && self.lo <= x && x <= self.hi
    }

    /// `0 ∈ [lo, hi]`. `false` for the empty interval.
    pub fn straddles_zero(&self) -> bool {
        self.contains(F::zero())
    }

    /// The point of least magnitude: `0` if `0 ∈ self`, else whichever
    /// endpoint is closer to zero.
    pub fn mig(&self) -> F {
        if self.is_empty() {
            return F::nan();
        }
        if self.straddles_zero() {
            F::zero()
        } else if self.lo >= F::zero() {
            self.lo
        } else {
            self.hi.neg()
        }
    }

    /// The point of greatest magnitude: `max(|lo|, |hi|)`.
    pub fn mag(&self) -> F {
        if self.is_empty() {
            return F::nan();
        }
        self.lo.abs().max_raw(self.hi.abs())
    }

    pub fn midpoint(&self) -> F {
        if self.is_entire() {
            return F::zero();
        }
        self.lo
            .radd(self.hi, RoundDirection::Nearest, RoundingPolicy::None)
            .rmul(
                F::from_f64_lossy(0.5),
                RoundDirection::Nearest,
                RoundingPolicy::None,
            )
    }

    pub fn radius(&self) -> F {
        if self.is_empty() {
            return F::nan();
        }
        let m = self.midpoint();
        let d1 = m.rsub(self.lo, RoundDirection::Up, RoundingPolicy::Correct);
        let d2 = self
            .hi
            .rsub(m, RoundDirection::Up, RoundingPolicy::Correct);
        d1.max_raw(d2)
    }

    fn hull2(a: Self, b: Self) -> Self {
        if a.is_empty() {
            return b;
        }
        if b.is_empty() {
            return a;
        }
        BareInterval {
            lo: a.lo.min_raw(b.lo),
            hi: a.hi.max_raw(b.hi),
        }
    }

    pub fn add(&self, other: &Self, policy: RoundingPolicy) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::empty();
        }
        BareInterval {
            lo: self.lo.radd(other.lo, RoundDirection::Down, policy),
            hi: self.hi.radd(other.hi, RoundDirection::Up, policy),
        }
    }

    pub fn sub(&self, other: &Self, policy: RoundingPolicy) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::empty();
        }
        BareInterval {
            lo: self.lo.rsub(other.hi, RoundDirection::Down, policy),
            hi: self.hi.rsub(other.lo, RoundDirection::Up, policy),
        }
    }

    pub fn neg(&self) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        BareInterval {
            lo: self.hi.neg(),
            hi: self.lo.neg(),
        }
    }

    /// Nine-case sign analysis over the four corner products.
    pub fn mul(&self, other: &Self, policy: RoundingPolicy) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::empty();
        }
        let (a, b) = (self.lo, self.hi);
        let (c, d) = (other.lo, other.hi);
        let corners = [(a, c), (a, d), (b, c), (b, d)];
        let mut lo = F::infinity();
        let mut hi = F::neg_infinity();
        for (x, y) in corners {
            lo = lo.min_raw(x.rmul(y, RoundDirection::Down, policy));
            hi = hi.max_raw(x.rmul(y, RoundDirection::Up, policy));
        }
        BareInterval { lo, hi }
    }

    /// Division with set-based zero handling: a thin zero denominator
    /// yields empty, a zero-straddling denominator yields entire, and a
    /// denominator pinned to one side of zero splits into the
    /// corresponding semi-infinite multiplication-by-reciprocal.
    /// `0 ∈ denom` always yields `entire` in this flavor — the
    /// two-sided split into a proper union is a multi-interval concept
    /// this single-`BareInterval` representation cannot return, so the
    /// conservative hull (entire) is returned instead.
    pub fn div(&self, other: &Self, policy: RoundingPolicy) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::empty();
        }
        if other.lo == F::zero() && other.hi == F::zero() {
            return Self::empty();
        }
        if other.straddles_zero() {
            return Self::entire();
        }
        let (a, b) = (self.lo, self.hi);
        let (c, d) = (other.lo, other.hi);
        let corners = [(a, c), (a, d), (b, c), (b, d)];
        let mut lo = F::infinity();
        let mut hi = F::neg_infinity();
        for (x, y) in corners {
            lo = lo.min_raw(x.rdiv(y, RoundDirection::Down, policy));
            hi = hi.max_raw(x.rdiv(y, RoundDirection::Up, policy));
        }
        BareInterval { lo, hi }
    }

    /// `[max(lo, 0), hi] ∩ [0, +inf)`; callers degrade decoration to `trv`
    /// when `self.lo < 0` since the input was partly outside
    /// the domain.
    pub fn sqrt(&self, policy: RoundingPolicy) -> Self {
        if self.is_empty() || self.hi < F::zero() {
            return Self::empty();
        }
        let clipped_lo = self.lo.max_raw(F::zero());
        BareInterval {
            lo: clipped_lo.sqrt(RoundDirection::Down, policy),
            hi: self.hi.sqrt(RoundDirection::Up, policy),
        }
    }

    pub fn cbrt(&self, policy: RoundingPolicy) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        BareInterval {
            lo: self.lo.cbrt(RoundDirection::Down, policy),
            hi: self.hi.cbrt(RoundDirection::Up, policy),
        }
    }

    /// Integer power. Literal integer powers are evaluated directly on the
    /// endpoints rather than through `inv`, since `inv(a)^n == a^(-n)` does
    /// not hold for `a` straddling zero. Already transcendental-free, so
    /// [`PowerMode`] has nothing to select between here.
    ///
    /// [`PowerMode`]: crate::config::PowerMode
    pub fn powi(&self, n: i32, policy: RoundingPolicy) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        if n == 0 {
            return Self::singleton(F::one());
        }
        if n < 0 {
            if self.straddles_zero() {
                return if self.lo == F::zero() && self.hi == F::zero() {
                    Self::empty()
                } else {
                    Self::entire()
                };
            }
            let pos = self.powi(-n, policy);
            return BareInterval {
                lo: pos.hi.inv(RoundDirection::Down, policy),
                hi: pos.lo.inv(RoundDirection::Up, policy),
            };
        }
        if n % 2 == 1 {
            BareInterval {
                lo: self.lo.rpowi(n, RoundDirection::Down, policy),
                hi: self.hi.rpowi(n, RoundDirection::Up, policy),
            }
        } else if self.straddles_zero() {
            let mag = self.mag();
            BareInterval {
                lo: F::zero(),
                hi: mag.rpowi(n, RoundDirection::Up, policy),
            }
        } else {
            let mig = self.mig();
            let mag = self.mag();
            BareInterval {
                lo: mig.rpowi(n, RoundDirection::Down, policy),
                hi: mag.rpowi(n, RoundDirection::Up, policy),
            }
        }
    }

    /// Real power `a^x`, restricted to `a ⊆ [0, +inf)`, via the four-corner
    /// hull. `x = 1/2` defers to [`BareInterval::sqrt`]; integer `x` defers
    /// to [`BareInterval::powi`] — both paths are transcendental-free, so
    /// they run the same way under either [`PowerMode`]. A genuinely
    /// non-integer, non-half `x` needs `rpow`'s `exp(y * ln(x))`
    /// composition; under [`PowerMode::Slow`] that call is skipped and
    /// [`BareInterval::entire`] is returned instead — still a sound
    /// enclosure, just uninformative (the caller's decoration derivation
    /// demotes it to `dac` for being unbounded).
    pub fn pow(&self, exp: &Self, power_mode: PowerMode, policy: RoundingPolicy) -> Self {
        if self.is_empty() || exp.is_empty() {
            return Self::empty();
        }
        if self.hi < F::zero() {
            return Self::empty();
        }
        let base_lo = self.lo.max_raw(F::zero());
        if exp.lo == exp.hi {
            let x = exp.lo;
            if x == F::from_f64_lossy(0.5) {
                return BareInterval {
                    lo: base_lo,
                    hi: self.hi,
                }
                .sqrt(policy);
            }
            if x.to_f64_lossy().fract() == 0.0 && x.to_f64_lossy().abs() < i32::MAX as f64 {
                return BareInterval {
                    lo: base_lo,
                    hi: self.hi,
                }
                .powi(x.to_f64_lossy() as i32, policy);
            }
        }
        if power_mode == PowerMode::Slow {
            return Self::entire();
        }
        let corners = [
            (base_lo, exp.lo),
            (base_lo, exp.hi),
            (self.hi, exp.lo),
            (self.hi, exp.hi),
        ];
        let mut lo = F::infinity();
        let mut hi = F::neg_infinity();
        for (b, x) in corners {
            lo = lo.min_raw(b.rpow(x, RoundDirection::Down, policy));
            hi = hi.max_raw(b.rpow(x, RoundDirection::Up, policy));
        }
        BareInterval { lo, hi }
    }

    /// Evaluates a monotone increasing unary function by rounding each
    /// endpoint outward in its own direction.
    fn monotone_increasing(
        &self,
        f: impl Fn(F, RoundDirection, RoundingPolicy) -> F,
        policy: RoundingPolicy,
    ) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        BareInterval {
            lo: f(self.lo, RoundDirection::Down, policy),
            hi: f(self.hi, RoundDirection::Up, policy),
        }
    }

    /// Evaluates a monotone decreasing unary function (endpoints swap).
    fn monotone_decreasing(
        &self,
        f: impl Fn(F, RoundDirection, RoundingPolicy) -> F,
        policy: RoundingPolicy,
    ) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        BareInterval {
            lo: f(self.hi, RoundDirection::Down, policy),
            hi: f(self.lo, RoundDirection::Up, policy),
        }
    }

    pub fn exp(&self, policy: RoundingPolicy) -> Self {
        self.monotone_increasing(|x, d, p| x.exp(d, p), policy)
    }
    pub fn exp2(&self, policy: RoundingPolicy) -> Self {
        self.monotone_increasing(|x, d, p| x.exp2(d, p), policy)
    }
    pub fn exp10(&self, policy: RoundingPolicy) -> Self {
        self.monotone_increasing(|x, d, p| x.exp10(d, p), policy)
    }
    pub fn expm1(&self, policy: RoundingPolicy) -> Self {
        self.monotone_increasing(|x, d, p| x.expm1(d, p), policy)
    }

    /// Domain `(0, +inf)`; degrades to `empty` outside it entirely and
    /// callers lower decoration to `trv` when `self.lo <= 0`.
    pub fn log(&self, policy: RoundingPolicy) -> Self {
        if self.is_empty() || self.hi <= F::zero() {
            return Self::empty();
        }
        let clipped = BareInterval {
            lo: self.lo.max_raw(F::zero().next_up()),
            hi: self.hi,
        };
        clipped.monotone_increasing(|x, d, p| x.log(d, p), policy)
    }
    pub fn log2(&self, policy: RoundingPolicy) -> Self {
        if self.is_empty() || self.hi <= F::zero() {
            return Self::empty();
        }
        let clipped = BareInterval {
            lo: self.lo.max_raw(F::zero().next_up()),
            hi: self.hi,
        };
        clipped.monotone_increasing(|x, d, p| x.log2(d, p), policy)
    }
    pub fn log10(&self, policy: RoundingPolicy) -> Self {
        if self.is_empty() || self.hi <= F::zero() {
            return Self::empty();
        }
        let clipped = BareInterval {
            lo: self.lo.max_raw(F::zero().next_up()),
            hi: self.hi,
        };
        clipped.monotone_increasing(|x, d, p| x.log10(d, p), policy)
    }
    pub fn log1p(&self, policy: RoundingPolicy) -> Self {
        if self.is_empty() || self.hi <= F::neg_one() {
            return Self::empty();
        }
        let clipped = BareInterval {
            lo: self.lo.max_raw(F::neg_one().next_up()),
            hi: self.hi,
        };
        clipped.monotone_increasing(|x, d, p| x.log1p(d, p), policy)
    }

    pub fn sinh(&self, policy: RoundingPolicy) -> Self {
        self.monotone_increasing(|x, d, p| x.sinh(d, p), policy)
    }
    pub fn tanh(&self, policy: RoundingPolicy) -> Self {
        self.monotone_increasing(|x, d, p| x.tanh(d, p), policy)
    }
    pub fn asinh(&self, policy: RoundingPolicy) -> Self {
        self.monotone_increasing(|x, d, p| x.asinh(d, p), policy)
    }
    pub fn atan(&self, policy: RoundingPolicy) -> Self {
        self.monotone_increasing(|x, d, p| x.atan(d, p), policy)
    }
    pub fn asin(&self, policy: RoundingPolicy) -> Self {
        let clipped = BareInterval {
            lo: self.lo.max_raw(F::neg_one()),
            hi: self.hi.min_raw(F::one()),
        };
        clipped.monotone_increasing(|x, d, p| x.asin(d, p), policy)
    }
    pub fn acos(&self, policy: RoundingPolicy) -> Self {
        let clipped = BareInterval {
            lo: self.lo.max_raw(F::neg_one()),
            hi: self.hi.min_raw(F::one()),
        };
        clipped.monotone_decreasing(|x, d, p| x.acos(d, p), policy)
    }

    /// Domain `|x| >= 1`; restricted per-branch. Only the `x >= 1` branch
    /// (principal value) is implemented, matching `f64::acosh`.
    pub fn acosh(&self, policy: RoundingPolicy) -> Self {
        if self.is_empty() || self.hi < F::one() {
            return Self::empty();
        }
        let clipped = BareInterval {
            lo: self.lo.max_raw(F::one()),
            hi: self.hi,
        };
        clipped.monotone_increasing(|x, d, p| x.acosh(d, p), policy)
    }

    /// Domain `(-1, 1)`.
    pub fn atanh(&self, policy: RoundingPolicy) -> Self {
        if self.is_empty() || self.hi <= F::neg_one() || self.lo >= F::one() {
            return Self::empty();
        }
        let clipped = BareInterval {
            lo: self.lo.max_raw(F::neg_one().next_up()),
            hi: self.hi.min_raw(F::one().next_down()),
        };
        clipped.monotone_increasing(|x, d, p| x.atanh(d, p), policy)
    }

    /// `cosh` is monotone increasing only on `[0, +inf)`; mirror the
    /// negative half since `cosh` is even.
    pub fn cosh(&self, policy: RoundingPolicy) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        if self.straddles_zero() {
            let mag = self.mag();
            BareInterval {
                lo: F::one(),
                hi: mag.cosh(RoundDirection::Up, policy),
            }
        } else if self.lo >= F::zero() {
            self.monotone_increasing(|x, d, p| x.cosh(d, p), policy)
        } else {
            self.monotone_decreasing(|x, d, p| x.cosh(d, p), policy)
        }
    }

    /// `sin`/`cos`/`tan` locate interior extrema by reducing the argument
    /// modulo the function's period and testing whether a half-period
    /// point (where the derivative vanishes) falls inside `[lo, hi]`
    ///. Implemented via brute-force scan over the finitely
    /// many half-periods spanned by the interval, which is exact for any
    /// interval of finite width representable in `F`.
    pub fn sin(&self, policy: RoundingPolicy) -> Self {
        self.periodic_extrema(
            std::f64::consts::FRAC_PI_2,
            |x, d, p| x.sin(d, p),
            policy,
        )
    }
    pub fn cos(&self, policy: RoundingPolicy) -> Self {
        self.periodic_extrema(std::f64::consts::FRAC_PI_2, |x, d, p| x.cos(d, p), policy)
    }

    /// `tan` has no interior extrema (strictly monotone between
    /// asymptotes), but is unbounded across any `kπ + π/2`; such an input
    /// must already have been rejected by the caller, which clips `self`
    /// to a single branch before calling.
    pub fn tan(&self, policy: RoundingPolicy) -> Self {
        self.monotone_increasing(|x, d, p| x.tan(d, p), policy)
    }

    /// Shared extrema-scanning machinery for `sin`/`cos`: both attain their
    /// extrema at the same quarter-period grid (`cos` is `sin` phase-shifted
    /// by `π/2`), so evaluating candidate extremum points of the function
    /// itself (rather than deriving the grid from `sin`'s zeros specifically)
    /// keeps one implementation for both.
    fn periodic_extrema(
        &self,
        half_period: f64,
        f: impl Fn(F, RoundDirection, RoundingPolicy) -> F,
        policy: RoundingPolicy,
    ) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        let lo = self.lo.to_f64_lossy();
        let hi = self.hi.to_f64_lossy();
        if !lo.is_finite() || !hi.is_finite() || hi - lo >= 2.0 * std::f64::consts::PI {
            return BareInterval {
                lo: F::neg_one(),
                hi: F::one(),
            };
        }
        let mut result_lo = f(self.lo, RoundDirection::Down, policy);
        let mut result_hi = f(self.lo, RoundDirection::Up, policy);
        let endpoint_hi_lo = f(self.hi, RoundDirection::Down, policy);
        let endpoint_hi_hi = f(self.hi, RoundDirection::Up, policy);
        result_lo = result_lo.min_raw(endpoint_hi_lo);
        result_hi = result_hi.max_raw(endpoint_hi_hi);

        let first_k = (lo / half_period).floor() as i64 - 1;
        let last_k = (hi / half_period).ceil() as i64 + 1;
        for k in first_k..=last_k {
            let candidate = k as f64 * half_period;
            if candidate > lo && candidate < hi {
                let x = F::from_f64_lossy(candidate);
                let v_lo = f(x, RoundDirection::Down, policy);
                let v_hi = f(x, RoundDirection::Up, policy);
                result_lo = result_lo.min_raw(v_lo);
                result_hi = result_hi.max_raw(v_hi);
            }
        }
        BareInterval {
            lo: result_lo,
            hi: result_hi,
        }
    }

    pub fn hull(&self, other: &Self) -> Self {
        Self::hull2(*self, *other)
    }

    /// `true` iff neither bound is infinite (the empty interval is bounded
    /// vacuously).
    pub fn is_bounded(&self) -> bool {
        self.is_empty() || (self.lo.is_finite() && self.hi.is_finite())
    }
}

impl<F: RoundedOps> PartialEq for BareInterval<F> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => true,
            (true, false) | (false, true) => false,
            (false, false) => self.lo == other.lo && self.hi == other.hi,
        }
    }
}

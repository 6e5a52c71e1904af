/*!
`Interval<F>`: a [`BareInterval`] plus [`Decoration`] and the NG ("not
guaranteed") flag — the full IEEE 1788 number.
*/

use crate::bare_interval::BareInterval;
use crate::config::PowerMode;
use crate::decoration::Decoration;
use crate::error::Result;
use crate::ops::{RoundedOps, RoundingPolicy};

/// A decorated, NG-tracked interval.
///
/// `ng = true` means some operation in this value's provenance is not
/// guaranteed to enclose the exact result (e.g. it passed through the
/// `none` rounding back-end, or through a midpoint/approximate solver);
/// `ng = false` means every step so far is a proven enclosure. NG is
/// never cleared by arithmetic.
#[derive(Clone, Copy, Debug)]
pub struct Interval<F> {
    bare: BareInterval<F>,
    decoration: Decoration,
    ng: bool,
}

impl<F: RoundedOps> Interval<F> {
    pub fn from_bounds(a: F, b: F) -> Result<Self> {
        let bare = BareInterval::from_bounds(a, b)?;
        let decoration = if bare.is_empty() {
            Decoration::Trv
        } else {
            Decoration::Com
        };
        Ok(Interval {
            bare,
            decoration,
            ng: false,
        })
    }

    pub fn singleton(x: F) -> Self {
        let bare = BareInterval::singleton(x);
        let decoration = if bare.is_empty() {
            Decoration::Trv
        } else {
            Decoration::Com
        };
        Interval {
            bare,
            decoration,
            ng: false,
        }
    }

    pub fn empty() -> Self {
        Interval {
            bare: BareInterval::empty(),
            decoration: Decoration::Trv,
            ng: false,
        }
    }

    pub fn entire() -> Self {
        Interval {
            bare: BareInterval::entire(),
            decoration: Decoration::Dac,
            ng: false,
        }
    }

    /// Not-an-Interval: the sentinel with decoration `ill`.
    pub fn nai() -> Self {
        Interval {
            bare: BareInterval::empty(),
            decoration: Decoration::Ill,
            ng: false,
        }
    }

    pub fn is_nai(&self) -> bool {
        self.decoration.is_ill()
    }

    /// Wraps a caller-built `BareInterval` with an explicit decoration and
    /// NG flag, for use by the matrix layer which constructs interval
    /// scalars directly from verified/unverified bounds rather than via
    /// one of the named constructors above.
    pub fn from_parts(bare: BareInterval<F>, decoration: Decoration, ng: bool) -> Self {
        Interval { bare, decoration, ng }
    }

    pub fn bare(&self) -> &BareInterval<F> {
        &self.bare
    }

    pub fn decoration(&self) -> Decoration {
        self.decoration
    }

    pub fn ng(&self) -> bool {
        self.ng
    }

    pub fn is_empty(&self) -> bool {
        !self.is_nai() && self.bare.is_empty()
    }

    fn combine(a: &Self, b: &Self, bare: BareInterval<F>, intrinsic_cap: Decoration) -> Self {
        if a.is_nai() || b.is_nai() {
            return Self::nai();
        }
        let decoration = a.decoration.min(b.decoration).at_most(intrinsic_cap);
        let decoration = if bare.is_empty() {
            decoration.min(Decoration::Trv)
        } else if !bare.is_bounded() {
            decoration.min(Decoration::Dac)
        } else {
            decoration
        };
        Interval {
            bare,
            decoration,
            ng: a.ng || b.ng,
        }
    }

    fn unary(a: &Self, bare: BareInterval<F>, intrinsic_cap: Decoration) -> Self {
        if a.is_nai() {
            return Self::nai();
        }
        let decoration = a.decoration.at_most(intrinsic_cap);
        let decoration = if bare.is_empty() {
            decoration.min(Decoration::Trv)
        } else if !bare.is_bounded() {
            decoration.min(Decoration::Dac)
        } else {
            decoration
        };
        Interval {
            bare,
            decoration,
            ng: a.ng,
        }
    }

    pub fn add(&self, other: &Self, policy: RoundingPolicy) -> Self {
        let bare = self.bare.add(&other.bare, policy);
        Self::combine(self, other, bare, Decoration::Com)
    }

    pub fn sub(&self, other: &Self, policy: RoundingPolicy) -> Self {
        let bare = self.bare.sub(&other.bare, policy);
        Self::combine(self, other, bare, Decoration::Com)
    }

    pub fn neg(&self) -> Self {
        if self.is_nai() {
            return Self::nai();
        }
        Interval {
            bare: self.bare.neg(),
            decoration: self.decoration,
            ng: self.ng,
        }
    }

    pub fn mul(&self, other: &Self, policy: RoundingPolicy) -> Self {
        let bare = self.bare.mul(&other.bare, policy);
        Self::combine(self, other, bare, Decoration::Com)
    }

    /// Division degrades to `trv` whenever the denominator straddles zero
    /// (the result becomes discontinuous / multi-valued at that point),
    /// matching /§4.3.
    pub fn div(&self, other: &Self, policy: RoundingPolicy) -> Self {
        let bare = self.bare.div(&other.bare, policy);
        let cap = if other.bare.straddles_zero() {
            Decoration::Trv
        } else {
            Decoration::Com
        };
        Self::combine(self, other, bare, cap)
    }

    /// `sqrt` degrades to `trv` whenever the input goes negative.
    pub fn sqrt(&self, policy: RoundingPolicy) -> Self {
        let bare = self.bare.sqrt(policy);
        let cap = if self.bare.lo() < F::zero() {
            Decoration::Trv
        } else {
            Decoration::Com
        };
        Self::unary(self, bare, cap)
    }

    pub fn cbrt(&self, policy: RoundingPolicy) -> Self {
        let bare = self.bare.cbrt(policy);
        Self::unary(self, bare, Decoration::Com)
    }

    pub fn powi(&self, n: i32, policy: RoundingPolicy) -> Self {
        let bare = self.bare.powi(n, policy);
        let cap = if n < 0 && self.bare.straddles_zero() {
            Decoration::Trv
        } else {
            Decoration::Com
        };
        Self::unary(self, bare, cap)
    }

    pub fn pow(&self, exp: &Self, power_mode: PowerMode, policy: RoundingPolicy) -> Self {
        let bare = self.bare.pow(&exp.bare, power_mode, policy);
        let cap = if self.bare.lo() < F::zero() {
            Decoration::Trv
        } else {
            Decoration::Com
        };
        Self::combine(self, exp, bare, cap)
    }

    /// `log`/`log2`/`log10`/`log1p` degrade to `trv` whenever the input is
    /// not entirely within the function's domain.
    pub fn log(&self, policy: RoundingPolicy) -> Self {
        let bare = self.bare.log(policy);
        let cap = if self.bare.lo() <= F::zero() {
            Decoration::Trv
        } else {
            Decoration::Com
        };
        Self::unary(self, bare, cap)
    }
    pub fn log2(&self, policy: RoundingPolicy) -> Self {
        let bare = self.bare.log2(policy);
        let cap = if self.bare.lo() <= F::zero() {
            Decoration::Trv
        } else {
            Decoration::Com
        };
        Self::unary(self, bare, cap)
    }
    pub fn log10(&self, policy: RoundingPolicy) -> Self {
        let bare = self.bare.log10(policy);
        let cap = if self.bare.lo() <= F::zero() {
            Decoration::Trv
        } else {
            Decoration::Com
        };
        Self::unary(self, bare, cap)
    }
    pub fn log1p(&self, policy: RoundingPolicy) -> Self {
        let bare = self.bare.log1p(policy);
        let cap = if self.bare.lo() <= F::neg_one() {
            Decoration::Trv
        } else {
            Decoration::Com
        };
        Self::unary(self, bare, cap)
    }

    pub fn exp(&self, policy: RoundingPolicy) -> Self {
        Self::unary(self, self.bare.exp(policy), Decoration::Com)
    }
    pub fn exp2(&self, policy: RoundingPolicy) -> Self {
        Self::unary(self, self.bare.exp2(policy), Decoration::Com)
    }
    pub fn exp10(&self, policy: RoundingPolicy) -> Self {
        Self::unary(self, self.bare.exp10(policy), Decoration::Com)
    }
    pub fn expm1(&self, policy: RoundingPolicy) -> Self {
        Self::unary(self, self.bare.expm1(policy), Decoration::Com)
    }
    pub fn sin(&self, policy: RoundingPolicy) -> Self {
        Self::unary(self, self.bare.sin(policy), Decoration::Com)
    }
    pub fn cos(&self, policy: RoundingPolicy) -> Self {
        Self::unary(self, self.bare.cos(policy), Decoration::Com)
    }
    pub fn tan(&self, policy: RoundingPolicy) -> Self {
        Self::unary(self, self.bare.tan(policy), Decoration::Dac)
    }
    pub fn sinh(&self, policy: RoundingPolicy) -> Self {
        Self::unary(self, self.bare.sinh(policy), Decoration::Com)
    }
    pub fn cosh(&self, policy: RoundingPolicy) -> Self {
        Self::unary(self, self.bare.cosh(policy), Decoration::Com)
    }
    pub fn tanh(&self, policy: RoundingPolicy) -> Self {
        Self::unary(self, self.bare.tanh(policy), Decoration::Com)
    }
    pub fn asin(&self, policy: RoundingPolicy) -> Self {
        let cap = if self.bare.lo() < F::neg_one() || self.bare.hi() > F::one() {
            Decoration::Trv
        } else {
            Decoration::Com
        };
        Self::unary(self, self.bare.asin(policy), cap)
    }
    pub fn acos(&self, policy: RoundingPolicy) -> Self {
        let cap = if self.bare.lo() < F::neg_one() || self.bare.hi() > F::one() {
            Decoration::Trv
        } else {
            Decoration::Com
        };
        Self::unary(self, self.bare.acos(policy), cap)
    }
    pub fn atan(&self, policy: RoundingPolicy) -> Self {
        Self::unary(self, self.bare.atan(policy), Decoration::Com)
    }
    pub fn asinh(&self, policy: RoundingPolicy) -> Self {
        Self::unary(self, self.bare.asinh(policy), Decoration::Com)
    }
    pub fn acosh(&self, policy: RoundingPolicy) -> Self {
        let cap = if self.bare.hi() < F::one() {
            Decoration::Trv
        } else {
            Decoration::Com
        };
        Self::unary(self, self.bare.acosh(policy), cap)
    }
    pub fn atanh(&self, policy: RoundingPolicy) -> Self {
        let cap = if self.bare.lo() <= F::neg_one() || self.bare.hi() >= F::one() {
            Decoration::Trv
        } else {
            Decoration::Com
        };
        Self::unary(self, self.bare.atanh(policy), cap)
    }

    pub fn hull(&self, other: &Self) -> Self {
        let bare = self.bare.hull(&other.bare);
        Self::combine(self, other, bare, Decoration::Trv)
    }

    /// Marks a value as not-guaranteed without altering its bounds or
    /// decoration — used by constructors fed a non-representable literal,
    /// and by the matrix layer when it lifts an unverified float solve
    /// into interval form.
    pub fn with_ng(mut self) -> Self {
        self.ng = true;
        self
    }
}

impl<F: RoundedOps> PartialEq for Interval<F> {
    fn eq(&self, other: &Self) -> bool {
        self.bare == other.bare && self.decoration == other.decoration && self.ng == other.ng
    }
}

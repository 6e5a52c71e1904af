/*!
`ComplexInterval<F>`: a pair of real [`Interval`]s with Gauss-style
complex arithmetic.
*/

use crate::interval::Interval;
use crate::ops::{RoundedOps, RoundingPolicy};

/// `re + i*im`, both components sharing a single decoration/NG pair taken
/// as the min/or over whichever operation produced them.
#[derive(Clone, Copy, Debug)]
pub struct ComplexInterval<F> {
    re: Interval<F>,
    im: Interval<F>,
}

impl<F: RoundedOps> ComplexInterval<F> {
    pub fn new(re: Interval<F>, im: Interval<F>) -> Self {
        ComplexInterval { re, im }
    }

    pub fn real(x: Interval<F>) -> Self {
        ComplexInterval {
            im: Interval::singleton(F::zero()),
            re: x,
        }
    }

    pub fn re(&self) -> &Interval<F> {
        &self.re
    }

    pub fn im(&self) -> &Interval<F> {
        &self.im
    }

    pub fn nai() -> Self {
        ComplexInterval {
            re: Interval::nai(),
            im: Interval::nai(),
        }
    }

    pub fn is_nai(&self) -> bool {
        self.re.is_nai() || self.im.is_nai()
    }

    pub fn add(&self, other: &Self, policy: RoundingPolicy) -> Self {
        ComplexInterval {
            re: self.re.add(&other.re, policy),
            im: self.im.add(&other.im, policy),
        }
    }

    pub fn sub(&self, other: &Self, policy: RoundingPolicy) -> Self {
        ComplexInterval {
            re: self.re.sub(&other.re, policy),
            im: self.im.sub(&other.im, policy),
        }
    }

    pub fn neg(&self) -> Self {
        ComplexInterval {
            re: self.re.neg(),
            im: self.im.neg(),
        }
    }

    /// `(a+ib)(c+id) = (ac - bd) + i(ad + bc)`: four interval products and
    /// two combining sums, each outward-rounded through `Interval`'s own
    /// arithmetic. `re` and `sub`/`add`'s decoration/NG derivations run
    /// independently of `im`'s, so both components are reconciled to a
    /// shared pair afterward rather than left to disagree.
    pub fn mul(&self, other: &Self, policy: RoundingPolicy) -> Self {
        let ac = self.re.mul(&other.re, policy);
        let bd = self.im.mul(&other.im, policy);
        let ad = self.re.mul(&other.im, policy);
        let bc = self.im.mul(&other.re, policy);
        let re = ac.sub(&bd, policy);
        let im = ad.add(&bc, policy);
        Self::shared_decoration(re, im)
    }

    /// Reconciles `re`/`im` to one shared decoration/NG pair — the min
    /// decoration and the OR'd NG flag — mirroring `Interval::combine`'s
    /// derivation for a single scalar result.
    fn shared_decoration(re: Interval<F>, im: Interval<F>) -> Self {
        if re.is_nai() || im.is_nai() {
            return Self::nai();
        }
        let decoration = re.decoration().min(im.decoration());
        let ng = re.ng() || im.ng();
        ComplexInterval {
            re: Interval::from_parts(*re.bare(), decoration, ng),
            im: Interval::from_parts(*im.bare(), decoration, ng),
        }
    }

    /// Magnitude-squared `re^2 + im^2`, used both by `div` and as the
    /// complex analogue of `mag` for Gershgorin-disc radii.
    fn norm_sq(&self, policy: RoundingPolicy) -> Interval<F> {
        let re2 = self.re.mul(&self.re, policy);
        let im2 = self.im.mul(&self.im, policy);
        re2.add(&im2, policy)
    }

    /// `(a+ib)/(c+id) = (a+ib)(c-id) / (c^2+d^2)`.
    pub fn div(&self, other: &Self, policy: RoundingPolicy) -> Self {
        let conj = ComplexInterval {
            re: other.re,
            im: other.im.neg(),
        };
        let numerator = self.mul(&conj, policy);
        let denom = other.norm_sq(policy);
        let re = numerator.re.div(&denom, policy);
        let im = numerator.im.div(&denom, policy);
        Self::shared_decoration(re, im)
    }

    pub fn conj(&self) -> Self {
        ComplexInterval {
            re: self.re,
            im: self.im.neg(),
        }
    }
}

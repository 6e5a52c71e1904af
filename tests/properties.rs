use proptest::prelude::*;
use verinum::bare_interval::BareInterval;
use verinum::decoration::Decoration;
use verinum::matrix::{matinv, matmul, Matrix};
use verinum::ops::RoundingPolicy;
use verinum::Interval;

/// A bound pair plus a point known to lie inside it.
fn bounded_pair_with_point() -> impl Strategy<Value = (f64, f64, f64)> {
    (-1.0e6f64..1.0e6, -1.0e6f64..1.0e6).prop_flat_map(|(x, y)| {
        let (lo, hi) = if x <= y { (x, y) } else { (y, x) };
        (Just(lo), Just(hi), lo..=hi)
    })
}

fn interval_strategy() -> impl Strategy<Value = Interval<f64>> {
    (-1.0e6f64..1.0e6, -1.0e6f64..1.0e6).prop_map(|(x, y)| {
        let (lo, hi) = if x <= y { (x, y) } else { (y, x) };
        Interval::from_bounds(lo, hi).unwrap()
    })
}

proptest! {
    /// Invariant 1 (enclosure): for any real a in A and b in B, a+b lies in
    /// A+B, A-B, and A*B.
    #[test]
    fn enclosure_holds_for_arithmetic(
        (a_lo, a_hi, a) in bounded_pair_with_point(),
        (b_lo, b_hi, b) in bounded_pair_with_point(),
    ) {
        let ia = BareInterval::from_bounds(a_lo, a_hi).unwrap();
        let ib = BareInterval::from_bounds(b_lo, b_hi).unwrap();

        let sum = ia.add(&ib, RoundingPolicy::Correct);
        prop_assert!(sum.contains(a + b));

        let diff = ia.sub(&ib, RoundingPolicy::Correct);
        prop_assert!(diff.contains(a - b));

        let prod = ia.mul(&ib, RoundingPolicy::Correct);
        prop_assert!(prod.contains(a * b));
    }

    /// Invariant 2 (monotonicity of containment): if A subset of A' and B
    /// subset of B', then A+B subset of A'+B'.
    #[test]
    fn containment_monotone_under_addition(
        (outer_lo, outer_hi, inner_lo) in bounded_pair_with_point(),
        width in 0.0f64..1.0e5,
    ) {
        let inner_hi = (inner_lo + width).min(outer_hi);
        let a_outer = BareInterval::from_bounds(outer_lo, outer_hi).unwrap();
        let a_inner = BareInterval::from_bounds(inner_lo, inner_hi).unwrap();
        let b = BareInterval::from_bounds(-1.0, 1.0).unwrap();

        let sum_inner = a_inner.add(&b, RoundingPolicy::Correct);
        let sum_outer = a_outer.add(&b, RoundingPolicy::Correct);
        prop_assert!(sum_outer.lo() <= sum_inner.lo());
        prop_assert!(sum_outer.hi() >= sum_inner.hi());
    }

    /// Invariant 3 (additive identity): A + [0,0] recovers A exactly, since
    /// adding an exact zero introduces no rounding error.
    #[test]
    fn adding_zero_is_identity(a_lo in -1.0e6f64..1.0e6, width in 0.0f64..1.0e6) {
        let a_hi = a_lo + width;
        let a = BareInterval::from_bounds(a_lo, a_hi).unwrap();
        let zero = BareInterval::singleton(0.0);
        let sum = a.add(&zero, RoundingPolicy::Correct);
        prop_assert_eq!(sum.lo(), a.lo());
        prop_assert_eq!(sum.hi(), a.hi());
    }

    /// Invariant 7 (NG monotonicity): once an interval carries `ng`, every
    /// arithmetic result derived from it also carries `ng`.
    #[test]
    fn ng_is_monotone_through_addition(a in interval_strategy(), b in interval_strategy()) {
        let a_ng = a.with_ng();
        let c = a_ng.add(&b, RoundingPolicy::Correct);
        prop_assert!(c.ng());
    }

    /// Invariant 8 (decoration monotonicity): the output decoration of a
    /// binary operation never exceeds the weaker of its two inputs.
    #[test]
    fn decoration_never_exceeds_weaker_input(a in interval_strategy(), b in interval_strategy()) {
        let c = a.add(&b, RoundingPolicy::Correct);
        let weaker = a.decoration().min(b.decoration());
        prop_assert!(c.decoration() <= weaker);
    }

    /// Invariant 4 (matrix multiply enclosure): for 1x1 "matrices", verified
    /// multiplication must enclose the product of any representative chosen
    /// from each factor's interval.
    #[test]
    fn matmul_encloses_scalar_product(
        (a_lo, a_hi, a) in bounded_pair_with_point(),
        (b_lo, b_hi, b) in bounded_pair_with_point(),
    ) {
        let ia = Interval::from_bounds(a_lo, a_hi).unwrap();
        let ib = Interval::from_bounds(b_lo, b_hi).unwrap();
        let ma = Matrix::from_rows(vec![vec![ia]]).unwrap();
        let mb = Matrix::from_rows(vec![vec![ib]]).unwrap();
        let c = matmul::rump_real(&ma, &mb, RoundingPolicy::Correct).unwrap();
        let cell = c.get(0, 0).bare();
        prop_assert!(cell.contains(a * b));
    }

    /// Invariant 5 (matrix inversion enclosure): a verified 1x1 inverse
    /// encloses the reciprocal of any representative drawn from the input,
    /// whenever that representative is nonzero.
    #[test]
    fn matinv_encloses_scalar_reciprocal(a_lo in 1.0f64..1.0e3, width in 0.0f64..0.1) {
        let a_hi = a_lo + width;
        let ia = Interval::from_bounds(a_lo, a_hi).unwrap();
        let ma = Matrix::from_rows(vec![vec![ia]]).unwrap();
        let inv = matinv::real(&ma).unwrap();
        prop_assert!(!inv.get(0, 0).is_nai());
        let cell = inv.get(0, 0).bare();
        prop_assert!(cell.contains(1.0 / a_lo));
        prop_assert!(cell.contains(1.0 / a_hi));
    }
}

#[test]
fn nai_decoration_is_ill() {
    let nai = Interval::<f64>::nai();
    assert_eq!(nai.decoration(), Decoration::Ill);
}

use verinum::decoration::Decoration;
use verinum::ops::RoundingPolicy;
use verinum::Interval;

type I = Interval<f64>;

#[test]
fn addition_preserves_com_decoration() {
    let a = I::from_bounds(1.0, 2.0).unwrap();
    let b = I::from_bounds(3.0, 4.0).unwrap();
    let c = a.add(&b, RoundingPolicy::Correct);
    assert_eq!(c.decoration(), Decoration::Com);
    assert!(!c.ng());
}

#[test]
fn sqrt_of_partly_negative_degrades_to_trv() {
    let a = I::from_bounds(-1.0, 4.0).unwrap();
    let c = a.sqrt(RoundingPolicy::Correct);
    assert_eq!(c.decoration(), Decoration::Trv);
    assert_eq!(c.bare().lo(), 0.0);
    assert_eq!(c.bare().hi(), 2.0);
}

#[test]
fn division_by_straddling_denominator_degrades_to_trv() {
    let a = I::from_bounds(1.0, 2.0).unwrap();
    let z = I::from_bounds(-1.0, 1.0).unwrap();
    let c = a.div(&z, RoundingPolicy::Correct);
    assert_eq!(c.decoration(), Decoration::Trv);
}

#[test]
fn ng_is_never_cleared() {
    let a = I::from_bounds(1.0, 2.0).unwrap().with_ng();
    let b = I::from_bounds(3.0, 4.0).unwrap();
    let c = a.add(&b, RoundingPolicy::Correct);
    assert!(c.ng());
}

#[test]
fn none_backend_still_encloses() {
    let a = I::from_bounds(0.1, 0.2).unwrap();
    let b = I::from_bounds(0.3, 0.4).unwrap();
    let c = a.add(&b, RoundingPolicy::None);
    assert!(c.bare().lo() <= 0.4);
    assert!(c.bare().hi() >= 0.6);
}

#[test]
fn nai_propagates_through_arithmetic() {
    let a = I::nai();
    let b = I::from_bounds(1.0, 2.0).unwrap();
    assert!(a.add(&b, RoundingPolicy::Correct).is_nai());
    assert!(b.add(&a, RoundingPolicy::Correct).is_nai());
}

#[test]
fn log_of_non_positive_degrades_to_trv() {
    let a = I::from_bounds(-1.0, 2.0).unwrap();
    let c = a.log(RoundingPolicy::Correct);
    assert_eq!(c.decoration(), Decoration::Trv);
}

#[test]
fn decoration_monotonicity_min_of_inputs() {
    let a = I::from_bounds(1.0, 2.0).unwrap();
    let trv = I::from_bounds(-1.0, 4.0).unwrap().sqrt(RoundingPolicy::Correct);
    let c = a.add(&trv, RoundingPolicy::Correct);
    assert!(c.decoration() <= Decoration::Trv);
}

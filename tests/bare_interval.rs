use verinum::bare_interval::BareInterval;
use verinum::config::PowerMode;
use verinum::ops::RoundingPolicy;

type BI = BareInterval<f64>;

#[test]
fn addition_widens_outward() {
    let a = BI::from_bounds(1.0, 2.0).unwrap();
    let b = BI::from_bounds(3.0, 4.0).unwrap();
    let c = a.add(&b, RoundingPolicy::Correct);
    assert_eq!(c.lo(), 4.0);
    assert_eq!(c.hi(), 6.0);
}

#[test]
fn multiplication_of_symmetric_interval() {
    let a = BI::from_bounds(-1.0, 1.0).unwrap();
    let c = a.mul(&a, RoundingPolicy::Correct);
    assert_eq!(c.lo(), -1.0);
    assert_eq!(c.hi(), 1.0);
}

#[test]
fn even_power_straddling_zero_is_nonnegative() {
    let a = BI::from_bounds(-2.0, 3.0).unwrap();
    let c = a.powi(2, RoundingPolicy::Correct);
    assert_eq!(c.lo(), 0.0);
    assert_eq!(c.hi(), 9.0);
}

#[test]
fn integer_exponent_pow_agrees_under_either_power_mode() {
    let a = BI::from_bounds(2.0, 3.0).unwrap();
    let exp = BI::singleton(2.0);
    let fast = a.pow(&exp, PowerMode::Fast, RoundingPolicy::Correct);
    let slow = a.pow(&exp, PowerMode::Slow, RoundingPolicy::Correct);
    assert_eq!(fast.lo(), 4.0);
    assert_eq!(fast.hi(), 9.0);
    assert_eq!(slow.lo(), fast.lo());
    assert_eq!(slow.hi(), fast.hi());
}

#[test]
fn non_integer_exponent_pow_is_entire_under_slow_mode() {
    let a = BI::from_bounds(2.0, 3.0).unwrap();
    let exp = BI::singleton(1.5);
    let slow = a.pow(&exp, PowerMode::Slow, RoundingPolicy::Correct);
    assert!(slow.lo().is_infinite() && slow.lo() < 0.0);
    assert!(slow.hi().is_infinite() && slow.hi() > 0.0);

    let fast = a.pow(&exp, PowerMode::Fast, RoundingPolicy::Correct);
    assert!(fast.lo() > 0.0 && fast.hi().is_finite());
}

#[test]
fn sqrt_of_partly_negative_clips_to_nonnegative_domain() {
    let a = BI::from_bounds(-1.0, 4.0).unwrap();
    let c = a.sqrt(RoundingPolicy::Correct);
    assert_eq!(c.lo(), 0.0);
    assert_eq!(c.hi(), 2.0);
}

#[test]
fn division_by_thin_zero_is_empty() {
    let a = BI::from_bounds(1.0, 2.0).unwrap();
    let z = BI::singleton(0.0);
    let c = a.div(&z, RoundingPolicy::Correct);
    assert!(c.is_empty());
}

#[test]
fn division_by_straddling_zero_is_entire() {
    let a = BI::from_bounds(1.0, 2.0).unwrap();
    let z = BI::from_bounds(-1.0, 1.0).unwrap();
    let c = a.div(&z, RoundingPolicy::Correct);
    assert!(c.is_entire());
}

#[test]
fn from_bounds_rejects_reversed() {
    assert!(BI::from_bounds(2.0, 1.0).is_err());
}

#[test]
fn from_bounds_rejects_wrong_signed_infinity() {
    assert!(BI::from_bounds(f64::INFINITY, f64::INFINITY).is_err());
    assert!(BI::from_bounds(f64::NEG_INFINITY, f64::NEG_INFINITY).is_err());
}

#[test]
fn mig_mag_on_straddling_interval() {
    let a = BI::from_bounds(-3.0, 2.0).unwrap();
    assert_eq!(a.mig(), 0.0);
    assert_eq!(a.mag(), 3.0);
}

#[test]
fn odd_power_is_monotone() {
    let a = BI::from_bounds(-2.0, 3.0).unwrap();
    let c = a.powi(3, RoundingPolicy::Correct);
    assert_eq!(c.lo(), -8.0);
    assert_eq!(c.hi(), 27.0);
}

#[test]
fn negative_integer_power_straddling_zero_is_entire() {
    let a = BI::from_bounds(-1.0, 1.0).unwrap();
    let c = a.powi(-2, RoundingPolicy::Correct);
    assert!(c.is_entire());
}

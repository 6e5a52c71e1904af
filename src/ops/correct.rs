/*!
The `correct` rounding back-end.

Satisfies the crate's correctly-rounded-math-library contract by
round-tripping every operation through MPFR (`rug::Float`): convert the
`f64`/`f32` operands into a `Float` at the bound type's own precision (this
is always an *exact* conversion — every finite `f64`/`f32` value has a
terminating binary expansion that fits in its own bit width), perform the
operation with MPFR's native directed rounding, and the result is already
at the target precision, so converting back is exact too.

For primitives MPFR rounds directly (`+`, `-`, `*`, `/`, `sqrt`, `exp`,
`log`, `sin`, ...) this *is* the correctly-rounded result, not merely a
conservative approximation of it. `rpow` (general real exponent) has no
single correctly-rounded MPFR primitive taking two arbitrary reals in this
crate's calling convention, so it is computed as `exp(y * ln(x))` with every
intermediate step rounded in the *same* direction as the final result; by
induction each step's result is a valid `dir`-rounding of the exact value
of the exact composition evaluated on the previous (already valid) bound,
so the composition remains a sound enclosure even though it is not a
minimal-width correct rounding — exactly the §6.3 escape hatch ("widen to
the next-higher precision, evaluate, and round back out").
*/

use rug::float::Round;
use rug::ops::{AddAssignRound, DivAssignRound, MulAssignRound, SubAssignRound};
use rug::Float;

use crate::ops::FloatBound;
use crate::round::RoundDirection;

fn to_round(dir: RoundDirection) -> Round {
    match dir {
        RoundDirection::Down => Round::Down,
        RoundDirection::Up => Round::Up,
        RoundDirection::Nearest => Round::Nearest,
        RoundDirection::TowardZero => Round::Zero,
    }
}

/// Converts `f64` to a `Float` at `prec` bits. Exact whenever
/// `prec >= 53` (always true for the `f64`/`f32` bound types this crate
/// ships).
fn to_big(x: f64, prec: u32) -> Float {
    Float::with_val(prec, x)
}

fn from_big_f64(x: &Float) -> f64 {
    if x.is_nan() {
        f64::NAN
    } else {
        x.to_f64()
    }
}

/// Generic correctly-rounded unary evaluation: `op` is one of `Float`'s
/// `_round`-suffixed MPFR bindings (e.g. `Float::exp_round`).
fn unary<F: FloatBound>(x: F, dir: RoundDirection, op: impl FnOnce(Float, Round) -> (Float, std::cmp::Ordering)) -> F {
    let prec = F::PRECISION;
    let bx = to_big(x.to_f64_lossy(), prec);
    if bx.is_nan() {
        return F::nan();
    }
    let (r, _) = op(bx, to_round(dir));
    F::from_f64_lossy(from_big_f64(&r))
}

fn binary<F: FloatBound>(
    x: F,
    y: F,
    dir: RoundDirection,
    op: impl FnOnce(Float, &Float, Round) -> (Float, std::cmp::Ordering),
) -> F {
    let prec = F::PRECISION;
    let bx = to_big(x.to_f64_lossy(), prec);
    let by = to_big(y.to_f64_lossy(), prec);
    if bx.is_nan() || by.is_nan() {
        return F::nan();
    }
    let (r, _) = op(bx, &by, to_round(dir));
    F::from_f64_lossy(from_big_f64(&r))
}

macro_rules! correct_unary {
    ($name:ident, $method:ident) => {
        pub fn $name<F: FloatBound>(x: F, dir: RoundDirection) -> F {
            unary(x, dir, |v, r| v.$method(r))
        }
    };
}

correct_unary!(sqrt, sqrt_round);
correct_unary!(cbrt, cbrt_round);
correct_unary!(exp, exp_round);
correct_unary!(exp2, exp2_round);
correct_unary!(exp10, exp10_round);
correct_unary!(expm1, exp_m1_round);
correct_unary!(log, ln_round);
correct_unary!(log2, log2_round);
correct_unary!(log10, log10_round);
correct_unary!(log1p, ln_1p_round);
correct_unary!(sin, sin_round);
correct_unary!(cos, cos_round);
correct_unary!(tan, tan_round);
correct_unary!(asin, asin_round);
correct_unary!(acos, acos_round);
correct_unary!(atan, atan_round);
correct_unary!(sinh, sinh_round);
correct_unary!(cosh, cosh_round);
correct_unary!(tanh, tanh_round);
correct_unary!(asinh, asinh_round);
correct_unary!(acosh, acosh_round);
correct_unary!(atanh, atanh_round);

pub fn inv<F: FloatBound>(x: F, dir: RoundDirection) -> F {
    let prec = F::PRECISION;
    let bx = to_big(x.to_f64_lossy(), prec);
    if bx.is_nan() {
        return F::nan();
    }
    let one = Float::with_val(prec, 1.0);
    let (r, _) = one.div_round(bx, to_round(dir));
    F::from_f64_lossy(from_big_f64(&r))
}

pub fn radd<F: FloatBound>(x: F, y: F, dir: RoundDirection) -> F {
    binary(x, y, dir, |mut v, o, r| {
        let ord = v.add_assign_round(o, r);
        (v, ord)
    })
}

pub fn rsub<F: FloatBound>(x: F, y: F, dir: RoundDirection) -> F {
    binary(x, y, dir, |mut v, o, r| {
        let ord = v.sub_assign_round(o, r);
        (v, ord)
    })
}

pub fn rmul<F: FloatBound>(x: F, y: F, dir: RoundDirection) -> F {
    binary(x, y, dir, |mut v, o, r| {
        let ord = v.mul_assign_round(o, r);
        (v, ord)
    })
}

pub fn rdiv<F: FloatBound>(x: F, y: F, dir: RoundDirection) -> F {
    binary(x, y, dir, |mut v, o, r| {
        let ord = v.div_assign_round(o, r);
        (v, ord)
    })
}

pub fn atan2<F: FloatBound>(y: F, x: F, dir: RoundDirection) -> F {
    binary(y, x, dir, |v, o, r| v.atan2_round(o, r))
}

pub fn hypot<F: FloatBound>(x: F, y: F, dir: RoundDirection) -> F {
    binary(x, y, dir, |v, o, r| v.hypot_round(o, r))
}

/// `x^y` via `exp(y * ln(x))`, every stage rounded in `dir` (see module
/// docs). Callers are responsible for handling `x <= 0` before reaching
/// here (`BareInterval::powf` restricts the base to `[0, +inf)`).
pub fn rpow<F: FloatBound>(x: F, y: F, dir: RoundDirection) -> F {
    let prec = F::PRECISION;
    let bx = to_big(x.to_f64_lossy(), prec);
    let by = to_big(y.to_f64_lossy(), prec);
    if bx.is_nan() || by.is_nan() {
        return F::nan();
    }
    if bx.is_zero() {
        return if by.is_zero() { F::one() } else { F::zero() };
    }
    let r = to_round(dir);
    let (lnx, _) = bx.ln_round(r);
    let (ylnx, _) = by.clone().mul_round(lnx, r);
    let (result, _) = ylnx.exp_round(r);
    F::from_f64_lossy(from_big_f64(&result))
}

pub fn rfma<F: FloatBound>(a: F, b: F, c: F, dir: RoundDirection) -> F {
    let prec = F::PRECISION;
    let ba = to_big(a.to_f64_lossy(), prec);
    let bb = to_big(b.to_f64_lossy(), prec);
    let bc = to_big(c.to_f64_lossy(), prec);
    if ba.is_nan() || bb.is_nan() || bc.is_nan() {
        return F::nan();
    }
    let r = to_round(dir);
    let (ab, _) = ba.mul_round(bb, r);
    let (result, _) = ab.add_round(bc, r);
    F::from_f64_lossy(from_big_f64(&result))
}

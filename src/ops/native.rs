/*!
The `none` rounding back-end.

Uses the platform's native, round-to-nearest float operations and then
widens by one ULP in the requested direction. This is always a conservative
(enclosing) result, but never a tight one, and callers must raise NG on
every value produced this way — that bookkeeping lives in
[`crate::interval::Interval`], not here.
*/

use crate::ops::FloatBound;
use crate::round::RoundDirection;

/// Widens a round-to-nearest `f64`/`f32` result by one ULP in `dir`.
///
/// `Nearest`/`TowardZero` pass the native result through unchanged: this
/// back-end's conservative-widening contract only applies to the two
/// outward directions an interval bound actually needs.
pub fn widen<F: FloatBound>(native: F, dir: RoundDirection) -> F {
    if native.is_nan() || native.is_infinite() {
        return native;
    }
    match dir {
        RoundDirection::Down => native.next_down(),
        RoundDirection::Up => native.next_up(),
        RoundDirection::Nearest | RoundDirection::TowardZero => native,
    }
}

macro_rules! native_1ary {
    ($name:ident, $f:expr) => {
        pub fn $name<F: FloatBound + NativeUnary>(x: F, dir: RoundDirection) -> F {
            widen($f(x), dir)
        }
    };
}

/// Native (possibly non-correctly-rounded) evaluations of the unary
/// transcendentals, implemented per concrete float type in `f32_impl`/
/// `f64_impl` by delegating to `std`'s libm bindings.
pub trait NativeUnary: FloatBound {
    fn native_sqrt(self) -> Self;
    fn native_cbrt(self) -> Self;
    fn native_exp(self) -> Self;
    fn native_exp2(self) -> Self;
    fn native_exp10(self) -> Self;
    fn native_expm1(self) -> Self;
    fn native_log(self) -> Self;
    fn native_log2(self) -> Self;
    fn native_log10(self) -> Self;
    fn native_log1p(self) -> Self;
    fn native_sin(self) -> Self;
    fn native_cos(self) -> Self;
    fn native_tan(self) -> Self;
    fn native_asin(self) -> Self;
    fn native_acos(self) -> Self;
    fn native_atan(self) -> Self;
    fn native_sinh(self) -> Self;
    fn native_cosh(self) -> Self;
    fn native_tanh(self) -> Self;
    fn native_asinh(self) -> Self;
    fn native_acosh(self) -> Self;
    fn native_atanh(self) -> Self;
}

native_1ary!(sqrt, |x: F| x.native_sqrt());
native_1ary!(cbrt, |x: F| x.native_cbrt());
native_1ary!(exp, |x: F| x.native_exp());
native_1ary!(exp2, |x: F| x.native_exp2());
native_1ary!(exp10, |x: F| x.native_exp10());
native_1ary!(expm1, |x: F| x.native_expm1());
native_1ary!(log, |x: F| x.native_log());
native_1ary!(log2, |x: F| x.native_log2());
native_1ary!(log10, |x: F| x.native_log10());
native_1ary!(log1p, |x: F| x.native_log1p());
native_1ary!(sin, |x: F| x.native_sin());
native_1ary!(cos, |x: F| x.native_cos());
native_1ary!(tan, |x: F| x.native_tan());
native_1ary!(asin, |x: F| x.native_asin());
native_1ary!(acos, |x: F| x.native_acos());
native_1ary!(atan, |x: F| x.native_atan());
native_1ary!(sinh, |x: F| x.native_sinh());
native_1ary!(cosh, |x: F| x.native_cosh());
native_1ary!(tanh, |x: F| x.native_tanh());
native_1ary!(asinh, |x: F| x.native_asinh());
native_1ary!(acosh, |x: F| x.native_acosh());
native_1ary!(atanh, |x: F| x.native_atanh());

pub fn inv<F>(x: F, dir: RoundDirection) -> F
where
    F: FloatBound + std::ops::Div<Output = F>,
{
    widen(F::one() / x, dir)
}

pub fn radd<F>(x: F, y: F, dir: RoundDirection) -> F
where
    F: FloatBound + std::ops::Add<Output = F>,
{
    widen(x + y, dir)
}

pub fn rsub<F>(x: F, y: F, dir: RoundDirection) -> F
where
    F: FloatBound + std::ops::Sub<Output = F>,
{
    widen(x - y, dir)
}

pub fn rmul<F>(x: F, y: F, dir: RoundDirection) -> F
where
    F: FloatBound + std::ops::Mul<Output = F>,
{
    widen(x * y, dir)
}

pub fn rdiv<F>(x: F, y: F, dir: RoundDirection) -> F
where
    F: FloatBound + std::ops::Div<Output = F>,
{
    widen(x / y, dir)
}

pub fn rfma<F: FloatBound + NativeFma>(a: F, b: F, c: F, dir: RoundDirection) -> F {
    widen(a.native_mul_add(b, c), dir)
}

pub trait NativeFma: FloatBound {
    fn native_mul_add(self, b: Self, c: Self) -> Self;
}

pub fn atan2<F: FloatBound + NativeAtan2>(y: F, x: F, dir: RoundDirection) -> F {
    widen(y.native_atan2(x), dir)
}

pub trait NativeAtan2: FloatBound {
    fn native_atan2(self, x: Self) -> Self;
}

pub fn hypot<F: FloatBound + NativeHypot>(x: F, y: F, dir: RoundDirection) -> F {
    widen(x.native_hypot(y), dir)
}

pub trait NativeHypot: FloatBound {
    fn native_hypot(self, y: Self) -> Self;
}

pub fn rpow<F: FloatBound + NativePow>(x: F, y: F, dir: RoundDirection) -> F {
    widen(x.native_powf(y), dir)
}

pub trait NativePow: FloatBound {
    fn native_powf(self, y: Self) -> Self;
}

use crate::ops::native::{self, NativeAtan2, NativeFma, NativeHypot, NativePow, NativeUnary};
use crate::ops::*;
use crate::round::RoundDirection;

impl FloatBound for f32 {
    const PRECISION: u32 = 24;

    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn neg_one() -> Self {
        -1.0
    }
    fn infinity() -> Self {
        f32::INFINITY
    }
    fn neg_infinity() -> Self {
        f32::NEG_INFINITY
    }
    fn nan() -> Self {
        f32::NAN
    }

    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
    fn is_infinite(self) -> bool {
        f32::is_infinite(self)
    }
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
    fn is_zero(self) -> bool {
        self == 0.0
    }
    fn is_sign_negative(self) -> bool {
        f32::is_sign_negative(self)
    }

    fn abs(self) -> Self {
        f32::abs(self)
    }
    fn neg(self) -> Self {
        -self
    }

    fn min_raw(self, other: Self) -> Self {
        f32::min(self, other)
    }
    fn max_raw(self, other: Self) -> Self {
        f32::max(self, other)
    }

    fn to_f64_lossy(self) -> f64 {
        self as f64
    }
    fn from_f64_lossy(x: f64) -> Self {
        x as f32
    }

    fn next_up(self) -> Self {
        f32::next_up(self)
    }
    fn next_down(self) -> Self {
        f32::next_down(self)
    }
}

impl NativeUnary for f32 {
    fn native_sqrt(self) -> Self {
        self.sqrt()
    }
    fn native_cbrt(self) -> Self {
        self.cbrt()
    }
    fn native_exp(self) -> Self {
        self.exp()
    }
    fn native_exp2(self) -> Self {
        self.exp2()
    }
    fn native_exp10(self) -> Self {
        10f32.powf(self)
    }
    fn native_expm1(self) -> Self {
        self.exp_m1()
    }
    fn native_log(self) -> Self {
        self.ln()
    }
    fn native_log2(self) -> Self {
        self.log2()
    }
    fn native_log10(self) -> Self {
        self.log10()
    }
    fn native_log1p(self) -> Self {
        self.ln_1p()
    }
    fn native_sin(self) -> Self {
        self.sin()
    }
    fn native_cos(self) -> Self {
        self.cos()
    }
    fn native_tan(self) -> Self {
        self.tan()
    }
    fn native_asin(self) -> Self {
        self.asin()
    }
    fn native_acos(self) -> Self {
        self.acos()
    }
    fn native_atan(self) -> Self {
        self.atan()
    }
    fn native_sinh(self) -> Self {
        self.sinh()
    }
    fn native_cosh(self) -> Self {
        self.cosh()
    }
    fn native_tanh(self) -> Self {
        self.tanh()
    }
    fn native_asinh(self) -> Self {
        self.asinh()
    }
    fn native_acosh(self) -> Self {
        self.acosh()
    }
    fn native_atanh(self) -> Self {
        self.atanh()
    }
}

impl NativeFma for f32 {
    fn native_mul_add(self, b: Self, c: Self) -> Self {
        f32::mul_add(self, b, c)
    }
}

impl NativeAtan2 for f32 {
    fn native_atan2(self, x: Self) -> Self {
        f32::atan2(self, x)
    }
}

impl NativeHypot for f32 {
    fn native_hypot(self, y: Self) -> Self {
        f32::hypot(self, y)
    }
}

impl NativePow for f32 {
    fn native_powf(self, y: Self) -> Self {
        f32::powf(self, y)
    }
}

macro_rules! impl_rounded_1ary {
    ($trait:ident, $method:ident) => {
        impl $trait for f32 {
            fn $method(self, dir: RoundDirection, policy: RoundingPolicy) -> Self {
                match policy {
                    RoundingPolicy::Correct => crate::ops::correct::$method(self, dir),
                    RoundingPolicy::None => native::$method(self, dir),
                }
            }
        }
    };
}

impl_rounded_1ary!(RoundedSqrt, sqrt);
impl_rounded_1ary!(RoundedCbrt, cbrt);
impl_rounded_1ary!(RoundedInv, inv);
impl_rounded_1ary!(RoundedExp, exp);
impl_rounded_1ary!(RoundedExp2, exp2);
impl_rounded_1ary!(RoundedExp10, exp10);
impl_rounded_1ary!(RoundedExpm1, expm1);
impl_rounded_1ary!(RoundedLog, log);
impl_rounded_1ary!(RoundedLog2, log2);
impl_rounded_1ary!(RoundedLog10, log10);
impl_rounded_1ary!(RoundedLog1p, log1p);
impl_rounded_1ary!(RoundedSin, sin);
impl_rounded_1ary!(RoundedCos, cos);
impl_rounded_1ary!(RoundedTan, tan);
impl_rounded_1ary!(RoundedAsin, asin);
impl_rounded_1ary!(RoundedAcos, acos);
impl_rounded_1ary!(RoundedAtan, atan);
impl_rounded_1ary!(RoundedSinh, sinh);
impl_rounded_1ary!(RoundedCosh, cosh);
impl_rounded_1ary!(RoundedTanh, tanh);
impl_rounded_1ary!(RoundedAsinh, asinh);
impl_rounded_1ary!(RoundedAcosh, acosh);
impl_rounded_1ary!(RoundedAtanh, atanh);

macro_rules! impl_rounded_2ary {
    ($trait:ident, $method:ident) => {
        impl $trait for f32 {
            fn $method(self, other: Self, dir: RoundDirection, policy: RoundingPolicy) -> Self {
                match policy {
                    RoundingPolicy::Correct => crate::ops::correct::$method(self, other, dir),
                    RoundingPolicy::None => native::$method(self, other, dir),
                }
            }
        }
    };
}

impl_rounded_2ary!(RoundedAdd, radd);
impl_rounded_2ary!(RoundedSub, rsub);
impl_rounded_2ary!(RoundedMul, rmul);
impl_rounded_2ary!(RoundedDiv, rdiv);
impl_rounded_2ary!(RoundedPow, rpow);
impl_rounded_2ary!(RoundedAtan2, atan2);
impl_rounded_2ary!(RoundedHypot, hypot);

impl RoundedFma for f32 {
    fn rfma(self, b: Self, c: Self, dir: RoundDirection, policy: RoundingPolicy) -> Self {
        match policy {
            RoundingPolicy::Correct => crate::ops::correct::rfma(self, b, c, dir),
            RoundingPolicy::None => native::rfma(self, b, c, dir),
        }
    }
}

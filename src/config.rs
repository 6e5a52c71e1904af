/*!
Process-wide configuration, threaded explicitly rather than
held in global or thread-local state.

A [`Config`] is a small `Copy` value built once (typically via
[`Config::default`] plus a handful of `with_*` calls) and passed by shared
reference into every call that needs to pick a rounding back-end or
algorithm variant. `BareInterval`/`Interval` arithmetic, matrix multiply,
matrix inversion, and eigenvalue enclosure all take `&Config`; there is no
ambient global this crate consults instead.
*/

use crate::ops::RoundingPolicy;

/// Element numeric type backing an `Interval`/`BareInterval`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    /// `f64`, the primary, fully-verified instantiation.
    Binary64,
    /// `f32`, sharing the same generic code as `Binary64`.
    Binary32,
    /// `rug::Float` at a fixed working precision.
    Arbitrary { precision: u32 },
}

impl Default for BoundType {
    fn default() -> Self {
        BoundType::Binary64
    }
}

/// IEEE 1788 flavor. Only the set-based flavor is implemented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Flavor {
    #[default]
    SetBased,
}

/// Exponentiation algorithm selector for `BareInterval::pow`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PowerMode {
    /// Repeated squaring via `rmul`/`inv` only; no transcendental calls.
    Slow,
    /// `exp(y * ln(x))` composition for non-integer/non-small-integer
    /// exponents (see `ops::correct`'s module docs for the soundness
    /// argument).
    #[default]
    Fast,
}

/// Matrix-multiply algorithm selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MatMulMode {
    /// Triple loop, componentwise directed-rounding accumulation.
    Slow,
    /// Rump's midpoint-radius algorithm.
    #[default]
    Fast,
}

/// Immutable, explicitly-threaded configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    bound_type: BoundType,
    flavor: Flavor,
    rounding: RoundingPolicy,
    power: PowerMode,
    matmul: MatMulMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bound_type: BoundType::default(),
            flavor: Flavor::default(),
            rounding: RoundingPolicy::Correct,
            power: PowerMode::default(),
            matmul: MatMulMode::default(),
        }
    }
}

impl Config {
    pub fn bound_type(&self) -> BoundType {
        self.bound_type
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn rounding(&self) -> RoundingPolicy {
        self.rounding
    }

    pub fn power(&self) -> PowerMode {
        self.power
    }

    pub fn matmul(&self) -> MatMulMode {
        self.matmul
    }

    pub fn with_bound_type(mut self, bound_type: BoundType) -> Self {
        self.bound_type = bound_type;
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingPolicy) -> Self {
        if rounding == RoundingPolicy::None {
            tracing::debug!(
                "Config: selecting the `none` rounding back-end; every arithmetic result will carry ng=true"
            );
        }
        self.rounding = rounding;
        self
    }

    pub fn with_power(mut self, power: PowerMode) -> Self {
        self.power = power;
        self
    }

    pub fn with_matmul(mut self, matmul: MatMulMode) -> Self {
        self.matmul = matmul;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_table() {
        let cfg = Config::default();
        assert_eq!(cfg.bound_type(), BoundType::Binary64);
        assert_eq!(cfg.flavor(), Flavor::SetBased);
        assert_eq!(cfg.rounding(), RoundingPolicy::Correct);
        assert_eq!(cfg.power(), PowerMode::Fast);
        assert_eq!(cfg.matmul(), MatMulMode::Fast);
    }

    #[test]
    fn with_methods_override_one_field_at_a_time() {
        let cfg = Config::default()
            .with_rounding(RoundingPolicy::None)
            .with_power(PowerMode::Slow);
        assert_eq!(cfg.rounding(), RoundingPolicy::None);
        assert_eq!(cfg.power(), PowerMode::Slow);
        assert_eq!(cfg.matmul(), MatMulMode::Fast);
    }
}

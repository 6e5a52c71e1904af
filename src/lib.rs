/*!
Validated numerics via interval arithmetic conforming to IEEE Std
1788-2015 (set-based flavor), plus verified linear algebra over
interval-valued matrices.

Given inputs drawn from uncertain ranges, every primitive here produces a
closed interval guaranteed to contain the exact mathematical result,
despite the use of finite-precision floating point underneath. The core
number type is [`Interval`], a [`BareInterval`] decorated with a
[`Decoration`] and an NG ("not guaranteed") flag; [`ComplexInterval`]
pairs two of them for Gauss-style complex arithmetic. [`matrix`] builds
verified matrix multiplication (Rump's midpoint-radius algorithm),
verified matrix inversion (Brouwer fixed-point / Neumann-series
validation), and verified eigenvalue enclosure (Gershgorin discs after
similarity refinement) on top.

Every operation that can choose a rounding back-end or algorithm variant
takes an explicit [`Config`] rather than consulting global state.
*/

pub mod bare_interval;
pub mod complex;
pub mod config;
pub mod decoration;
pub mod error;
pub mod fmt;
pub mod interval;
pub mod matrix;
pub mod ops;
pub mod round;

pub use crate::bare_interval::BareInterval;
pub use crate::complex::ComplexInterval;
pub use crate::config::Config;
pub use crate::decoration::Decoration;
pub use crate::error::{Error, Result};
pub use crate::interval::Interval;
pub use crate::ops::RoundingPolicy;
pub use crate::round::RoundDirection;

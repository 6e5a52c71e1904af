/*!
Typed errors, surfaced for shape/contract violations.

`NotGuaranteed` and `UnverifiedResult` are deliberately *not* variants here
— they are "soft" failures, observed through
[`crate::interval::Interval::ng`] / [`crate::interval::Interval::is_nai`],
not through `Result::Err`. Only the three "surfaced" kinds
(`InvalidBounds`, `DimensionMismatch`, `DomainError`) are real errors.
*/

use derive_more::{Display, Error};

/// A shape or contract violation.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// `BareInterval::from_bounds(lo, hi)` was given `lo > hi`, or an
    /// endpoint of the wrong-signed infinity (`lo = +inf` or `hi = -inf`).
    #[display("invalid bounds: lo={lo}, hi={hi}")]
    InvalidBounds { lo: f64, hi: f64 },

    /// A matrix/vector operation was given operands of incompatible shape.
    #[display(
        "dimension mismatch: expected {expected_rows}x{expected_cols}, found {found_rows}x{found_cols}"
    )]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        found_rows: usize,
        found_cols: usize,
    },

    /// A real-valued function was evaluated strictly outside its domain in
    /// a context that cannot simply degrade the decoration (e.g. the caller
    /// asked for a scalar corner value, not an enclosing interval).
    #[display("{op} is undefined on this input")]
    DomainError { op: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn dimension_mismatch(expected: (usize, usize), found: (usize, usize)) -> Self {
        Error::DimensionMismatch {
            expected_rows: expected.0,
            expected_cols: expected.1,
            found_rows: found.0,
            found_cols: found.1,
        }
    }
}

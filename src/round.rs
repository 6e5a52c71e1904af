/*!
Rounding directions for interval arithmetic.

Unlike a classical rounding *mode* (which picks one representable value
given a sign and a tie-breaking rule), interval arithmetic needs outward
rounding: every lower bound rounds toward `-inf` and every upper bound
rounds toward `+inf`, so that the resulting interval never loses any of the
exact result. [`RoundDirection`] names the directions [`crate::ops`] can be
asked to round in; [`round_pair!`] is this crate's equivalent of the
teacher's `@round(..., ...)` source macro.
*/

use std::fmt;

/// A rounding direction for a single scalar computation.
///
/// `Down`/`Up` are the two directions used to build the lower/upper bound of
/// an outward-rounded interval endpoint. `Nearest` and `TowardZero` exist for
/// operations that are deliberately not required to enclose, such as
/// computing a midpoint or an approximate inverse for [`crate::matrix::inv`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundDirection {
    /// Round toward `-infinity`.
    Down,
    /// Round toward `+infinity`.
    Up,
    /// Round to nearest, ties to even.
    Nearest,
    /// Round toward zero (truncation).
    TowardZero,
}

impl RoundDirection {
    /// Flips `Down` and `Up`; `Nearest`/`TowardZero` are their own reverse.
    pub fn reverse(self) -> Self {
        match self {
            RoundDirection::Down => RoundDirection::Up,
            RoundDirection::Up => RoundDirection::Down,
            other => other,
        }
    }
}

impl fmt::Display for RoundDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoundDirection::Down => "down",
            RoundDirection::Up => "up",
            RoundDirection::Nearest => "nearest",
            RoundDirection::TowardZero => "toward-zero",
        };
        f.write_str(s)
    }
}

/// Evaluates `$lo` under [`RoundDirection::Down`] and `$hi` under
/// [`RoundDirection::Up`], in that order, then passes both to `$mk`.
///
/// Mirrors the source's `@round(lo_expr, hi_expr)` idiom without requiring a
/// metaprogramming facility: it is just two ordinary calls, each given an
/// explicit direction.
#[macro_export]
macro_rules! round_pair {
    ($mk:expr, $lo:expr, $hi:expr) => {{
        let lo = ($lo)($crate::round::RoundDirection::Down);
        let hi = ($hi)($crate::round::RoundDirection::Up);
        ($mk)(lo, hi)
    }};
}

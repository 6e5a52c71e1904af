/*!
Display rendering for `BareInterval`/`Interval`/`ComplexInterval`:
`infsup` (`[lo, hi]`), `midpoint` (`m ± r`), and `full` (all fields), each
with independent decoration/NG-suffix/digit-count options.

Uses a small owned formatting-configuration struct threaded explicitly
into rendering, rather than a global, matching how [`crate::config::Config`]
is threaded into arithmetic.
*/

use std::fmt;

use crate::bare_interval::BareInterval;
use crate::complex::ComplexInterval;
use crate::interval::Interval;
use crate::ops::RoundedOps;

/// Which of the three textual forms to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// `[lo, hi]`.
    InfSup,
    /// `m ± r`.
    Midpoint,
    /// All fields: bounds, decoration, NG.
    Full,
}

/// Formatting options threaded into `Interval`/`ComplexInterval` display,
/// rather than read from a global.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplaySpec {
    pub mode: DisplayMode,
    pub show_decoration: bool,
    pub show_ng: bool,
    pub digits: usize,
}

impl Default for DisplaySpec {
    fn default() -> Self {
        DisplaySpec {
            mode: DisplayMode::InfSup,
            show_decoration: true,
            show_ng: true,
            digits: 6,
        }
    }
}

impl DisplaySpec {
    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }

    fn fmt_bare<F: RoundedOps>(&self, f: &mut fmt::Formatter<'_>, b: &BareInterval<F>) -> fmt::Result {
        if b.is_empty() {
            return write!(f, "empty");
        }
        if b.is_entire() {
            return write!(f, "entire");
        }
        match self.mode {
            DisplayMode::InfSup | DisplayMode::Full => write!(
                f,
                "[{:.*}, {:.*}]",
                self.digits,
                b.lo().to_f64_lossy(),
                self.digits,
                b.hi().to_f64_lossy()
            ),
            DisplayMode::Midpoint => write!(
                f,
                "{:.*} \u{b1} {:.*}",
                self.digits,
                b.midpoint().to_f64_lossy(),
                self.digits,
                b.radius().to_f64_lossy()
            ),
        }
    }

    pub fn fmt_interval<F: RoundedOps>(
        &self,
        f: &mut fmt::Formatter<'_>,
        x: &Interval<F>,
    ) -> fmt::Result {
        if x.is_nai() {
            return write!(f, "NaI");
        }
        self.fmt_bare(f, x.bare())?;
        if self.show_decoration {
            write!(f, "_{}", x.decoration())?;
        }
        if self.show_ng && x.ng() {
            write!(f, "_ng")?;
        }
        Ok(())
    }

    pub fn fmt_complex<F: RoundedOps>(
        &self,
        f: &mut fmt::Formatter<'_>,
        z: &ComplexInterval<F>,
    ) -> fmt::Result {
        if z.is_nai() {
            return write!(f, "NaI");
        }
        self.fmt_bare(f, z.re().bare())?;
        write!(f, " + i*")?;
        self.fmt_bare(f, z.im().bare())
    }
}

impl<F: RoundedOps> fmt::Display for BareInterval<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplaySpec::default().fmt_bare(f, self)
    }
}

impl<F: RoundedOps> fmt::Display for Interval<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplaySpec::default().fmt_interval(f, self)
    }
}

impl<F: RoundedOps> fmt::Display for ComplexInterval<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplaySpec::default().fmt_complex(f, self)
    }
}

/*!
Verified matrix inversion via Brouwer fixed-point / Neumann-series
validation.

`approxInv(I + (A·approxInv − I) + ...)` converges to the true inverse
whenever `‖A·approxInv − I‖ < 1`; the tail of that Neumann series is
bounded by `mag(Y) / (1 − Z₁)`, which is what gets added as a uniform
radius inflation around the float `approxInv` the non-verified solver
produced. When the contraction condition fails, the result degrades
silently to an all-`NaI` matrix rather than returning an unsound
enclosure.
*/

use crate::bare_interval::BareInterval;
use crate::complex::ComplexInterval;
use crate::decoration::Decoration;
use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::matrix::{matmul, opnorm, Matrix};
use crate::ops::{RoundedOps, RoundingPolicy};
use crate::round::RoundDirection;

use nalgebra::{Complex, DMatrix};
use tracing::warn;

fn require_square<T>(a: &Matrix<T>) -> Result<usize> {
    let (r, c) = a.shape();
    if r != c {
        return Err(Error::dimension_mismatch((r, r), (r, c)));
    }
    Ok(r)
}

fn all_nai_real<F: RoundedOps>(n: usize) -> Matrix<Interval<F>> {
    Matrix::from_fn(n, n, |_, _| Interval::nai())
}

fn all_nai_complex<F: RoundedOps>(n: usize) -> Matrix<ComplexInterval<F>> {
    Matrix::from_fn(n, n, |_, _| ComplexInterval::nai())
}

/// Inverts a square real interval matrix, or returns an all-`NaI` matrix
/// if the Neumann-series contraction cannot be verified.
pub fn real<F: RoundedOps>(a: &Matrix<Interval<F>>) -> Result<Matrix<Interval<F>>> {
    let n = require_square(a)?;

    let mid_f64: Vec<f64> = (0..n * n)
        .map(|idx| a.get(idx / n, idx % n).bare().midpoint().to_f64_lossy())
        .collect();
    let mid_mat = DMatrix::from_row_slice(n, n, &mid_f64);
    let approx_inv_f64 = match mid_mat.try_inverse() {
        Some(m) => m,
        None => {
            warn!("matinv: midpoint matrix is numerically singular, returning NaI");
            return Ok(all_nai_real(n));
        }
    };

    let approx_inv = Matrix::from_fn(n, n, |i, j| {
        Interval::singleton(F::from_f64_lossy(approx_inv_f64[(i, j)]))
    });

    let policy = RoundingPolicy::Correct;
    let prod = matmul::real(a, &approx_inv, matmul::Mode::Fast, policy)?;
    let identity = Matrix::from_fn(n, n, |i, j| {
        Interval::singleton(if i == j { F::one() } else { F::zero() })
    });
    let residual = Matrix::from_fn(n, n, |i, j| prod.get(i, j).sub(identity.get(i, j), policy));

    let y_mat = matmul::real(&approx_inv, &residual, matmul::Mode::Fast, policy)?;
    let (y_bound, y_ng) = opnorm::norm_inf_real(&y_mat);
    let (z1_bound, z1_ng) = opnorm::norm_inf_real(&residual);

    if !y_bound.is_finite() || z1_bound >= F::one() {
        warn!("matinv: Neumann-series contraction not verified (z1 >= 1), returning NaI");
        return Ok(all_nai_real(n));
    }

    let one_minus_z1 = F::one().rsub(z1_bound, RoundDirection::Down, policy);
    if one_minus_z1 <= F::zero() {
        warn!("matinv: contraction bound degenerate after rounding, returning NaI");
        return Ok(all_nai_real(n));
    }
    let inflation = y_bound.rdiv(one_minus_z1, RoundDirection::Up, policy);

    let ng = any_ng_real(a) || y_ng || z1_ng;
    Ok(Matrix::from_fn(n, n, |i, j| {
        let center = approx_inv.get(i, j).bare().midpoint();
        let lo = center.rsub(inflation, RoundDirection::Down, policy);
        let hi = center.radd(inflation, RoundDirection::Up, policy);
        let bare = BareInterval::from_bounds(lo, hi).unwrap_or_else(|_| BareInterval::entire());
        Interval::from_parts(bare, Decoration::Com, ng)
    }))
}

fn any_ng_real<F: RoundedOps>(a: &Matrix<Interval<F>>) -> bool {
    (0..a.rows()).any(|i| (0..a.cols()).any(|j| a.get(i, j).ng()))
}

fn any_ng_complex<F: RoundedOps>(a: &Matrix<ComplexInterval<F>>) -> bool {
    (0..a.rows()).any(|i| (0..a.cols()).any(|j| {
        let cell = a.get(i, j);
        cell.re().ng() || cell.im().ng()
    }))
}

/// Complex analogue of [`real`], for the inversion step `inv(V)` inside
/// the eigenvalue solver. Same Neumann-series argument, over
/// `nalgebra::Complex<f64>` for the non-verified scratch solve.
pub fn complex<F: RoundedOps>(
    a: &Matrix<ComplexInterval<F>>,
) -> Result<Matrix<ComplexInterval<F>>> {
    let n = require_square(a)?;

    let mid_c: Vec<Complex<f64>> = (0..n * n)
        .map(|idx| {
            let cell = a.get(idx / n, idx % n);
            Complex::new(
                cell.re().bare().midpoint().to_f64_lossy(),
                cell.im().bare().midpoint().to_f64_lossy(),
            )
        })
        .collect();
    let mid_mat = DMatrix::from_row_slice(n, n, &mid_c);
    let approx_inv_c = match mid_mat.try_inverse() {
        Some(m) => m,
        None => {
            warn!("matinv: midpoint matrix is numerically singular (complex), returning NaI");
            return Ok(all_nai_complex(n));
        }
    };

    let approx_inv = Matrix::from_fn(n, n, |i, j| {
        let c = approx_inv_c[(i, j)];
        ComplexInterval::new(
            Interval::singleton(F::from_f64_lossy(c.re)),
            Interval::singleton(F::from_f64_lossy(c.im)),
        )
    });

    let policy = RoundingPolicy::Correct;
    let prod = matmul::complex(a, &approx_inv, matmul::Mode::Fast, policy)?;
    let identity = Matrix::from_fn(n, n, |i, j| {
        let one_if_diag = if i == j { F::one() } else { F::zero() };
        ComplexInterval::new(
            Interval::singleton(one_if_diag),
            Interval::singleton(F::zero()),
        )
    });
    let residual = Matrix::from_fn(n, n, |i, j| prod.get(i, j).sub(identity.get(i, j), policy));

    let y_mat = matmul::complex(&approx_inv, &residual, matmul::Mode::Fast, policy)?;
    let (y_bound, y_ng) = opnorm::norm_inf_complex(&y_mat);
    let (z1_bound, z1_ng) = opnorm::norm_inf_complex(&residual);

    if !y_bound.is_finite() || z1_bound >= F::one() {
        warn!("matinv: Neumann-series contraction not verified for complex operand, returning NaI");
        return Ok(all_nai_complex(n));
    }
    let one_minus_z1 = F::one().rsub(z1_bound, RoundDirection::Down, policy);
    if one_minus_z1 <= F::zero() {
        warn!("matinv: contraction bound degenerate after rounding, returning NaI");
        return Ok(all_nai_complex(n));
    }
    let inflation = y_bound.rdiv(one_minus_z1, RoundDirection::Up, policy);

    let ng = any_ng_complex(a) || y_ng || z1_ng;
    Ok(Matrix::from_fn(n, n, |i, j| {
        let c = approx_inv_c[(i, j)];
        let re_c = F::from_f64_lossy(c.re);
        let im_c = F::from_f64_lossy(c.im);
        let re_lo = re_c.rsub(inflation, RoundDirection::Down, policy);
        let re_hi = re_c.radd(inflation, RoundDirection::Up, policy);
        let im_lo = im_c.rsub(inflation, RoundDirection::Down, policy);
        let im_hi = im_c.radd(inflation, RoundDirection::Up, policy);
        let re_bare =
            BareInterval::from_bounds(re_lo, re_hi).unwrap_or_else(|_| BareInterval::entire());
        let im_bare =
            BareInterval::from_bounds(im_lo, im_hi).unwrap_or_else(|_| BareInterval::entire());
        ComplexInterval::new(
            Interval::from_parts(re_bare, Decoration::Com, ng),
            Interval::from_parts(im_bare, Decoration::Com, ng),
        )
    }))
}

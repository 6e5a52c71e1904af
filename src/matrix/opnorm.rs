/*!
Operator norms `‖·‖₁`/`‖·‖∞` over interval and complex-interval matrices,
preserving the NG flag of the argument.
*/

use crate::complex::ComplexInterval;
use crate::interval::Interval;
use crate::matrix::Matrix;
use crate::ops::{RoundedOps, RoundingPolicy};
use crate::round::RoundDirection;

/// `‖A‖₁ = max_j Σ_i mag(A[i,j])`, accumulated with round-up so the result
/// is a valid (possibly non-tight) upper bound. Returns `(bound, ng)`.
pub fn norm1_real<F: RoundedOps>(a: &Matrix<Interval<F>>) -> (F, bool) {
    let mut max_col = F::zero();
    let mut ng = false;
    for j in 0..a.cols() {
        let mut col_sum = F::zero();
        for i in 0..a.rows() {
            let cell = a.get(i, j);
            ng |= cell.ng();
            col_sum = col_sum.radd(
                cell.bare().mag(),
                RoundDirection::Up,
                RoundingPolicy::Correct,
            );
        }
        max_col = max_col.max_raw(col_sum);
    }
    (max_col, ng)
}

/// `‖A‖∞ = max_i Σ_j mag(A[i,j])`.
pub fn norm_inf_real<F: RoundedOps>(a: &Matrix<Interval<F>>) -> (F, bool) {
    let mut max_row = F::zero();
    let mut ng = false;
    for i in 0..a.rows() {
        let mut row_sum = F::zero();
        for j in 0..a.cols() {
            let cell = a.get(i, j);
            ng |= cell.ng();
            row_sum = row_sum.radd(
                cell.bare().mag(),
                RoundDirection::Up,
                RoundingPolicy::Correct,
            );
        }
        max_row = max_row.max_raw(row_sum);
    }
    (max_row, ng)
}

/// Complex `mag`: `sqrt(re^2 + im^2)`, rounded up — the complex analogue
/// of `BareInterval::mag` used by the complex operator norms.
fn complex_mag<F: RoundedOps>(x: &ComplexInterval<F>) -> F {
    let re2 = x.re().bare().mag().rmul(
        x.re().bare().mag(),
        RoundDirection::Up,
        RoundingPolicy::Correct,
    );
    let im2 = x.im().bare().mag().rmul(
        x.im().bare().mag(),
        RoundDirection::Up,
        RoundingPolicy::Correct,
    );
    re2.radd(im2, RoundDirection::Up, RoundingPolicy::Correct)
        .sqrt(RoundDirection::Up, RoundingPolicy::Correct)
}

pub fn norm1_complex<F: RoundedOps>(a: &Matrix<ComplexInterval<F>>) -> (F, bool) {
    let mut max_col = F::zero();
    let mut ng = false;
    for j in 0..a.cols() {
        let mut col_sum = F::zero();
        for i in 0..a.rows() {
            let cell = a.get(i, j);
            ng |= cell.re().ng() || cell.im().ng();
            col_sum = col_sum.radd(complex_mag(cell), RoundDirection::Up, RoundingPolicy::Correct);
        }
        max_col = max_col.max_raw(col_sum);
    }
    (max_col, ng)
}

pub fn norm_inf_complex<F: RoundedOps>(a: &Matrix<ComplexInterval<F>>) -> (F, bool) {
    let mut max_row = F::zero();
    let mut ng = false;
    for i in 0..a.rows() {
        let mut row_sum = F::zero();
        for j in 0..a.cols() {
            let cell = a.get(i, j);
            ng |= cell.re().ng() || cell.im().ng();
            row_sum = row_sum.radd(complex_mag(cell), RoundDirection::Up, RoundingPolicy::Correct);
        }
        max_row = max_row.max_raw(row_sum);
    }
    (max_row, ng)
}

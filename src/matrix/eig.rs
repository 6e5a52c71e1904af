/*!
Verified eigenvalue enclosure via a Gershgorin disc argument after
similarity refinement.

The non-verified scratch solve (`nalgebra::linalg::Schur`) only needs to
produce *some* invertible similarity transform `V` — Gershgorin's
argument is sound for any such `V`, not just one that diagonalizes `A`
exactly; a better-conditioned `V` only makes the resulting disc radii
tighter. This crate uses the orthogonal Schur vector matrix directly as
`V` rather than further block-diagonalizing each complex-conjugate 2x2
Schur block, trading some tightness for a substantially simpler
implementation (recorded in DESIGN.md).
*/

use crate::complex::ComplexInterval;
use crate::error::Result;
use crate::interval::Interval;
use crate::matrix::{matinv, matmul, Matrix};
use crate::ops::{RoundedOps, RoundingPolicy};
use crate::round::RoundDirection;

use nalgebra::{Complex, DMatrix};
use tracing::warn;

/// One enclosed eigenvalue: either collapsed to a real interval by
/// [`fold_conjugate`], or left as a genuine complex-interval enclosure.
#[derive(Clone, Copy, Debug)]
pub enum Eigenvalue<F> {
    Real(Interval<F>),
    Complex(ComplexInterval<F>),
}

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

/// Enclosed eigenvalues of a square real interval matrix.
pub fn solve<F: RoundedOps>(
    a: &Matrix<Interval<F>>,
    mode: matmul::Mode,
) -> Result<Vec<Eigenvalue<F>>> {
    let policy = RoundingPolicy::Correct;
    let n = a.rows();
    if a.cols() != n {
        return Err(crate::error::Error::dimension_mismatch((n, n), a.shape()));
    }

    let mid_f64: Vec<f64> = (0..n * n)
        .map(|idx| a.get(idx / n, idx % n).bare().midpoint().to_f64_lossy())
        .collect();
    let mid_mat = DMatrix::from_row_slice(n, n, &mid_f64);

    let schur = nalgebra::linalg::Schur::new(mid_mat.clone());
    let mid_lambda_vec = schur.complex_eigenvalues();
    let (q, _t) = schur.unpack();

    let mid_a_c = mid_mat.map(|x| Complex::new(x, 0.0));
    let mid_v_c = q.map(|x| Complex::new(x, 0.0));
    let lambda_diag = DMatrix::from_fn(n, n, |i, j| {
        if i == j {
            mid_lambda_vec[i]
        } else {
            Complex::new(0.0, 0.0)
        }
    });

    // Refinement step: midλ += diag(V \ (A·V - V·Λ)).
    let rhs = &mid_a_c * &mid_v_c - &mid_v_c * &lambda_diag;
    let refined_lambda: Vec<Complex<f64>> = match mid_v_c.clone().lu().solve(&rhs) {
        Some(correction) => (0..n).map(|i| mid_lambda_vec[i] + correction[(i, i)]).collect(),
        None => (0..n).map(|i| mid_lambda_vec[i]).collect(),
    };

    let lambda_mat: Matrix<ComplexInterval<F>> = Matrix::from_fn(n, n, |i, j| {
        if i == j {
            let c = refined_lambda[i];
            ComplexInterval::new(
                Interval::singleton(F::from_f64_lossy(c.re)),
                Interval::singleton(F::from_f64_lossy(c.im)),
            )
        } else {
            ComplexInterval::new(Interval::singleton(F::zero()), Interval::singleton(F::zero()))
        }
    });
    let v_mat: Matrix<ComplexInterval<F>> = Matrix::from_fn(n, n, |i, j| {
        ComplexInterval::new(
            Interval::singleton(F::from_f64_lossy(mid_v_c[(i, j)].re)),
            Interval::singleton(F::from_f64_lossy(mid_v_c[(i, j)].im)),
        )
    });
    let a_complex: Matrix<ComplexInterval<F>> =
        Matrix::from_fn(n, n, |i, j| ComplexInterval::real(*a.get(i, j)));

    // Iterate once: V <- Λ + inv(V)(A·V - V·Λ), yielding a nearly
    // block-diagonal matrix B.
    let v_inv = matinv::complex(&v_mat)?;
    let av = matmul::complex(&a_complex, &v_mat, mode, policy)?;
    let v_lambda = matmul::complex(&v_mat, &lambda_mat, mode, policy)?;
    let diff = Matrix::from_fn(n, n, |i, j| av.get(i, j).sub(v_lambda.get(i, j), policy));
    let correction = matmul::complex(&v_inv, &diff, mode, policy)?;
    let b = Matrix::from_fn(n, n, |i, j| lambda_mat.get(i, j).add(correction.get(i, j), policy));

    // Gershgorin discs: λ_i ∈ diag(B)[i] ± Σ_{j≠i} mag(B[j,i]), enclosed here as the axis-aligned box around that disc.
    let mut raw: Vec<ComplexInterval<F>> = Vec::with_capacity(n);
    for i in 0..n {
        let mut radius = F::zero();
        for j in 0..n {
            if j != i {
                radius = radius.radd(complex_mag(b.get(j, i)), RoundDirection::Up, policy);
            }
        }
        let center = *b.get(i, i);
        let re = center.re().bare();
        let im = center.im().bare();
        let re_box = crate::bare_interval::BareInterval::from_bounds(
            re.lo().rsub(radius, RoundDirection::Down, policy),
            re.hi().radd(radius, RoundDirection::Up, policy),
        )
        .unwrap_or_else(|_| crate::bare_interval::BareInterval::entire());
        let im_box = crate::bare_interval::BareInterval::from_bounds(
            im.lo().rsub(radius, RoundDirection::Down, policy),
            im.hi().radd(radius, RoundDirection::Up, policy),
        )
        .unwrap_or_else(|_| crate::bare_interval::BareInterval::entire());
        let ng = center.re().ng() || center.im().ng();
        raw.push(ComplexInterval::new(
            Interval::from_parts(re_box, crate::decoration::Decoration::Com, ng),
            Interval::from_parts(im_box, crate::decoration::Decoration::Com, ng),
        ));
    }

    for i in 0..raw.len() {
        for j in (i + 1)..raw.len() {
            if intervals_overlap(raw[i].re().bare(), raw[j].re().bare())
                && intervals_overlap(raw[i].im().bare(), raw[j].im().bare())
            {
                warn!(
                    "eig: Gershgorin discs {i} and {j} overlap; per-eigenvalue identification is not guaranteed"
                );
            }
        }
    }

    let spectral_magnitude = raw
        .iter()
        .map(complex_mag)
        .fold(F::zero(), |m, x| if x > m { x } else { m });
    let tol = fold_tolerance::<F>(spectral_magnitude);

    Ok(fold_conjugate(raw, tol))
}

/// `sqrt(eps) * spectral_magnitude`: the radius below which a merged
/// imaginary interval straddling zero is taken as numerical noise from the
/// non-verified Schur solve rather than a genuine nonzero imaginary part.
/// `eps` is derived from `F::PRECISION` (the ULP at 1) rather than
/// hardcoded, so it tracks whichever bound type `F` is instantiated with.
fn fold_tolerance<F: RoundedOps>(spectral_magnitude: F) -> F {
    let eps = 2f64.powi(-(F::PRECISION as i32 - 1));
    F::from_f64_lossy(eps.sqrt() * spectral_magnitude.to_f64_lossy())
}

/// Collapses near-conjugate eigenvalue-interval pairs for a real input
/// matrix: for each value, locate others whose
/// conjugate is not disjoint from it, intersect the two, and if the
/// intersection's imaginary part collapses to an interval that both
/// straddles zero and has radius below `tol`, report just the real part.
fn fold_conjugate<F: RoundedOps>(values: Vec<ComplexInterval<F>>, tol: F) -> Vec<Eigenvalue<F>> {
    let n = values.len();
    let mut folded = vec![false; n];
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        if folded[i] {
            continue;
        }
        let vi = values[i];
        let conj_i = vi.conj();
        let mut best: Option<usize> = None;
        for j in (i + 1)..n {
            if folded[j] {
                continue;
            }
            if intervals_overlap(conj_i.re().bare(), values[j].re().bare())
                && intervals_overlap(conj_i.im().bare(), values[j].im().bare())
            {
                best = Some(j);
                break;
            }
        }
        match best {
            Some(j) => {
                folded[j] = true;
                let merged_re = vi.re().hull(values[j].re());
                let merged_im_candidate = conj_i.im().hull(values[j].im());
                if merged_im_candidate.bare().straddles_zero()
                    && merged_im_candidate.bare().radius() <= tol
                {
                    out.push(Eigenvalue::Real(merged_re));
                } else {
                    out.push(Eigenvalue::Complex(ComplexInterval::new(merged_re, *vi.im())));
                }
            }
            None => {
                if vi.im().bare().straddles_zero() && vi.im().bare().radius() <= tol {
                    out.push(Eigenvalue::Real(vi.re()));
                } else {
                    out.push(Eigenvalue::Complex(vi));
                }
            }
        }
    }
    out
}

fn intervals_overlap<F: RoundedOps>(
    a: &crate::bare_interval::BareInterval<F>,
    b: &crate::bare_interval::BareInterval<F>,
) -> bool {
    !a.is_empty() && !b.is_empty() && a.lo() <= b.hi() && b.lo() <= a.hi()
}

/*!
Verified matrix multiplication: a naive triple-loop kernel and Rump's
midpoint-radius kernel, each available for real (`Interval<F>`) and
complex (`ComplexInterval<F>`) matrices.
*/

use crate::complex::ComplexInterval;
use crate::error::Result;
use crate::interval::Interval;
use crate::matrix::Matrix;
use crate::ops::{RoundedOps, RoundingPolicy};
use crate::round::RoundDirection;
use tracing::trace;

/// Matrix-multiply algorithm selector (mirrors [`crate::config::MatMulMode`],
/// duplicated here so this module has no dependency on `Config` itself —
/// callers read the mode out of their `&Config` and pass it down).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Slow,
    Fast,
}

/// Triple loop; each accumulator is built by fused interval multiply-add
/// on `BareInterval`-backed arithmetic. `O(mnp)` interval ops, tight but
/// slow.
pub fn naive_real<F: RoundedOps>(
    a: &Matrix<Interval<F>>,
    b: &Matrix<Interval<F>>,
    policy: RoundingPolicy,
) -> Result<Matrix<Interval<F>>> {
    a.check_matmul_shape(b)?;
    let (m, p) = a.shape();
    let n = b.cols();
    Ok(Matrix::from_fn(m, n, |i, j| {
        let mut acc = Interval::singleton(F::zero());
        for k in 0..p {
            let term = a.get(i, k).mul(b.get(k, j), policy);
            acc = acc.add(&term, policy);
        }
        acc
    }))
}

/// Extracts the elementwise midpoint matrix (plain `F`, no decoration/NG).
fn midpoints<F: RoundedOps>(a: &Matrix<Interval<F>>) -> Vec<F> {
    (0..a.rows() * a.cols())
        .map(|idx| {
            let (i, j) = (idx / a.cols(), idx % a.cols());
            a.get(i, j).bare().midpoint()
        })
        .collect()
}

/// Extracts the elementwise radius matrix (plain `F`, rounded up — a valid
/// overestimate of the half-width).
fn radii<F: RoundedOps>(a: &Matrix<Interval<F>>) -> Vec<F> {
    (0..a.rows() * a.cols())
        .map(|idx| {
            let (i, j) = (idx / a.cols(), idx % a.cols());
            a.get(i, j).bare().radius()
        })
        .collect()
}

fn abs_all<F: RoundedOps>(v: &[F]) -> Vec<F> {
    v.iter().map(|x| x.abs()).collect()
}

fn add_all<F: RoundedOps>(a: &[F], b: &[F], dir: RoundDirection, policy: RoundingPolicy) -> Vec<F> {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| x.radd(y, dir, policy))
        .collect()
}

/// Plain-float (no decoration/NG) matrix multiply with a single directed
/// rounding applied throughout, parallelized over row bands with a
/// thread-per-band model: row bands rather than column bands, since `out`
/// is row-major and `chunks_mut` then hands each thread a contiguous,
/// non-overlapping slice with no unsafe code. Accumulation is left-to-right
/// within each output cell, so results are deterministic regardless of how
/// many bands run.
fn float_matmul_dir<F: RoundedOps>(
    a: &[F],
    m: usize,
    p: usize,
    b: &[F],
    n: usize,
    dir: RoundDirection,
    policy: RoundingPolicy,
) -> Vec<F> {
    let mut out = vec![F::zero(); m * n];
    let threads = std::thread::available_parallelism()
        .map(|t| t.get())
        .unwrap_or(1)
        .min(m.max(1));
    let band_rows = m.div_ceil(threads.max(1)).max(1);

    std::thread::scope(|scope| {
        for (band_idx, out_band) in out.chunks_mut(band_rows * n).enumerate() {
            let row_start = band_idx * band_rows;
            let a = &a;
            let b = &b;
            scope.spawn(move || {
                let rows_in_band = out_band.len() / n;
                for bi in 0..rows_in_band {
                    let i = row_start + bi;
                    for j in 0..n {
                        let mut acc = F::zero();
                        for k in 0..p {
                            acc = a[i * p + k].rfma(b[k * n + j], acc, dir, policy);
                        }
                        out_band[bi * n + j] = acc;
                    }
                }
            });
        }
    });
    out
}

/// Rump's midpoint-radius verified matrix multiply.
/// Three float matmuls (two for the midpoint product, one for the radius
/// bound) replace the `O(mnp)` interval-arithmetic inner loop with
/// `O(mnp)` scalar float multiplies, a roughly 3x constant over one plain
/// float matmul rather than the much larger interval-op constant of the
/// naive path.
pub fn rump_real<F: RoundedOps>(
    a: &Matrix<Interval<F>>,
    b: &Matrix<Interval<F>>,
    policy: RoundingPolicy,
) -> Result<Matrix<Interval<F>>> {
    a.check_matmul_shape(b)?;
    let (m, p) = a.shape();
    let n = b.cols();

    let m_a = midpoints(a);
    let r_a = radii(a);
    let m_b = midpoints(b);
    let r_b = radii(b);

    let mid_down = float_matmul_dir(&m_a, m, p, &m_b, n, RoundDirection::Down, policy);
    let mid_up = float_matmul_dir(&m_a, m, p, &m_b, n, RoundDirection::Up, policy);

    let abs_m_a = abs_all(&m_a);
    let abs_m_b = abs_all(&m_b);
    let abs_m_b_plus_r_b = add_all(&abs_m_b, &r_b, RoundDirection::Up, policy);

    let rad_term1 = float_matmul_dir(&abs_m_a, m, p, &r_b, n, RoundDirection::Up, policy);
    let rad_term2 = float_matmul_dir(&r_a, m, p, &abs_m_b_plus_r_b, n, RoundDirection::Up, policy);
    let rad = add_all(&rad_term1, &rad_term2, RoundDirection::Up, policy);

    Ok(Matrix::from_fn(m, n, |i, j| {
        let (nai, mut decoration, ng) = cell_provenance(a, b, i, j);
        if nai {
            return Interval::nai();
        }
        let idx = i * n + j;
        let lo = mid_down[idx].rsub(rad[idx], RoundDirection::Down, policy);
        let hi = mid_up[idx].radd(rad[idx], RoundDirection::Up, policy);
        let bare = crate::bare_interval::BareInterval::from_bounds(lo, hi)
            .unwrap_or_else(|_| crate::bare_interval::BareInterval::entire());
        if bare.is_empty() {
            decoration = decoration.min(crate::decoration::Decoration::Trv);
        } else if !bare.is_bounded() {
            decoration = decoration.min(crate::decoration::Decoration::Dac);
        }
        Interval::from_parts(bare, decoration, ng)
    }))
}

/// Scans the contributing row of `a` and column of `b` behind output cell
/// `(i, j)`: whether any contributor is NaI, the weakest decoration among
/// them, and whether any carries the NG flag. Used to derive `rump_real`'s
/// per-cell decoration/NG/NaI the same way `Interval::combine` derives them
/// for a single scalar operation, since the midpoint-radius decomposition
/// bypasses `Interval::mul`/`add` entirely.
fn cell_provenance<F: RoundedOps>(
    a: &Matrix<Interval<F>>,
    b: &Matrix<Interval<F>>,
    i: usize,
    j: usize,
) -> (bool, crate::decoration::Decoration, bool) {
    let mut nai = false;
    let mut decoration = crate::decoration::Decoration::Com;
    let mut ng = false;
    for k in 0..a.cols() {
        let ac = a.get(i, k);
        let bc = b.get(k, j);
        nai = nai || ac.is_nai() || bc.is_nai();
        decoration = decoration.min(ac.decoration()).min(bc.decoration());
        ng = ng || ac.ng() || bc.ng();
    }
    (nai, decoration, ng)
}

/// Dispatches on [`Mode`].
pub fn real<F: RoundedOps>(
    a: &Matrix<Interval<F>>,
    b: &Matrix<Interval<F>>,
    mode: Mode,
    policy: RoundingPolicy,
) -> Result<Matrix<Interval<F>>> {
    trace!(?mode, shape = ?a.shape(), "matmul: dispatching");
    match mode {
        Mode::Slow => naive_real(a, b, policy),
        Mode::Fast => rump_real(a, b, policy),
    }
}

fn real_part<F: RoundedOps>(a: &Matrix<ComplexInterval<F>>) -> Matrix<Interval<F>> {
    a.map(|x| *x.re())
}

fn imag_part<F: RoundedOps>(a: &Matrix<ComplexInterval<F>>) -> Matrix<Interval<F>> {
    a.map(|x| *x.im())
}

fn zip_to_complex<F: RoundedOps>(
    re: &Matrix<Interval<F>>,
    im: &Matrix<Interval<F>>,
) -> Matrix<ComplexInterval<F>> {
    Matrix::from_fn(re.rows(), re.cols(), |i, j| {
        ComplexInterval::new(*re.get(i, j), *im.get(i, j))
    })
}

/// `(Ar + iAi)(Br + iBi) = (ArBr − AiBi) + i(ArBi + AiBr)`: four real
/// matrix multiplies combined via a real-imaginary split, rather than
/// reimplementing Rump's decomposition a second time for complex operands.
pub fn complex<F: RoundedOps>(
    a: &Matrix<ComplexInterval<F>>,
    b: &Matrix<ComplexInterval<F>>,
    mode: Mode,
    policy: RoundingPolicy,
) -> Result<Matrix<ComplexInterval<F>>> {
    let (ar, ai) = (real_part(a), imag_part(a));
    let (br, bi) = (real_part(b), imag_part(b));

    let ar_br = real(&ar, &br, mode, policy)?;
    let ai_bi = real(&ai, &bi, mode, policy)?;
    let ar_bi = real(&ar, &bi, mode, policy)?;
    let ai_br = real(&ai, &br, mode, policy)?;

    let re = Matrix::from_fn(ar_br.rows(), ar_br.cols(), |i, j| {
        ar_br.get(i, j).sub(ai_bi.get(i, j), policy)
    });
    let im = Matrix::from_fn(ar_bi.rows(), ar_bi.cols(), |i, j| {
        ar_bi.get(i, j).add(ai_br.get(i, j), policy)
    });
    Ok(zip_to_complex(&re, &im))
}

/// `C := alpha * (A*B) + beta * c_prev`, with fast paths when `alpha`/`beta`
/// is exactly `0` or `1`.
pub fn gemm_real<F: RoundedOps>(
    alpha: &Interval<F>,
    a: &Matrix<Interval<F>>,
    b: &Matrix<Interval<F>>,
    beta: &Interval<F>,
    c_prev: &Matrix<Interval<F>>,
    mode: Mode,
    policy: RoundingPolicy,
) -> Result<Matrix<Interval<F>>> {
    let is_zero = |x: &Interval<F>| x.bare().lo() == F::zero() && x.bare().hi() == F::zero();
    let is_one = |x: &Interval<F>| x.bare().lo() == F::one() && x.bare().hi() == F::one();

    let scaled = if is_zero(alpha) {
        a.check_matmul_shape(b)?;
        Matrix::from_fn(a.rows(), b.cols(), |_, _| Interval::singleton(F::zero()))
    } else {
        let raw = real(a, b, mode, policy)?;
        if is_one(alpha) {
            raw
        } else {
            raw.map(|v| alpha.mul(v, policy))
        }
    };

    if is_zero(beta) {
        return Ok(scaled);
    }
    scaled.check_same_shape(c_prev)?;
    let scaled_prev = if is_one(beta) {
        c_prev.clone()
    } else {
        c_prev.map(|v| beta.mul(v, policy))
    };
    Ok(Matrix::from_fn(scaled.rows(), scaled.cols(), |i, j| {
        scaled.get(i, j).add(scaled_prev.get(i, j), policy)
    }))
}

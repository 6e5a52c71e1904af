use verinum::bare_interval::BareInterval;
use verinum::decoration::Decoration;
use verinum::matrix::{matmul, Matrix};
use verinum::ops::RoundingPolicy;
use verinum::Interval;

fn thin(x: f64) -> Interval<f64> {
    Interval::singleton(x)
}

#[test]
fn rump_ones_matrix_squared_is_exact() {
    let ones = Matrix::from_rows(vec![vec![thin(1.0), thin(1.0)], vec![thin(1.0), thin(1.0)]])
        .unwrap();
    let c = matmul::rump_real(&ones, &ones, RoundingPolicy::Correct).unwrap();
    for i in 0..2 {
        for j in 0..2 {
            assert_eq!(c.get(i, j).bare().lo(), 2.0);
            assert_eq!(c.get(i, j).bare().hi(), 2.0);
        }
    }
}

#[test]
fn naive_and_rump_agree_on_exact_integers() {
    let a = Matrix::from_rows(vec![vec![thin(1.0), thin(2.0)], vec![thin(3.0), thin(4.0)]])
        .unwrap();
    let b = Matrix::from_rows(vec![vec![thin(5.0), thin(6.0)], vec![thin(7.0), thin(8.0)]])
        .unwrap();
    let naive = matmul::naive_real(&a, &b, RoundingPolicy::Correct).unwrap();
    let rump = matmul::rump_real(&a, &b, RoundingPolicy::Correct).unwrap();
    for i in 0..2 {
        for j in 0..2 {
            assert_eq!(naive.get(i, j).bare().lo(), rump.get(i, j).bare().lo());
            assert_eq!(naive.get(i, j).bare().hi(), rump.get(i, j).bare().hi());
        }
    }
}

#[test]
fn enclosure_over_uncertain_entries() {
    let a_entry = Interval::from_bounds(0.99, 1.01).unwrap();
    let a = Matrix::from_rows(vec![vec![a_entry, thin(0.0)], vec![thin(0.0), a_entry]]).unwrap();
    let b = a.clone();
    let c = matmul::rump_real(&a, &b, RoundingPolicy::Correct).unwrap();
    // every real M in A, N in B must satisfy (MN)[0][0] in C[0][0];
    // 1.0*1.0 = 1.0 is one such instance.
    let cell = c.get(0, 0);
    assert!(cell.bare().lo() <= 1.0 && cell.bare().hi() >= 1.0);
}

#[test]
fn dimension_mismatch_is_rejected() {
    let a = Matrix::from_rows(vec![vec![thin(1.0), thin(2.0), thin(3.0)]]).unwrap();
    let b = Matrix::from_rows(vec![vec![thin(1.0)]]).unwrap();
    assert!(matmul::naive_real(&a, &b, RoundingPolicy::Correct).is_err());
}

#[test]
fn gemm_fast_paths_alpha_zero_beta_one() {
    let a = Matrix::from_rows(vec![vec![thin(1.0)]]).unwrap();
    let b = Matrix::from_rows(vec![vec![thin(1.0)]]).unwrap();
    let c_prev = Matrix::from_rows(vec![vec![thin(5.0)]]).unwrap();
    let zero = Interval::singleton(0.0);
    let one = Interval::singleton(1.0);
    let out = matmul::gemm_real(
        &zero,
        &a,
        &b,
        &one,
        &c_prev,
        matmul::Mode::Fast,
        RoundingPolicy::Correct,
    )
    .unwrap();
    assert_eq!(out.get(0, 0).bare().lo(), 5.0);
    assert_eq!(out.get(0, 0).bare().hi(), 5.0);
}

#[test]
fn gemm_alpha_zero_derives_output_shape_from_a_b_without_computing_their_product() {
    // a (1x2) * b (2x3) is conformable, so the alpha=0 fast path still has
    // to honor that shape constraint for the output — but must do so
    // without spending the O(mnp) work on a product it's about to discard.
    let a = Matrix::from_rows(vec![vec![thin(1.0), thin(1.0)]]).unwrap();
    let b = Matrix::from_rows(vec![
        vec![thin(1.0), thin(2.0), thin(3.0)],
        vec![thin(1.0), thin(2.0), thin(3.0)],
    ])
    .unwrap();
    let c_prev = Matrix::from_rows(vec![vec![thin(5.0), thin(6.0), thin(7.0)]]).unwrap();
    let zero = Interval::singleton(0.0);
    let one = Interval::singleton(1.0);
    let out =
        matmul::gemm_real(&zero, &a, &b, &one, &c_prev, matmul::Mode::Fast, RoundingPolicy::Correct)
            .unwrap();
    for j in 0..3 {
        assert_eq!(out.get(0, j).bare().lo(), c_prev.get(0, j).bare().lo());
        assert_eq!(out.get(0, j).bare().hi(), c_prev.get(0, j).bare().hi());
    }
}

#[test]
fn gemm_alpha_zero_still_rejects_nonconformable_a_b() {
    let a = Matrix::from_rows(vec![vec![thin(1.0), thin(1.0)]]).unwrap();
    let b = Matrix::from_rows(vec![vec![thin(1.0)], vec![thin(1.0)], vec![thin(1.0)]]).unwrap();
    let c_prev = Matrix::from_rows(vec![vec![thin(5.0), thin(6.0), thin(7.0)]]).unwrap();
    let zero = Interval::singleton(0.0);
    let one = Interval::singleton(1.0);
    assert!(matmul::gemm_real(
        &zero,
        &a,
        &b,
        &one,
        &c_prev,
        matmul::Mode::Fast,
        RoundingPolicy::Correct
    )
    .is_err());
}

#[test]
fn rump_real_propagates_nai_and_decoration_from_inputs() {
    let nai: Interval<f64> = Interval::nai();
    let a = Matrix::from_rows(vec![vec![nai, thin(1.0)]]).unwrap();
    let b = Matrix::from_rows(vec![vec![thin(1.0)], vec![thin(1.0)]]).unwrap();
    let c = matmul::rump_real(&a, &b, RoundingPolicy::Correct).unwrap();
    assert!(c.get(0, 0).is_nai());

    let ng_entry = thin(1.0).with_ng();
    let a2 = Matrix::from_rows(vec![vec![ng_entry, thin(1.0)]]).unwrap();
    let b2 = Matrix::from_rows(vec![vec![thin(1.0)], vec![thin(1.0)]]).unwrap();
    let c2 = matmul::rump_real(&a2, &b2, RoundingPolicy::Correct).unwrap();
    assert!(c2.get(0, 0).ng());

    let unbounded_entry = Interval::entire();
    let a3 = Matrix::from_rows(vec![vec![unbounded_entry, thin(1.0)]]).unwrap();
    let b3 = Matrix::from_rows(vec![vec![thin(1.0)], vec![thin(1.0)]]).unwrap();
    let c3 = matmul::rump_real(&a3, &b3, RoundingPolicy::Correct).unwrap();
    assert!(c3.get(0, 0).decoration() <= Decoration::Dac);
}

fn bare_singleton(x: f64) -> BareInterval<f64> {
    BareInterval::singleton(x)
}

#[test]
fn bare_interval_singleton_helper_is_thin() {
    let b = bare_singleton(2.0);
    assert_eq!(b.lo(), 2.0);
    assert_eq!(b.hi(), 2.0);
}

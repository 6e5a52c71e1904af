use verinum::matrix::eig::{solve, Eigenvalue};
use verinum::matrix::matmul::Mode;
use verinum::matrix::Matrix;
use verinum::Interval;

fn thin(x: f64) -> Interval<f64> {
    Interval::singleton(x)
}

fn widen(x: f64, r: f64) -> Interval<f64> {
    Interval::from_bounds(x - r, x + r).unwrap()
}

fn real_bounds(e: &Eigenvalue<f64>) -> (f64, f64) {
    match e {
        Eigenvalue::Real(i) => (i.bare().lo(), i.bare().hi()),
        Eigenvalue::Complex(c) => (c.re().bare().lo(), c.re().bare().hi()),
    }
}

#[test]
fn diagonal_matrix_encloses_its_own_entries() {
    let a = Matrix::from_rows(vec![
        vec![widen(2.0, 0.01), thin(0.0)],
        vec![thin(0.0), widen(3.0, 0.01)],
    ])
    .unwrap();
    let values = solve(&a, Mode::Fast).unwrap();
    assert_eq!(values.len(), 2);

    let mut saw_two = false;
    let mut saw_three = false;
    for v in &values {
        let (lo, hi) = real_bounds(v);
        if lo <= 2.0 && 2.0 <= hi {
            saw_two = true;
        }
        if lo <= 3.0 && 3.0 <= hi {
            saw_three = true;
        }
    }
    assert!(saw_two && saw_three);
}

#[test]
fn identity_matrix_eigenvalues_are_all_one() {
    let a = Matrix::from_rows(vec![vec![thin(1.0), thin(0.0)], vec![thin(0.0), thin(1.0)]])
        .unwrap();
    let values = solve(&a, Mode::Fast).unwrap();
    for v in &values {
        let (lo, hi) = real_bounds(v);
        assert!(lo <= 1.0 && 1.0 <= hi);
    }
}

#[test]
fn non_square_matrix_is_rejected() {
    let a = Matrix::from_rows(vec![vec![thin(1.0), thin(2.0), thin(3.0)]]).unwrap();
    assert!(solve(&a, Mode::Fast).is_err());
}

#[test]
fn genuine_complex_conjugate_pair_is_not_folded_to_real() {
    // [[0, -1], [1, 0]] has eigenvalues +-i: a well-separated conjugate
    // pair whose imaginary part is not numerical noise and must survive
    // as two `Complex` values, not be folded into a spurious real one.
    let a = Matrix::from_rows(vec![vec![thin(0.0), thin(-1.0)], vec![thin(1.0), thin(0.0)]])
        .unwrap();
    let values = solve(&a, Mode::Fast).unwrap();
    assert_eq!(values.len(), 2);
    let mut saw_complex = false;
    for v in &values {
        if let Eigenvalue::Complex(c) = v {
            saw_complex = true;
            assert!(c.im().bare().lo() <= 1.0 && 1.0 <= c.im().bare().hi());
        }
    }
    assert!(saw_complex, "well-separated +-i pair must not collapse to real");
}

use anyhow::Result;
use verinum::matrix::{matinv, matmul, Matrix};
use verinum::ops::RoundingPolicy;
use verinum::Interval;

fn thin(x: f64) -> Interval<f64> {
    Interval::singleton(x)
}

#[test]
fn identity_inverts_to_identity() {
    let id = Matrix::from_rows(vec![vec![thin(1.0), thin(0.0)], vec![thin(0.0), thin(1.0)]])
        .unwrap();
    let inv = matinv::real(&id).unwrap();
    assert!(!inv.get(0, 0).is_nai());
    assert!(!inv.get(0, 0).ng());

    let product = matmul::real(&id, &inv, matmul::Mode::Fast, RoundingPolicy::Correct).unwrap();
    for i in 0..2 {
        for j in 0..2 {
            let expected = if i == j { 1.0 } else { 0.0 };
            let cell = product.get(i, j).bare();
            assert!(cell.lo() <= expected && expected <= cell.hi());
        }
    }
}

#[test]
fn invertible_matrix_encloses_true_inverse() {
    // [[2, 0], [0, 4]], true inverse [[0.5, 0], [0, 0.25]].
    let a = Matrix::from_rows(vec![vec![thin(2.0), thin(0.0)], vec![thin(0.0), thin(4.0)]])
        .unwrap();
    let inv = matinv::real(&a).unwrap();
    assert!(!inv.get(0, 0).is_nai());
    let c00 = inv.get(0, 0).bare();
    let c11 = inv.get(1, 1).bare();
    assert!(c00.lo() <= 0.5 && 0.5 <= c00.hi());
    assert!(c11.lo() <= 0.25 && 0.25 <= c11.hi());
}

#[test]
fn singular_matrix_yields_nai() {
    let a = Matrix::from_rows(vec![vec![thin(1.0), thin(2.0)], vec![thin(2.0), thin(4.0)]])
        .unwrap();
    let inv = matinv::real(&a).unwrap();
    assert!(inv.get(0, 0).is_nai());
}

#[test]
fn non_square_matrix_is_rejected() {
    let a = Matrix::from_rows(vec![vec![thin(1.0), thin(2.0), thin(3.0)]]).unwrap();
    assert!(matinv::real(&a).is_err());
}

#[test]
fn inverse_of_inverse_encloses_the_original_matrix() -> Result<()> {
    let a = Matrix::from_rows(vec![vec![thin(2.0), thin(0.0)], vec![thin(0.0), thin(4.0)]])
        .unwrap();
    let inv = matinv::real(&a)?;
    let inv_inv = matinv::real(&inv)?;
    for i in 0..2 {
        for j in 0..2 {
            let expected = a.get(i, j).bare();
            let cell = inv_inv.get(i, j).bare();
            assert!(cell.lo() <= expected.lo() && expected.hi() <= cell.hi());
        }
    }
    Ok(())
}

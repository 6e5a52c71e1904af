/*!
Dense interval/complex-interval matrices and the verified linear-algebra
kernels over them.

`Matrix<T>` is a minimal row-major dense container — it is deliberately
*not* built on `nalgebra::DMatrix<T>`, since `nalgebra`'s generic
algorithms require `T: ComplexField`/`Scalar` (a field with inverses and
an ordering-free "zero" test), which `Interval`/`ComplexInterval` cannot
honestly implement: a zero-straddling interval has no multiplicative
inverse. `nalgebra` is instead used only internally, on the *non-verified*
plain-float scratch matrices each verified kernel needs.
*/

pub mod eig;
pub mod matinv;
pub mod matmul;
pub mod opnorm;

use crate::error::{Error, Result};

/// A row-major dense matrix of `T` (an `Interval<F>` or `ComplexInterval<F>`
/// scalar, in practice).
#[derive(Clone, Debug)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Matrix { rows, cols, data }
    }

    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        for r in &rows {
            if r.len() != ncols {
                return Err(Error::dimension_mismatch((nrows, ncols), (nrows, r.len())));
            }
        }
        let data = rows.into_iter().flatten().collect();
        Ok(Matrix {
            rows: nrows,
            cols: ncols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, i: usize, j: usize) -> &T {
        &self.data[i * self.cols + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.data[i * self.cols + j] = value;
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Matrix<U> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|x| f(x)).collect(),
        }
    }

    pub fn check_same_shape(&self, other: &Matrix<T>) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(Error::dimension_mismatch(self.shape(), other.shape()));
        }
        Ok(())
    }

    pub fn check_matmul_shape(&self, other: &Matrix<T>) -> Result<()> {
        if self.cols != other.rows {
            return Err(Error::dimension_mismatch(
                (self.rows, other.rows),
                (self.cols, other.rows),
            ));
        }
        Ok(())
    }
}

//! Expression-library adapter built on nalgebra's operator overloads.

use dg_dense::Matrix;
use nalgebra::DMatrix;

use crate::backend::GemmBackend;
use crate::error::Result;
use crate::policy::Accumulate;
use crate::scalar::GemmScalar;
use crate::shape::GemmShape;

/// GEMM backend that expresses the product with nalgebra operators.
#[derive(Debug, Clone, Copy)]
pub struct NalgebraBackend;

impl NalgebraBackend {
    pub fn new() -> Self {
        NalgebraBackend
    }
}

impl Default for NalgebraBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy a row-major matrix into nalgebra's column-major `DMatrix`.
pub fn to_dmatrix<T: GemmScalar>(m: &Matrix<T>) -> DMatrix<T> {
    DMatrix::from_row_slice(m.rows(), m.cols(), m.as_slice())
}

/// Copy a `DMatrix` back into a row-major matrix, resizing `dst` to fit.
pub fn from_dmatrix<T: GemmScalar>(src: &DMatrix<T>, dst: &mut Matrix<T>) {
    dst.resize(src.nrows(), src.ncols());
    for i in 0..src.nrows() {
        for j in 0..src.ncols() {
            dst[(i, j)] = src[(i, j)];
        }
    }
}

impl GemmBackend for NalgebraBackend {
    fn name(&self) -> &str {
        "nalgebra"
    }

    fn gemm<T: GemmScalar>(
        &self,
        shape: &GemmShape,
        a: &Matrix<T>,
        b: &Matrix<T>,
        c: &mut Matrix<T>,
        alpha: T,
        policy: Accumulate<T>,
    ) -> Result<()> {
        shape.check_operands("nalgebra gemm", a.shape(), b.shape(), c.shape())?;

        let a_op = if shape.contraction.transposes_a() {
            to_dmatrix(a).transpose()
        } else {
            to_dmatrix(a)
        };
        let b_op = if shape.contraction.transposes_b() {
            to_dmatrix(b).transpose()
        } else {
            to_dmatrix(b)
        };
        let product = (&a_op * &b_op) * alpha;

        let result = match policy {
            Accumulate::Overwrite => product,
            Accumulate::Add => {
                let mut acc = to_dmatrix(c);
                acc += &product;
                acc
            }
            Accumulate::Subtract => {
                let mut acc = to_dmatrix(c);
                acc -= &product;
                acc
            }
            Accumulate::Blend(beta) => to_dmatrix(c) * beta + product,
        };

        from_dmatrix(&result, c);
        Ok(())
    }
}

use dg_dense::Matrix;

use crate::backend::GemmBackend;
use crate::error::{GemmError, Result};
use crate::policy::Accumulate;
use crate::scalar::GemmScalar;
use crate::shape::GemmShape;

/// Pure-Rust triple-loop GEMM backend.
///
/// Implements all operations with straightforward loops optimized for
/// correctness rather than peak performance. Always available, and used as
/// the fallback whenever another engine cannot handle a scalar type.
#[derive(Debug, Clone, Copy)]
pub struct NaiveBackend;

impl NaiveBackend {
    pub fn new() -> Self {
        NaiveBackend
    }
}

impl Default for NaiveBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// `op(A)[i][p] · op(B)[p][j]` summed over `p`, read through strides.
#[inline]
fn contract<T: GemmScalar>(
    a: &[T],
    b: &[T],
    (a_rs, a_cs): (usize, usize),
    (b_rs, b_cs): (usize, usize),
    i: usize,
    j: usize,
    k: usize,
) -> T {
    let mut sum = T::zero();
    for p in 0..k {
        sum += a[i * a_rs + p * a_cs] * b[p * b_rs + j * b_cs];
    }
    sum
}

impl GemmBackend for NaiveBackend {
    fn name(&self) -> &str {
        "naive"
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
        shape.check_operands("naive gemm", a.shape(), b.shape(), c.shape())?;

        let a_strides = shape.a_strides(a.cols());
        let b_strides = shape.b_strides(b.cols());
        let (a, b) = (a.as_slice(), b.as_slice());
        let n = shape.n;
        let out = c.as_mut_slice();

        for i in 0..shape.m {
            for j in 0..n {
                let sum = contract(a, b, a_strides, b_strides, i, j, shape.k);
                let slot = &mut out[i * n + j];
                *slot = policy.apply(*slot, alpha * sum);
            }
        }
        Ok(())
    }

    fn supports_transposed_target(&self) -> bool {
        true
    }

    fn gemm_transposed_target<T: GemmScalar>(
        &self,
        shape: &GemmShape,
        a: &Matrix<T>,
        b: &Matrix<T>,
        c: &mut Matrix<T>,
        alpha: T,
        policy: Accumulate<T>,
    ) -> Result<()> {
        const OP: &str = "naive gemm (transposed target)";
        let (m, n) = shape.output();
        shape.check_operands(OP, a.shape(), b.shape(), (m, n))?;
        if c.shape() != (n, m) {
            return Err(GemmError::OutputShape {
                op: OP,
                expected: (n, m),
                actual: c.shape(),
            });
        }

        let a_strides = shape.a_strides(a.cols());
        let b_strides = shape.b_strides(b.cols());
        let (a, b) = (a.as_slice(), b.as_slice());
        let out = c.as_mut_slice();

        for i in 0..m {
            for j in 0..n {
                let sum = contract(a, b, a_strides, b_strides, i, j, shape.k);
                let slot = &mut out[j * m + i];
                *slot = policy.apply(*slot, alpha * sum);
            }
        }
        Ok(())
    }
}

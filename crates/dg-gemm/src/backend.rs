use std::fmt::Debug;

use dg_dense::Matrix;

use crate::error::{GemmError, Result};
use crate::policy::Accumulate;
use crate::scalar::GemmScalar;
use crate::shape::GemmShape;

/// Trait for interchangeable GEMM engines (naive loops, nalgebra, BLAS).
///
/// Backends receive a problem whose shape has already been inferred and
/// validated, with the output matrix already sized to `shape.output()`.
/// They compute `C ← policy(C, α·op(A)·op(B))` and must not touch C when
/// they return an error.
pub trait GemmBackend: Send + Sync + Debug + Default {
    /// Returns the name of this backend (e.g., "naive", "blas").
    fn name(&self) -> &str;

    /// General matrix multiply: `C ← policy(C, α·op(A)·op(B))`.
    ///
    /// - `a`: stored shape `shape.a_shape()`
    /// - `b`: stored shape `shape.b_shape()`
    /// - `c`: shape `shape.output()`
    fn gemm<T: GemmScalar>(
        &self,
        shape: &GemmShape,
        a: &Matrix<T>,
        b: &Matrix<T>,
        c: &mut Matrix<T>,
        alpha: T,
        policy: Accumulate<T>,
    ) -> Result<()>;

    /// Whether [`gemm_transposed_target`](Self::gemm_transposed_target) is implemented.
    fn supports_transposed_target(&self) -> bool {
        false
    }

    /// Like [`gemm`](Self::gemm) but writes the result transposed:
    /// `Cᵗ ← policy(Cᵗ, α·op(A)·op(B))`, with `c` shaped `(n, m)`.
    ///
    /// Backends that cannot do this report `UnsupportedOperation`.
    fn gemm_transposed_target<T: GemmScalar>(
        &self,
        _shape: &GemmShape,
        _a: &Matrix<T>,
        _b: &Matrix<T>,
        _c: &mut Matrix<T>,
        _alpha: T,
        _policy: Accumulate<T>,
    ) -> Result<()> {
        Err(GemmError::UnsupportedOperation {
            backend: self.name().to_string(),
            op: "gemm into transposed target",
        })
    }
}

// Links the BLAS provider selected through blas-src.
extern crate blas_src;

use std::any::Any;

use cblas_sys::{cblas_dgemm, cblas_sgemm, CBLAS_LAYOUT, CBLAS_TRANSPOSE};
use dg_dense::Matrix;
use tracing::debug;

use super::params::{BlasParams, BlasTranspose};
use crate::backend::GemmBackend;
use crate::error::{GemmError, Result};
use crate::naive::NaiveBackend;
use crate::policy::Accumulate;
use crate::scalar::GemmScalar;
use crate::shape::GemmShape;

/// GEMM backend that hands real-valued problems to CBLAS.
///
/// Operands are copied into owned flat buffers, multiplied by `sgemm` or
/// `dgemm` in row-major layout, and the result buffer is copied back into
/// the output matrix. The buffers are dropped on every return path.
/// Complex scalars are not marshaled; they go to [`NaiveBackend`].
#[derive(Debug, Clone, Copy)]
pub struct BlasBackend;

impl BlasBackend {
    pub fn new() -> Self {
        BlasBackend
    }
}

impl Default for BlasBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// `BlasParams` narrowed to the 32-bit integers of the CBLAS interface.
struct BlasDims {
    m: i32,
    n: i32,
    k: i32,
    lda: i32,
    ldb: i32,
    ldc: i32,
}

impl BlasDims {
    fn narrow(p: &BlasParams) -> Result<Self> {
        let narrow = |v: usize| {
            i32::try_from(v).map_err(|_| GemmError::UnsupportedOperation {
                backend: "blas".to_string(),
                op: "gemm with dimensions beyond i32",
            })
        };
        Ok(BlasDims {
            m: narrow(p.m)?,
            n: narrow(p.n)?,
            k: narrow(p.k)?,
            lda: narrow(p.lda)?,
            ldb: narrow(p.ldb)?,
            ldc: narrow(p.ldc)?,
        })
    }
}

fn cblas_flag(t: BlasTranspose) -> CBLAS_TRANSPOSE {
    match t {
        BlasTranspose::NoTrans => CBLAS_TRANSPOSE::CblasNoTrans,
        BlasTranspose::Trans => CBLAS_TRANSPOSE::CblasTrans,
    }
}

/// Real scalars with a native CBLAS routine.
trait BlasReal: GemmScalar {
    /// # Safety
    /// Buffer lengths must match the dimensions in `p`.
    unsafe fn gemm(
        p: &BlasParams,
        d: &BlasDims,
        alpha: Self,
        a: &[Self],
        b: &[Self],
        beta: Self,
        c: &mut [Self],
    );
}

impl BlasReal for f64 {
    unsafe fn gemm(
        p: &BlasParams,
        d: &BlasDims,
        alpha: f64,
        a: &[f64],
        b: &[f64],
        beta: f64,
        c: &mut [f64],
    ) {
        cblas_dgemm(
            CBLAS_LAYOUT::CblasRowMajor,
            cblas_flag(p.trans_a),
            cblas_flag(p.trans_b),
            d.m,
            d.n,
            d.k,
            alpha,
            a.as_ptr(),
            d.lda,
            b.as_ptr(),
            d.ldb,
            beta,
            c.as_mut_ptr(),
            d.ldc,
        );
    }
}

impl BlasReal for f32 {
    unsafe fn gemm(
        p: &BlasParams,
        d: &BlasDims,
        alpha: f32,
        a: &[f32],
        b: &[f32],
        beta: f32,
        c: &mut [f32],
    ) {
        cblas_sgemm(
            CBLAS_LAYOUT::CblasRowMajor,
            cblas_flag(p.trans_a),
            cblas_flag(p.trans_b),
            d.m,
            d.n,
            d.k,
            alpha,
            a.as_ptr(),
            d.lda,
            b.as_ptr(),
            d.ldb,
            beta,
            c.as_mut_ptr(),
            d.ldc,
        );
    }
}

/// Marshal, call the engine, copy back.
fn gemm_real<R: BlasReal>(
    shape: &GemmShape,
    a: &Matrix<R>,
    b: &Matrix<R>,
    c: &mut Matrix<R>,
    alpha: R,
    beta: R,
) -> Result<()> {
    let params = BlasParams::derive(shape);
    if params.is_noop() {
        return Ok(());
    }
    let dims = BlasDims::narrow(&params)?;

    let a_buf = a.to_flat();
    let b_buf = b.to_flat();
    let mut c_buf = c.to_flat();

    // Safety: check_operands has matched every buffer to the shape.
    unsafe { R::gemm(&params, &dims, alpha, &a_buf, &b_buf, beta, &mut c_buf) };

    c.import_flat(&c_buf, params.m, params.n)?;
    Ok(())
}

/// Run the problem through BLAS if `T` is the real type `R`.
///
/// Returns `None` when `T` is some other scalar type.
fn try_real<T: GemmScalar, R: BlasReal>(
    shape: &GemmShape,
    a: &Matrix<T>,
    b: &Matrix<T>,
    c: &mut Matrix<T>,
    alpha: T,
    beta: T,
) -> Option<Result<()>> {
    let a = (a as &dyn Any).downcast_ref::<Matrix<R>>()?;
    let b = (b as &dyn Any).downcast_ref::<Matrix<R>>()?;
    let alpha = *(&alpha as &dyn Any).downcast_ref::<R>()?;
    let beta = *(&beta as &dyn Any).downcast_ref::<R>()?;
    let c = (c as &mut dyn Any).downcast_mut::<Matrix<R>>()?;
    Some(gemm_real(shape, a, b, c, alpha, beta))
}

impl GemmBackend for BlasBackend {
    fn name(&self) -> &str {
        "blas"
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
        shape.check_operands("blas gemm", a.shape(), b.shape(), c.shape())?;

        if T::KIND.is_blas_native() {
            let (alpha_eff, beta_eff) = policy.gemm_coefficients(alpha);
            if let Some(done) = try_real::<T, f64>(shape, a, b, c, alpha_eff, beta_eff) {
                return done;
            }
            if let Some(done) = try_real::<T, f32>(shape, a, b, c, alpha_eff, beta_eff) {
                return done;
            }
        }

        debug!(kind = %T::KIND, "no BLAS routine for scalar kind, using naive kernel");
        NaiveBackend::new().gemm(shape, a, b, c, alpha, policy)
    }
}

//! `dg-gemm` - GEMM abstraction layer for dense-gemm.
//!
//! This crate provides:
//! - `multiply` / `transpose_multiply` with shape-inferred contractions
//! - β-driven accumulation (overwrite, add, subtract, blend)
//! - A `GemmBackend` trait with naive, nalgebra and BLAS implementations
//! - Matrix-vector helpers (`apply`, `apply_transpose`, ...)
//!
//! The backend behind the plain entry points is chosen by cargo features,
//! see [`dispatch`].

pub mod backend;
pub mod blas;
pub mod dispatch;
pub mod error;
pub mod expr;
pub mod matvec;
pub mod naive;
pub mod policy;
pub mod scalar;
pub mod shape;

// Re-export primary types at the crate root for convenience.
pub use backend::GemmBackend;
#[cfg(feature = "blas")]
pub use blas::BlasBackend;
pub use blas::{BlasParams, BlasTranspose};
pub use dispatch::{
    multiply, multiply_aba, multiply_aba_with, multiply_with, transpose_multiply,
    transpose_multiply_into_transposed, transpose_multiply_into_transposed_with,
    transpose_multiply_with, ActiveBackend, BackendKind, ACTIVE_BACKEND,
};
pub use error::{GemmError, Result};
pub use expr::{from_dmatrix, to_dmatrix, NalgebraBackend};
pub use matvec::{accumulate_into, apply, apply_range, apply_transpose, transpose_add_into};
pub use naive::NaiveBackend;
pub use policy::Accumulate;
pub use scalar::GemmScalar;
pub use shape::{classify_multiply, classify_transpose_multiply, Contraction, GemmShape};

pub use dg_dense::{Complex32, Complex64, Matrix, Scalar, ScalarKind, Vector};

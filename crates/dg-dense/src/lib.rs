//! `dg-dense` - Dense containers for dense-gemm.
//!
//! This crate provides:
//! - A row-major `Matrix<T>` with flat-buffer import/export
//! - A 1-D `Vector<T>` with element-wise arithmetic and dot products
//! - The `Scalar` trait covering f32, f64 and their complex counterparts
//! - A `ScalarKind` tag used by backends to decide what they can handle

pub mod error;
pub mod matrix;
pub mod scalar;
pub mod vector;

// Re-export primary types at the crate root for convenience.
pub use error::{DenseError, Result};
pub use matrix::Matrix;
pub use num_complex::{Complex32, Complex64};
pub use scalar::{Scalar, ScalarKind};
pub use vector::{dot_slices, Vector};

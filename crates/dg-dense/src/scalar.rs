use std::fmt::{self, Debug};
use std::ops::Neg;

use num_complex::{Complex32, Complex64};
use num_traits::NumAssign;

/// Element types a dense container can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// 32-bit floating point.
    F32,
    /// 64-bit floating point.
    F64,
    /// Complex number with 32-bit real and imaginary parts.
    C32,
    /// Complex number with 64-bit real and imaginary parts.
    C64,
}

impl ScalarKind {
    /// Returns the size in bytes of a single element.
    ///
    /// - F32: 4 bytes
    /// - F64: 8 bytes
    /// - C32: 8 bytes (two f32)
    /// - C64: 16 bytes (two f64)
    pub fn size_in_bytes(&self) -> usize {
        match self {
            ScalarKind::F32 => 4,
            ScalarKind::F64 | ScalarKind::C32 => 8,
            ScalarKind::C64 => 16,
        }
    }

    /// Returns true for the complex kinds.
    pub fn is_complex(&self) -> bool {
        matches!(self, ScalarKind::C32 | ScalarKind::C64)
    }

    /// Returns true if the real-valued BLAS routines (`sgemm`/`dgemm`) accept
    /// this kind directly.
    pub fn is_blas_native(&self) -> bool {
        matches!(self, ScalarKind::F32 | ScalarKind::F64)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::F32 => write!(f, "f32"),
            ScalarKind::F64 => write!(f, "f64"),
            ScalarKind::C32 => write!(f, "c32"),
            ScalarKind::C64 => write!(f, "c64"),
        }
    }
}

/// Element type stored in [`Matrix`](crate::Matrix) and [`Vector`](crate::Vector).
///
/// Implemented for `f32`, `f64`, `Complex32` and `Complex64`.
pub trait Scalar:
    Copy + Debug + PartialEq + Send + Sync + 'static + NumAssign + Neg<Output = Self>
{
    /// Runtime tag for this element type.
    const KIND: ScalarKind;
}

impl Scalar for f32 {
    const KIND: ScalarKind = ScalarKind::F32;
}

impl Scalar for f64 {
    const KIND: ScalarKind = ScalarKind::F64;
}

impl Scalar for Complex32 {
    const KIND: ScalarKind = ScalarKind::C32;
}

impl Scalar for Complex64 {
    const KIND: ScalarKind = ScalarKind::C64;
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GemmError {
    #[error("{op}: shape mismatch between A [{}x{}] and B [{}x{}]", .a.0, .a.1, .b.0, .b.1)]
    ShapeMismatch {
        op: &'static str,
        a: (usize, usize),
        b: (usize, usize),
    },
    #[error("{op}: length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        op: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{op}: output C is [{}x{}] but the product is [{}x{}]", .actual.0, .actual.1, .expected.0, .expected.1)]
    OutputShape {
        op: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    },
    #[error("{op}: range {start}..{end} is invalid for a vector of length {len}")]
    InvalidRange {
        op: &'static str,
        start: usize,
        end: usize,
        len: usize,
    },
    #[error("{op} is not supported by the {backend} backend")]
    UnsupportedOperation { backend: String, op: &'static str },
    #[error("dense container error: {0}")]
    Dense(#[from] dg_dense::DenseError),
}

pub type Result<T> = std::result::Result<T, GemmError>;

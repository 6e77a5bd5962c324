use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DenseError {
    #[error("data length {len} does not match {rows}x{cols} matrix")]
    DataLength { rows: usize, cols: usize, len: usize },
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("ragged rows: row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
}

pub type Result<T> = std::result::Result<T, DenseError>;

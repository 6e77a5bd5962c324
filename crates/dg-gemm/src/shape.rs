use crate::error::{GemmError, Result};

/// Algebraic interpretation of a pair of operands, inferred from their shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contraction {
    /// `A · B`
    DirectProduct,
    /// `A · Bᵗ`
    TransposedB,
    /// `Aᵗ · B`
    TransposedA,
    /// `Aᵗ · Bᵗ`
    TransposedBoth,
    /// No interpretation contracts matching dimensions.
    Invalid,
}

impl Contraction {
    pub fn transposes_a(&self) -> bool {
        matches!(self, Contraction::TransposedA | Contraction::TransposedBoth)
    }

    pub fn transposes_b(&self) -> bool {
        matches!(self, Contraction::TransposedB | Contraction::TransposedBoth)
    }
}

/// Classify operands of `multiply`: `A·B` if `A.cols == B.rows`, otherwise
/// `A·Bᵗ` if `A.cols == B.cols`.
pub fn classify_multiply(a: (usize, usize), b: (usize, usize)) -> Contraction {
    if a.1 == b.0 {
        Contraction::DirectProduct
    } else if a.1 == b.1 {
        Contraction::TransposedB
    } else {
        Contraction::Invalid
    }
}

/// Classify operands of `transpose_multiply`: `Aᵗ·B` if `A.rows == B.rows`,
/// otherwise `Aᵗ·Bᵗ` if `A.rows == B.cols`.
pub fn classify_transpose_multiply(a: (usize, usize), b: (usize, usize)) -> Contraction {
    if a.0 == b.0 {
        Contraction::TransposedA
    } else if a.0 == b.1 {
        Contraction::TransposedBoth
    } else {
        Contraction::Invalid
    }
}

/// A validated GEMM problem: `C[m x n] = op(A)[m x k] · op(B)[k x n]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GemmShape {
    pub contraction: Contraction,
    pub m: usize,
    pub n: usize,
    pub k: usize,
}

impl GemmShape {
    /// Resolve the shape for `multiply(A, B, ..)`.
    pub fn for_multiply(a: (usize, usize), b: (usize, usize)) -> Result<GemmShape> {
        Self::resolve("multiply", classify_multiply(a, b), a, b)
    }

    /// Resolve the shape for `transpose_multiply(A, B, ..)`.
    pub fn for_transpose_multiply(a: (usize, usize), b: (usize, usize)) -> Result<GemmShape> {
        Self::resolve("transpose_multiply", classify_transpose_multiply(a, b), a, b)
    }

    /// Derive `m`, `n`, `k` for an already classified pair of operands.
    pub fn resolve(
        op: &'static str,
        contraction: Contraction,
        a: (usize, usize),
        b: (usize, usize),
    ) -> Result<GemmShape> {
        let (m, k) = if contraction.transposes_a() {
            (a.1, a.0)
        } else {
            (a.0, a.1)
        };
        let (kb, n) = if contraction.transposes_b() {
            (b.1, b.0)
        } else {
            (b.0, b.1)
        };
        if contraction == Contraction::Invalid || k != kb {
            return Err(GemmError::ShapeMismatch { op, a, b });
        }
        Ok(GemmShape {
            contraction,
            m,
            n,
            k,
        })
    }

    /// Shape of the result matrix.
    pub fn output(&self) -> (usize, usize) {
        (self.m, self.n)
    }

    /// Stored shape A must have for this problem.
    pub fn a_shape(&self) -> (usize, usize) {
        if self.contraction.transposes_a() {
            (self.k, self.m)
        } else {
            (self.m, self.k)
        }
    }

    /// Stored shape B must have for this problem.
    pub fn b_shape(&self) -> (usize, usize) {
        if self.contraction.transposes_b() {
            (self.n, self.k)
        } else {
            (self.k, self.n)
        }
    }

    /// Verify that concrete operands agree with this problem.
    pub fn check_operands(
        &self,
        op: &'static str,
        a: (usize, usize),
        b: (usize, usize),
        c: (usize, usize),
    ) -> Result<()> {
        if a != self.a_shape() || b != self.b_shape() {
            return Err(GemmError::ShapeMismatch { op, a, b });
        }
        if c != self.output() {
            return Err(GemmError::OutputShape {
                op,
                expected: self.output(),
                actual: c,
            });
        }
        Ok(())
    }

    /// `(row_stride, col_stride)` for reading `op(A)[i][p]` out of row-major A.
    pub fn a_strides(&self, a_cols: usize) -> (usize, usize) {
        if self.contraction.transposes_a() {
            (1, a_cols)
        } else {
            (a_cols, 1)
        }
    }

    /// `(row_stride, col_stride)` for reading `op(B)[p][j]` out of row-major B.
    pub fn b_strides(&self, b_cols: usize) -> (usize, usize) {
        if self.contraction.transposes_b() {
            (1, b_cols)
        } else {
            (b_cols, 1)
        }
    }
}

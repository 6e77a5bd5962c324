use crate::shape::GemmShape;

/// Transpose flag in the CBLAS sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlasTranspose {
    NoTrans,
    Trans,
}

/// Arguments for a row-major `?gemm` call, derived from an inferred shape.
///
/// In row-major layout the leading dimension of a stored matrix is its
/// column count, so a transposed operand's leading dimension is the other
/// side of the logical product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlasParams {
    pub trans_a: BlasTranspose,
    pub trans_b: BlasTranspose,
    pub m: usize,
    pub n: usize,
    pub k: usize,
    pub lda: usize,
    pub ldb: usize,
    pub ldc: usize,
}

impl BlasParams {
    /// Derive flags and leading dimensions for `shape`.
    ///
    /// Leading dimensions are clamped to 1, which BLAS requires even when a
    /// dimension is empty.
    pub fn derive(shape: &GemmShape) -> Self {
        let GemmShape { m, n, k, .. } = *shape;
        let (trans_a, lda) = if shape.contraction.transposes_a() {
            (BlasTranspose::Trans, m)
        } else {
            (BlasTranspose::NoTrans, k)
        };
        let (trans_b, ldb) = if shape.contraction.transposes_b() {
            (BlasTranspose::Trans, k)
        } else {
            (BlasTranspose::NoTrans, n)
        };
        BlasParams {
            trans_a,
            trans_b,
            m,
            n,
            k,
            lda: lda.max(1),
            ldb: ldb.max(1),
            ldc: n.max(1),
        }
    }

    /// True when the output is empty and the engine need not be called.
    pub fn is_noop(&self) -> bool {
        self.m == 0 || self.n == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_product() {
        let shape = GemmShape::for_multiply((3, 4), (4, 5)).unwrap();
        let p = BlasParams::derive(&shape);
        assert_eq!(p.trans_a, BlasTranspose::NoTrans);
        assert_eq!(p.trans_b, BlasTranspose::NoTrans);
        assert_eq!((p.m, p.n, p.k), (3, 5, 4));
        assert_eq!((p.lda, p.ldb, p.ldc), (4, 5, 5));
    }

    #[test]
    fn test_transposed_b() {
        // A (3x4) * B^T with B (6x4): ldb is B's stored column count, k
        let shape = GemmShape::for_multiply((3, 4), (6, 4)).unwrap();
        let p = BlasParams::derive(&shape);
        assert_eq!(p.trans_b, BlasTranspose::Trans);
        assert_eq!((p.m, p.n, p.k), (3, 6, 4));
        assert_eq!((p.lda, p.ldb, p.ldc), (4, 4, 6));
    }

    #[test]
    fn test_transposed_a() {
        // A (4x3)^T * B (4x5): lda is A's stored column count, m
        let shape = GemmShape::for_transpose_multiply((4, 3), (4, 5)).unwrap();
        let p = BlasParams::derive(&shape);
        assert_eq!(p.trans_a, BlasTranspose::Trans);
        assert_eq!(p.trans_b, BlasTranspose::NoTrans);
        assert_eq!((p.m, p.n, p.k), (3, 5, 4));
        assert_eq!((p.lda, p.ldb, p.ldc), (3, 5, 5));
    }

    #[test]
    fn test_transposed_both() {
        let shape = GemmShape::for_transpose_multiply((4, 3), (5, 4)).unwrap();
        let p = BlasParams::derive(&shape);
        assert_eq!(p.trans_a, BlasTranspose::Trans);
        assert_eq!(p.trans_b, BlasTranspose::Trans);
        assert_eq!((p.lda, p.ldb, p.ldc), (3, 4, 5));
    }

    #[test]
    fn test_empty_dimensions_clamp_leading_dims() {
        let shape = GemmShape::for_multiply((0, 0), (0, 0)).unwrap();
        let p = BlasParams::derive(&shape);
        assert!(p.is_noop());
        assert_eq!((p.lda, p.ldb, p.ldc), (1, 1, 1));

        let shape = GemmShape::for_multiply((2, 0), (0, 3)).unwrap();
        let p = BlasParams::derive(&shape);
        assert!(!p.is_noop());
        assert_eq!(p.lda, 1);
    }
}

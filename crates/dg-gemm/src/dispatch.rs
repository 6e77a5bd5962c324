//! Public GEMM entry points.
//!
//! Each entry point infers the contraction from operand shapes, turns β into
//! an [`Accumulate`] policy, sizes the output and hands the problem to one
//! backend. The default backend is fixed at build time by cargo features:
//!
//! | features | backend                                      |
//! |----------|----------------------------------------------|
//! | none     | [`NaiveBackend`](crate::NaiveBackend)        |
//! | `expr`   | [`NalgebraBackend`](crate::NalgebraBackend)  |
//! | `blas`   | `BlasBackend`                                |
//!
//! `blas` wins when both features are enabled. The `*_with` variants take an
//! explicit backend instead.

use dg_dense::Matrix;
use tracing::{debug, instrument};

use crate::backend::GemmBackend;
use crate::error::{GemmError, Result};
use crate::policy::Accumulate;
use crate::scalar::GemmScalar;
use crate::shape::{Contraction, GemmShape};

/// The three numeric execution strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    Naive,
    Expression,
    Blas,
}

/// Backend used by [`multiply`], [`transpose_multiply`] and friends.
#[cfg(feature = "blas")]
pub type ActiveBackend = crate::blas::BlasBackend;
#[cfg(feature = "blas")]
pub const ACTIVE_BACKEND: BackendKind = BackendKind::Blas;

/// Backend used by [`multiply`], [`transpose_multiply`] and friends.
#[cfg(all(feature = "expr", not(feature = "blas")))]
pub type ActiveBackend = crate::expr::NalgebraBackend;
#[cfg(all(feature = "expr", not(feature = "blas")))]
pub const ACTIVE_BACKEND: BackendKind = BackendKind::Expression;

/// Backend used by [`multiply`], [`transpose_multiply`] and friends.
#[cfg(not(any(feature = "blas", feature = "expr")))]
pub type ActiveBackend = crate::naive::NaiveBackend;
#[cfg(not(any(feature = "blas", feature = "expr")))]
pub const ACTIVE_BACKEND: BackendKind = BackendKind::Naive;

/// Resize C to the problem's output shape unless it already has it.
fn prepare_output<T: GemmScalar>(
    op: &'static str,
    c: &mut Matrix<T>,
    shape: &GemmShape,
    policy: &Accumulate<T>,
) {
    let target = shape.output();
    if c.shape() == target {
        return;
    }
    if policy.reads_output() {
        debug!(op, from = ?c.shape(), to = ?target, "accumulating output resized, contents reset");
    }
    c.resize(target.0, target.1);
}

/// True when C is pre-shaped as the transpose of `Aᵗ·B` and its contents
/// matter, so `transpose_multiply` should be re-entered as `Bᵗ·A`.
fn wants_swapped_target<T: GemmScalar>(
    shape: &GemmShape,
    c: (usize, usize),
    policy: &Accumulate<T>,
) -> bool {
    let (m, n) = shape.output();
    shape.contraction == Contraction::TransposedA
        && policy.reads_output()
        && c != (m, n)
        && c == (n, m)
}

/// `C = α·A·B + β·C`, or `C = α·A·Bᵗ + β·C` when only `A.cols == B.cols`.
///
/// C is resized to the result shape when needed. On `ShapeMismatch` C is
/// left as it was.
pub fn multiply<T: GemmScalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    c: &mut Matrix<T>,
    alpha: T,
    beta: T,
) -> Result<()> {
    multiply_with(&ActiveBackend::default(), a, b, c, alpha, beta)
}

/// [`multiply`] on an explicit backend.
#[instrument(level = "trace", skip_all, fields(backend = backend.name(), a = ?a.shape(), b = ?b.shape()))]
pub fn multiply_with<B: GemmBackend, T: GemmScalar>(
    backend: &B,
    a: &Matrix<T>,
    b: &Matrix<T>,
    c: &mut Matrix<T>,
    alpha: T,
    beta: T,
) -> Result<()> {
    let shape = GemmShape::for_multiply(a.shape(), b.shape())?;
    let policy = Accumulate::from_beta(beta);
    prepare_output("multiply", c, &shape, &policy);
    backend.gemm(&shape, a, b, c, alpha, policy)
}

/// `C = α·Aᵗ·B + β·C`, or `C = α·Aᵗ·Bᵗ + β·C` when only `A.rows == B.cols`.
///
/// When β ≠ 0 and C is already shaped like the transpose of `Aᵗ·B`, the
/// call is re-entered with the operands swapped and computes
/// `C = α·Bᵗ·A + β·C` into the existing C.
pub fn transpose_multiply<T: GemmScalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    c: &mut Matrix<T>,
    alpha: T,
    beta: T,
) -> Result<()> {
    transpose_multiply_with(&ActiveBackend::default(), a, b, c, alpha, beta)
}

/// [`transpose_multiply`] on an explicit backend.
#[instrument(level = "trace", skip_all, fields(backend = backend.name(), a = ?a.shape(), b = ?b.shape()))]
pub fn transpose_multiply_with<B: GemmBackend, T: GemmScalar>(
    backend: &B,
    a: &Matrix<T>,
    b: &Matrix<T>,
    c: &mut Matrix<T>,
    alpha: T,
    beta: T,
) -> Result<()> {
    let shape = GemmShape::for_transpose_multiply(a.shape(), b.shape())?;
    let policy = Accumulate::from_beta(beta);

    if wants_swapped_target(&shape, c.shape(), &policy) {
        debug!(c = ?c.shape(), "output shaped as transposed result, swapping operands");
        return transpose_multiply_with(backend, b, a, c, alpha, beta);
    }

    prepare_output("transpose_multiply", c, &shape, &policy);
    backend.gemm(&shape, a, b, c, alpha, policy)
}

/// `Cᵗ = α·Aᵗ·op(B) + β·Cᵗ`, written straight into a C shaped like the
/// transposed result instead of swapping operands as [`transpose_multiply`]
/// does.
///
/// Only backends that implement
/// [`GemmBackend::gemm_transposed_target`] support this. The others return
/// `UnsupportedOperation` before C is touched.
pub fn transpose_multiply_into_transposed<T: GemmScalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    c: &mut Matrix<T>,
    alpha: T,
    beta: T,
) -> Result<()> {
    transpose_multiply_into_transposed_with(&ActiveBackend::default(), a, b, c, alpha, beta)
}

/// [`transpose_multiply_into_transposed`] on an explicit backend.
pub fn transpose_multiply_into_transposed_with<B: GemmBackend, T: GemmScalar>(
    backend: &B,
    a: &Matrix<T>,
    b: &Matrix<T>,
    c: &mut Matrix<T>,
    alpha: T,
    beta: T,
) -> Result<()> {
    let shape = GemmShape::for_transpose_multiply(a.shape(), b.shape())?;
    if !backend.supports_transposed_target() {
        return Err(GemmError::UnsupportedOperation {
            backend: backend.name().to_string(),
            op: "transpose_multiply_into_transposed",
        });
    }
    let (m, n) = shape.output();
    if c.shape() != (n, m) {
        c.resize(n, m);
    }
    backend.gemm_transposed_target(&shape, a, b, c, alpha, Accumulate::from_beta(beta))
}

/// Congruence transform `C = α·Aᵗ·B·A + β·C`.
///
/// `scratch` receives `Aᵗ·B` and is resized as needed, so one scratch
/// matrix can be reused across calls. Shape errors from either stage are
/// reported against the caller's A and B.
pub fn multiply_aba<T: GemmScalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    c: &mut Matrix<T>,
    scratch: &mut Matrix<T>,
    alpha: T,
    beta: T,
) -> Result<()> {
    multiply_aba_with(&ActiveBackend::default(), a, b, c, scratch, alpha, beta)
}

/// [`multiply_aba`] on an explicit backend.
pub fn multiply_aba_with<B: GemmBackend, T: GemmScalar>(
    backend: &B,
    a: &Matrix<T>,
    b: &Matrix<T>,
    c: &mut Matrix<T>,
    scratch: &mut Matrix<T>,
    alpha: T,
    beta: T,
) -> Result<()> {
    let mismatch = GemmError::ShapeMismatch {
        op: "multiply_aba",
        a: a.shape(),
        b: b.shape(),
    };
    if a.rows() != b.rows() {
        return Err(mismatch);
    }
    transpose_multiply_with(backend, a, b, scratch, T::one(), T::zero())?;
    multiply_with(backend, scratch, a, c, alpha, beta).map_err(|e| match e {
        GemmError::ShapeMismatch { .. } => mismatch,
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::NalgebraBackend;
    use crate::naive::NaiveBackend;
    use approx::assert_abs_diff_eq;
    use dg_dense::Complex64;
    use proptest::prelude::*;

    fn mat(rows: usize, cols: usize, data: &[f64]) -> Matrix<f64> {
        Matrix::from_vec(rows, cols, data.to_vec()).unwrap()
    }

    fn sample(rows: usize, cols: usize, seed: f64) -> Matrix<f64> {
        let data: Vec<f64> = (0..rows * cols)
            .map(|i| ((i as f64 + seed) * 1.3).sin() * 3.0)
            .collect();
        Matrix::from_vec(rows, cols, data).unwrap()
    }

    /// Textbook triple sum `A·B`.
    fn reference_product(a: &Matrix<f64>, b: &Matrix<f64>) -> Matrix<f64> {
        let mut c = Matrix::zeros(a.rows(), b.cols());
        for i in 0..a.rows() {
            for j in 0..b.cols() {
                let mut s = 0.0;
                for p in 0..a.cols() {
                    s += a[(i, p)] * b[(p, j)];
                }
                c[(i, j)] = s;
            }
        }
        c
    }

    fn assert_close(x: &Matrix<f64>, y: &Matrix<f64>) {
        assert_eq!(x.shape(), y.shape());
        for (p, q) in x.as_slice().iter().zip(y.as_slice()) {
            assert_abs_diff_eq!(*p, *q, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_active_backend_matches_features() {
        let name = ActiveBackend::default().name().to_string();
        match ACTIVE_BACKEND {
            BackendKind::Naive => assert_eq!(name, "naive"),
            BackendKind::Expression => assert_eq!(name, "nalgebra"),
            BackendKind::Blas => assert_eq!(name, "blas"),
        }
    }

    #[test]
    fn test_multiply_direct_selects_ab() {
        let a = sample(3, 4, 0.0);
        let b = sample(4, 5, 1.0);
        let mut c = Matrix::zeros(0, 0);
        multiply(&a, &b, &mut c, 1.0, 0.0).unwrap();
        assert_eq!(c.shape(), (3, 5));
        assert_close(&c, &reference_product(&a, &b));
    }

    #[test]
    fn test_multiply_same_shape_selects_abt() {
        let a = sample(3, 4, 0.0);
        let b = sample(3, 4, 2.0);
        let mut c = Matrix::zeros(0, 0);
        multiply(&a, &b, &mut c, 1.0, 0.0).unwrap();
        assert_eq!(c.shape(), (3, 3));
        assert_close(&c, &reference_product(&a, &b.transpose()));
    }

    #[test]
    fn test_transpose_multiply_same_shape_gives_gram_shape() {
        let a = sample(3, 4, 0.0);
        let b = sample(3, 4, 2.0);
        let mut c = Matrix::zeros(0, 0);
        transpose_multiply(&a, &b, &mut c, 1.0, 0.0).unwrap();
        assert_eq!(c.shape(), (4, 4));
        assert_close(&c, &reference_product(&a.transpose(), &b));
    }

    #[test]
    fn test_transpose_multiply_both_transposed() {
        let a = sample(4, 3, 0.0);
        let b = sample(2, 4, 1.0);
        let mut c = Matrix::zeros(0, 0);
        transpose_multiply(&a, &b, &mut c, 1.0, 0.0).unwrap();
        assert_eq!(c.shape(), (3, 2));
        assert_close(&c, &reference_product(&a.transpose(), &b.transpose()));
    }

    #[test]
    fn test_mismatch_reports_shapes_and_leaves_output() {
        let a = sample(2, 3, 0.0);
        let b = sample(4, 5, 0.0);
        let mut c = mat(1, 2, &[7.0, 8.0]);
        let err = multiply(&a, &b, &mut c, 1.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            GemmError::ShapeMismatch {
                op: "multiply",
                a: (2, 3),
                b: (4, 5)
            }
        );
        assert_eq!(c, mat(1, 2, &[7.0, 8.0]));

        assert!(transpose_multiply(&a, &b, &mut c, 1.0, 1.0).is_err());
        assert_eq!(c, mat(1, 2, &[7.0, 8.0]));
    }

    #[test]
    fn test_accumulating_into_presized_output() {
        let a = sample(2, 3, 0.0);
        let b = sample(3, 2, 1.0);
        let start = sample(2, 2, 4.0);
        let product = reference_product(&a, &b);

        for &beta in &[1.0, -1.0, 0.5, 2.0, -0.5] {
            let mut c = start.clone();
            multiply(&a, &b, &mut c, 2.0, beta).unwrap();
            let policy = Accumulate::from_beta(beta);
            for i in 0..2 {
                for j in 0..2 {
                    let expected = match policy {
                        Accumulate::Add => start[(i, j)] + 2.0 * product[(i, j)],
                        Accumulate::Subtract => start[(i, j)] - 2.0 * product[(i, j)],
                        _ => beta * start[(i, j)] + 2.0 * product[(i, j)],
                    };
                    assert_abs_diff_eq!(c[(i, j)], expected, epsilon = 1e-10);
                }
            }
        }
    }

    #[test]
    fn test_blend_branch_against_reference() {
        let a = sample(3, 2, 0.3);
        let b = sample(2, 4, 0.9);
        let start = sample(3, 4, 1.7);
        let product = reference_product(&a, &b);
        for &beta in &[0.5, 2.0, -0.5] {
            let mut c = start.clone();
            multiply(&a, &b, &mut c, 1.0, beta).unwrap();
            for i in 0..3 {
                for j in 0..4 {
                    assert_abs_diff_eq!(
                        c[(i, j)],
                        beta * start[(i, j)] + product[(i, j)],
                        epsilon = 1e-10
                    );
                }
            }
        }
    }

    #[test]
    fn test_beta_one_is_bit_identical_to_forced_blend() {
        let a = sample(3, 3, 0.1);
        let b = sample(3, 3, 0.2);
        let start = sample(3, 3, 0.3);
        let shape = GemmShape::for_multiply(a.shape(), b.shape()).unwrap();

        let mut via_add = start.clone();
        let mut via_blend = start.clone();
        NaiveBackend::new()
            .gemm(&shape, &a, &b, &mut via_add, 0.7, Accumulate::from_beta(1.0))
            .unwrap();
        NaiveBackend::new()
            .gemm(&shape, &a, &b, &mut via_blend, 0.7, Accumulate::Blend(1.0))
            .unwrap();
        assert_eq!(via_add, via_blend);

        let mut via_add = start.clone();
        let mut via_blend = start;
        NalgebraBackend::new()
            .gemm(&shape, &a, &b, &mut via_add, 0.7, Accumulate::Add)
            .unwrap();
        NalgebraBackend::new()
            .gemm(&shape, &a, &b, &mut via_blend, 0.7, Accumulate::Blend(1.0))
            .unwrap();
        assert_eq!(via_add, via_blend);
    }

    #[test]
    fn test_transpose_multiply_is_transpose_of_swapped_multiply() {
        let a = sample(4, 3, 0.0);
        let b = sample(4, 2, 5.0);
        let mut atb = Matrix::zeros(0, 0);
        transpose_multiply(&a, &b, &mut atb, 1.0, 0.0).unwrap();

        // B^T·A via multiply needs B^T stored explicitly.
        let mut bta = Matrix::zeros(0, 0);
        multiply(&b.transpose(), &a, &mut bta, 1.0, 0.0).unwrap();
        assert_close(&atb.transpose(), &bta);
    }

    #[test]
    fn test_swapped_redispatch_into_preshaped_output() {
        // A^T·B is 3x2, but C is 2x3 and accumulates: result is B^T·A + C.
        let a = sample(4, 3, 0.0);
        let b = sample(4, 2, 5.0);
        let start = sample(2, 3, 9.0);
        let mut c = start.clone();
        transpose_multiply(&a, &b, &mut c, 1.0, 1.0).unwrap();

        assert_eq!(c.shape(), (2, 3));
        let bta = reference_product(&b.transpose(), &a);
        for i in 0..2 {
            for j in 0..3 {
                assert_abs_diff_eq!(c[(i, j)], start[(i, j)] + bta[(i, j)], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_no_swap_when_overwriting() {
        let a = sample(4, 3, 0.0);
        let b = sample(4, 2, 5.0);
        let mut c = sample(2, 3, 9.0);
        transpose_multiply(&a, &b, &mut c, 1.0, 0.0).unwrap();
        assert_eq!(c.shape(), (3, 2));
        assert_close(&c, &reference_product(&a.transpose(), &b));
    }

    #[test]
    fn test_no_swap_when_output_already_fits() {
        let a = sample(3, 2, 0.0);
        let b = sample(3, 2, 1.0);
        let start = sample(2, 2, 2.0);
        let mut c = start.clone();
        transpose_multiply(&a, &b, &mut c, 1.0, 1.0).unwrap();
        let atb = reference_product(&a.transpose(), &b);
        for i in 0..2 {
            for j in 0..2 {
                assert_abs_diff_eq!(c[(i, j)], start[(i, j)] + atb[(i, j)], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_accumulating_into_unrelated_shape_resizes() {
        let a = sample(2, 3, 0.0);
        let b = sample(3, 4, 1.0);
        let mut c = mat(1, 1, &[100.0]);
        multiply(&a, &b, &mut c, 1.0, 1.0).unwrap();
        assert_close(&c, &reference_product(&a, &b));
    }

    #[test]
    fn test_into_transposed_on_naive() {
        let a = sample(4, 3, 0.0);
        let b = sample(4, 2, 5.0);
        let mut c = Matrix::zeros(0, 0);
        transpose_multiply_into_transposed_with(&NaiveBackend::new(), &a, &b, &mut c, 1.0, 0.0)
            .unwrap();
        assert_eq!(c.shape(), (2, 3));
        assert_close(&c, &reference_product(&a.transpose(), &b).transpose());
    }

    #[test]
    fn test_into_transposed_unsupported_leaves_output() {
        let a = sample(4, 3, 0.0);
        let b = sample(4, 2, 5.0);
        let mut c = mat(1, 1, &[3.0]);
        let err = transpose_multiply_into_transposed_with(
            &NalgebraBackend::new(),
            &a,
            &b,
            &mut c,
            1.0,
            0.0,
        )
        .unwrap_err();
        assert!(matches!(err, GemmError::UnsupportedOperation { .. }));
        assert_eq!(c, mat(1, 1, &[3.0]));
    }

    #[test]
    fn test_multiply_aba_matches_chained_products() {
        let a = sample(3, 2, 0.0);
        let mut b = sample(3, 3, 1.0);
        // symmetrize B
        let bt = b.transpose();
        for i in 0..3 {
            for j in 0..3 {
                b[(i, j)] = 0.5 * (b[(i, j)] + bt[(i, j)]);
            }
        }

        let mut c = Matrix::zeros(0, 0);
        let mut scratch = Matrix::zeros(0, 0);
        multiply_aba(&a, &b, &mut c, &mut scratch, 1.0, 0.0).unwrap();

        let mut ba = Matrix::zeros(0, 0);
        multiply(&b, &a, &mut ba, 1.0, 0.0).unwrap();
        let mut expected = Matrix::zeros(0, 0);
        transpose_multiply(&a, &ba, &mut expected, 1.0, 0.0).unwrap();

        assert_eq!(c.shape(), (2, 2));
        assert_eq!(scratch.shape(), (2, 3));
        assert_close(&c, &expected);
    }

    #[test]
    fn test_multiply_aba_accumulates_and_reuses_scratch() {
        let a = sample(3, 2, 0.0);
        let b = Matrix::<f64>::identity(3);
        let mut scratch = Matrix::zeros(0, 0);
        let mut c = Matrix::<f64>::identity(2);
        multiply_aba(&a, &b, &mut c, &mut scratch, 2.0, -1.0).unwrap();

        let ata = reference_product(&a.transpose(), &a);
        for i in 0..2 {
            for j in 0..2 {
                let id = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(c[(i, j)], id - 2.0 * ata[(i, j)], epsilon = 1e-10);
            }
        }

        // Same scratch, different A shape.
        let a2 = sample(3, 1, 3.0);
        let mut c2 = Matrix::zeros(0, 0);
        multiply_aba(&a2, &b, &mut c2, &mut scratch, 1.0, 0.0).unwrap();
        assert_eq!(c2.shape(), (1, 1));
        assert_eq!(scratch.shape(), (1, 3));
    }

    #[test]
    fn test_multiply_aba_row_mismatch() {
        let a = sample(3, 2, 0.0);
        let b = sample(4, 4, 0.0);
        let mut c = Matrix::zeros(0, 0);
        let mut scratch = Matrix::zeros(0, 0);
        let err = multiply_aba(&a, &b, &mut c, &mut scratch, 1.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            GemmError::ShapeMismatch {
                op: "multiply_aba",
                a: (3, 2),
                b: (4, 4)
            }
        );
    }

    #[test]
    fn test_multiply_aba_non_square_b_reports_caller_shapes() {
        // A^T·B is 2x4, which cannot be multiplied with the 3x2 A.
        let a = sample(3, 2, 0.0);
        let b = sample(3, 4, 1.0);
        let mut c = mat(1, 1, &[5.0]);
        let mut scratch = Matrix::zeros(0, 0);
        let err = multiply_aba(&a, &b, &mut c, &mut scratch, 1.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            GemmError::ShapeMismatch {
                op: "multiply_aba",
                a: (3, 2),
                b: (3, 4)
            }
        );
        assert_eq!(c, mat(1, 1, &[5.0]));
    }

    #[test]
    fn test_complex_multiply() {
        let i = Complex64::new(0.0, 1.0);
        let one = Complex64::new(1.0, 0.0);
        let zero = Complex64::new(0.0, 0.0);
        let a = Matrix::from_vec(2, 2, vec![one, i, zero, one]).unwrap();
        let mut c = Matrix::zeros(0, 0);
        multiply(&a, &a, &mut c, one, zero).unwrap();
        // [1 i; 0 1]^2 = [1 2i; 0 1]
        assert_eq!(c.as_slice(), &[one, i + i, zero, one]);
    }

    #[test]
    fn test_every_backend_matches_reference() {
        let a = sample(5, 3, 0.0);
        let b = sample(3, 4, 1.0);
        let expected = reference_product(&a, &b);

        let mut c = Matrix::zeros(0, 0);
        multiply_with(&NaiveBackend::new(), &a, &b, &mut c, 1.0, 0.0).unwrap();
        assert_close(&c, &expected);

        let mut c = Matrix::zeros(0, 0);
        multiply_with(&NalgebraBackend::new(), &a, &b, &mut c, 1.0, 0.0).unwrap();
        assert_close(&c, &expected);

        #[cfg(feature = "blas")]
        {
            let mut c = Matrix::zeros(0, 0);
            multiply_with(&crate::blas::BlasBackend::new(), &a, &b, &mut c, 1.0, 0.0).unwrap();
            assert_close(&c, &expected);
        }
    }

    fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<f64>> {
        prop::collection::vec(-10.0f64..10.0, rows * cols)
            .prop_map(move |data| Matrix::from_vec(rows, cols, data).unwrap())
    }

    fn product_operands() -> impl Strategy<Value = (Matrix<f64>, Matrix<f64>)> {
        (1usize..6, 1usize..6, 1usize..6)
            .prop_flat_map(|(m, k, n)| (matrix_strategy(m, k), matrix_strategy(k, n)))
    }

    proptest! {
        #[test]
        fn prop_multiply_matches_triple_sum((a, b) in product_operands()) {
            let mut c = Matrix::zeros(0, 0);
            multiply(&a, &b, &mut c, 1.0, 0.0).unwrap();
            let expected = reference_product(&a, &b);
            prop_assert_eq!(c.shape(), expected.shape());
            for (x, y) in c.as_slice().iter().zip(expected.as_slice()) {
                prop_assert!((x - y).abs() < 1e-10);
            }
        }

        #[test]
        fn prop_transpose_multiply_is_swapped_multiply_transposed((a, b) in product_operands()) {
            // at is stored k x m, so at^T·b is a·b.
            let at = a.transpose();
            let mut lhs = Matrix::zeros(0, 0);
            transpose_multiply(&at, &b, &mut lhs, 1.0, 0.0).unwrap();

            let mut rhs = Matrix::zeros(0, 0);
            multiply(&a, &b, &mut rhs, 1.0, 0.0).unwrap();
            prop_assert_eq!(lhs.shape(), rhs.shape());
            for (x, y) in lhs.as_slice().iter().zip(rhs.as_slice()) {
                prop_assert!((x - y).abs() < 1e-10);
            }
        }
    }
}

use dg_dense::{dot_slices, Matrix, Scalar, Vector};
use tracing::error;

use crate::error::{GemmError, Result};
use crate::policy::Accumulate;

/// `y = M·x`.
///
/// # Errors
/// `LengthMismatch` unless `x.len() == M.cols`.
pub fn apply<T: Scalar>(m: &Matrix<T>, x: &Vector<T>) -> Result<Vector<T>> {
    if x.len() != m.cols() {
        return Err(GemmError::LengthMismatch {
            op: "apply",
            expected: m.cols(),
            actual: x.len(),
        });
    }
    Ok((0..m.rows())
        .map(|i| dot_slices(m.row(i), x.as_slice()))
        .collect())
}

/// `y = M·x[start..end]`: M's columns are contracted against the window of
/// `x` starting at `start`.
///
/// # Errors
/// `InvalidRange` if `start > end` or `end > x.len()`, `LengthMismatch`
/// unless `end - start == M.cols`.
pub fn apply_range<T: Scalar>(
    m: &Matrix<T>,
    x: &Vector<T>,
    start: usize,
    end: usize,
) -> Result<Vector<T>> {
    if start > end || end > x.len() {
        return Err(GemmError::InvalidRange {
            op: "apply_range",
            start,
            end,
            len: x.len(),
        });
    }
    if end - start != m.cols() {
        return Err(GemmError::LengthMismatch {
            op: "apply_range",
            expected: m.cols(),
            actual: end - start,
        });
    }
    let window = &x.as_slice()[start..end];
    Ok((0..m.rows()).map(|i| dot_slices(m.row(i), window)).collect())
}

/// `y = Mᵗ·x`.
///
/// # Errors
/// `LengthMismatch` unless `x.len() == M.rows`.
pub fn apply_transpose<T: Scalar>(m: &Matrix<T>, x: &Vector<T>) -> Result<Vector<T>> {
    if x.len() != m.rows() {
        return Err(GemmError::LengthMismatch {
            op: "apply_transpose",
            expected: m.rows(),
            actual: x.len(),
        });
    }
    let mut y = Vector::zeros(m.cols());
    for i in 0..m.rows() {
        let xi = x[i];
        for (yj, &mij) in y.as_mut_slice().iter_mut().zip(m.row(i)) {
            *yj += mij * xi;
        }
    }
    Ok(y)
}

/// `target ← target + sourceᵗ`.
///
/// A shape mismatch is logged and skipped rather than returned, so one bad
/// contribution does not abort an accumulation loop. Returns whether the
/// addition happened; `target` is untouched when it did not.
pub fn transpose_add_into<T: Scalar>(target: &mut Matrix<T>, source: &Matrix<T>) -> bool {
    if target.rows() != source.cols() || target.cols() != source.rows() {
        error!(
            target = ?target.shape(),
            source = ?source.shape(),
            "transpose_add_into: target must have the transposed shape of source"
        );
        return false;
    }
    for i in 0..target.rows() {
        for j in 0..target.cols() {
            target[(i, j)] += source[(j, i)];
        }
    }
    true
}

/// Fold `source` into `target` under the accumulation policy for `beta`:
/// overwrite, add, subtract, or `beta·target + source`.
///
/// `target` is resized when overwriting.
pub fn accumulate_into<T: Scalar>(
    target: &mut Vector<T>,
    source: &Vector<T>,
    beta: T,
) -> Result<()> {
    let policy = Accumulate::from_beta(beta);
    if !policy.reads_output() {
        *target = source.clone();
        return Ok(());
    }
    if target.len() != source.len() {
        return Err(GemmError::LengthMismatch {
            op: "accumulate_into",
            expected: target.len(),
            actual: source.len(),
        });
    }
    for (t, &s) in target.as_mut_slice().iter_mut().zip(source.as_slice()) {
        *t = policy.apply(*t, s);
    }
    Ok(())
}

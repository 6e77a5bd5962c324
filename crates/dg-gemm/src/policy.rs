use dg_dense::Scalar;

/// How a freshly computed product is folded into the existing output.
///
/// Derived from β in `C = α·op(A)·op(B) + β·C`. Every backend evaluates the
/// same policy so the four regimes behave identically whichever engine runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Accumulate<T> {
    /// β = 0: `C ← α·AB`. The old contents of C are never read.
    Overwrite,
    /// β = 1: `C ← C + α·AB`.
    Add,
    /// β = −1: `C ← C − α·AB`.
    Subtract,
    /// Any other β: `C ← β·C + α·AB`.
    Blend(T),
}

impl<T: Scalar> Accumulate<T> {
    /// Classify β into one of the four regimes.
    ///
    /// Only the exact values 0, 1 and −1 select the dedicated regimes.
    pub fn from_beta(beta: T) -> Self {
        if beta == T::zero() {
            Accumulate::Overwrite
        } else if beta == T::one() {
            Accumulate::Add
        } else if beta == -T::one() {
            Accumulate::Subtract
        } else {
            Accumulate::Blend(beta)
        }
    }

    /// Returns true when the existing output contents take part in the result.
    pub fn reads_output(&self) -> bool {
        !matches!(self, Accumulate::Overwrite)
    }

    /// Combine the current output element with `value`, which already
    /// carries the α factor.
    #[inline]
    pub fn apply(&self, current: T, value: T) -> T {
        match *self {
            Accumulate::Overwrite => value,
            Accumulate::Add => current + value,
            Accumulate::Subtract => current - value,
            Accumulate::Blend(beta) => beta * current + value,
        }
    }

    /// Express the policy as GEMM `(alpha, beta)` coefficients.
    ///
    /// `Subtract` becomes `(−α, 1)` so that an engine which only knows the
    /// plain `α·AB + β·C` contract still computes `C − α·AB`.
    pub fn gemm_coefficients(&self, alpha: T) -> (T, T) {
        match *self {
            Accumulate::Overwrite => (alpha, T::zero()),
            Accumulate::Add => (alpha, T::one()),
            Accumulate::Subtract => (-alpha, T::one()),
            Accumulate::Blend(beta) => (alpha, beta),
        }
    }
}

use dg_dense::Scalar;
use nalgebra::ComplexField;

/// Element types every backend can multiply.
///
/// This adds the nalgebra field bound on top of [`Scalar`] so the expression
/// backend accepts the same element types as the others.
pub trait GemmScalar: Scalar + ComplexField {}

impl<T: Scalar + ComplexField> GemmScalar for T {}

//! Accelerated BLAS adapter.
//!
//! Parameter derivation is always compiled. The engine call itself needs the
//! `blas` feature, which links CBLAS through `blas-src`.

mod params;

#[cfg(feature = "blas")]
mod engine;

pub use params::{BlasParams, BlasTranspose};

#[cfg(feature = "blas")]
pub use engine::BlasBackend;

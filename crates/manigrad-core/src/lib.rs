//! Core contracts and gradient approximation engine for Riemannian objectives.
//!
//! This crate is the bridge between arbitrary scalar objectives and
//! manifold-aware optimization: it computes approximate or converted
//! Riemannian gradients without requiring a hand-derived closed form.
//!
//! Two modes are offered:
//!
//! - **Intrinsic mode**: finite differences along retraction curves in the
//!   directions of an orthonormal tangent basis
//!   ([`TangentBasisDifferencer`]), reassembled into a tangent vector by the
//!   [`GradientAssembler`].
//! - **Embedding mode**: an ambient (Euclidean) gradient obtained from a
//!   pluggable [`DifferentiationBackend`] is projected onto the tangent
//!   space and, for non-isometric embeddings, corrected by a change of
//!   representer ([`EmbeddingGradientConverter`]).
//!
//! In both modes the output is the tangent vector satisfying, to
//! approximation tolerance, the Riesz-representer identity
//! `⟨grad f, Y⟩_p ≈ Df(p)[Y]` for every tangent direction Y.
//!
//! The manifold's geometric primitives (retraction, projection, orthonormal
//! basis, metric) are external collaborators specified by the [`Manifold`]
//! trait; concrete manifolds live in `manigrad-manifolds` and automatic
//! differentiation adapters in `manigrad-autodiff`.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod backend;
pub mod conversion;
pub mod cost_function;
pub mod error;
pub mod finite_difference;
pub mod gradient;
pub mod manifold;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_manifolds;

// Re-export commonly used items at the crate root
pub use backend::{DifferentiationBackend, FiniteDifferenceBackend};
pub use conversion::EmbeddingGradientConverter;
pub use cost_function::CostFunction;
pub use error::{GradientError, Result};
pub use finite_difference::{DifferenceScheme, TangentBasisDifferencer};
pub use gradient::{approximate_gradient, GradientAssembler};
pub use manifold::{Manifold, Point, TangentVector};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use manigrad_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::backend::{DifferentiationBackend, FiniteDifferenceBackend};
    pub use crate::conversion::EmbeddingGradientConverter;
    pub use crate::cost_function::{CostFunction, QuadraticForm};
    pub use crate::error::{GradientError, Result};
    pub use crate::finite_difference::{DifferenceScheme, TangentBasisDifferencer};
    pub use crate::gradient::{approximate_gradient, GradientAssembler};
    pub use crate::manifold::{Manifold, Point, TangentVector};
    pub use crate::types::{DMatrix, DVector, Scalar};
}

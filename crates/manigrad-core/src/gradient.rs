//! Gradient assembly from per-direction derivative estimates.
//!
//! Because the basis supplied to the differencer is orthonormal under the
//! metric, the approximate gradient is simply the tangent vector whose
//! coordinates in that basis are the directional-derivative estimates: no
//! linear solve is needed.

use crate::{
    cost_function::CostFunction,
    error::{GradientError, Result},
    finite_difference::TangentBasisDifferencer,
    manifold::{Manifold, Point, TangentVector},
    types::Scalar,
};

/// Combines directional-derivative estimates into a tangent vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct GradientAssembler;

impl GradientAssembler {
    /// Returns the tangent vector whose coordinates in `basis` are exactly
    /// `estimates`.
    ///
    /// Valid only because the basis is orthonormal under the metric; the
    /// differencer enforces that before producing estimates.
    ///
    /// # Errors
    ///
    /// - [`GradientError::DimensionMismatch`] if estimate count differs
    ///   from basis length.
    /// - [`GradientError::InvalidBasis`] if the basis is empty (zero
    ///   estimates over no directions have no base point to anchor to).
    pub fn assemble<T: Scalar>(
        basis: &[TangentVector<T>],
        estimates: &[T],
    ) -> Result<TangentVector<T>> {
        if estimates.len() != basis.len() {
            return Err(GradientError::dimension_mismatch(
                basis.len(),
                estimates.len(),
            ));
        }
        let Some(first) = basis.first() else {
            return Err(GradientError::invalid_basis("basis is empty"));
        };

        let mut gradient = TangentVector::zeros(first.len());
        for (direction, &coefficient) in basis.iter().zip(estimates) {
            gradient.axpy(coefficient, direction, T::one());
        }
        Ok(gradient)
    }
}

/// Intrinsic-mode driver: approximates the Riemannian gradient of `f` at
/// `point` by tangent-basis finite differencing.
///
/// Chains the manifold's orthonormal basis, the differencer, and the
/// assembler. The result satisfies `⟨grad, Y⟩_p ≈ Df(p)[Y]` for all tangent
/// Y, to the differencer's scheme tolerance.
///
/// # Errors
///
/// Propagates every failure of the collaborators unchanged; see
/// [`TangentBasisDifferencer::directional_derivatives`].
pub fn approximate_gradient<T, M, F>(
    manifold: &M,
    f: &F,
    point: &Point<T>,
    differencer: &TangentBasisDifferencer<T>,
) -> Result<TangentVector<T>>
where
    T: Scalar,
    M: Manifold<T> + Sync,
    F: CostFunction<T> + Sync,
{
    let basis = manifold.orthonormal_basis(point)?;
    let estimates = differencer.directional_derivatives(manifold, f, point, &basis)?;
    GradientAssembler::assemble(&basis, &estimates)
}

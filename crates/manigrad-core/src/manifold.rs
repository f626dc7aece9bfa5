//! Manifold collaborator contract.
//!
//! The gradient engine never implements geometry itself; it consumes the
//! primitives below. A Riemannian manifold (M, g) supplies its intrinsic
//! dimension, membership test, an orthonormal tangent basis, a retraction,
//! the tangent-space projection, and the metric inner product.
//!
//! # Embeddings and representers
//!
//! Concrete manifolds here are embedded in an ambient Euclidean space, with
//! points and tangent vectors carried in ambient coordinates. When the
//! ambient inner product restricted to T_pM coincides with g_p the embedding
//! is *isometric* and a projected ambient gradient is already the Riemannian
//! gradient. Otherwise the projected vector represents the right linear
//! functional under the *wrong* inner product, and the manifold must supply
//! [`Manifold::change_representer`] to correct it. Isometry is an explicit
//! capability flag, not something the engine infers at runtime.

use crate::{error::Result, types::Scalar};
use num_traits::Float;
use std::fmt::Debug;

/// A point on the manifold, in ambient coordinates.
pub type Point<T> = crate::types::DVector<T>;

/// A tangent vector at some base point, in ambient coordinates.
///
/// Tangent vectors are bound to their base point; operations combining two
/// tangent vectors require matching base points.
pub type TangentVector<T> = crate::types::DVector<T>;

/// Trait for Riemannian manifolds consumed by the gradient engine.
///
/// # Contract
///
/// Implementations must guarantee:
///
/// 1. `orthonormal_basis(p)` returns exactly `dimension()` vectors, pairwise
///    orthonormal under `inner_product` at p.
/// 2. `retract(p, Y, t)` traces a curve with `retract(p, Y, 0) = p` and
///    derivative Y at t = 0 (the exponential map qualifies).
/// 3. `project_tangent(p, v)` is idempotent and lands in T_pM.
/// 4. `inner_product` is symmetric, bilinear, and positive definite.
/// 5. If `has_isometric_embedding()` is false, `change_representer(p, v)`
///    returns the unique tangent Z with `⟨Z, Y⟩_p = vᵀY` for all tangent Y
///    (existence and uniqueness follow from positive definiteness on a
///    finite-dimensional space).
pub trait Manifold<T: Scalar>: Debug {
    /// Returns a human-readable name for the manifold.
    fn name(&self) -> &str;

    /// Returns the intrinsic dimension of the manifold.
    ///
    /// For example, the sphere S^{n-1} embedded in ℝⁿ has dimension n-1.
    fn dimension(&self) -> usize;

    /// Returns the dimension of the ambient space.
    fn ambient_dimension(&self) -> usize;

    /// Checks if a point lies on the manifold within a given tolerance.
    fn is_point_on_manifold(&self, point: &Point<T>, tol: T) -> bool;

    /// Returns an orthonormal basis of the tangent space at `point`.
    ///
    /// The returned sequence has exactly `dimension()` vectors, pairwise
    /// orthonormal under the metric at `point`.
    ///
    /// # Errors
    ///
    /// Returns an error if `point` is not on the manifold within numerical
    /// tolerance.
    fn orthonormal_basis(&self, point: &Point<T>) -> Result<Vec<TangentVector<T>>>;

    /// Retraction curve R_p(t·Y): moves from `point` along `tangent` scaled
    /// by `t` and returns the resulting manifold point.
    ///
    /// Must satisfy R_p(0·Y) = p with derivative Y at t = 0.
    ///
    /// # Errors
    ///
    /// Returns an error if `point` is not on the manifold or numerical
    /// issues prevent the computation.
    fn retract(&self, point: &Point<T>, tangent: &TangentVector<T>, t: T) -> Result<Point<T>>;

    /// Projects an ambient vector onto the tangent space at `point`.
    ///
    /// # Errors
    ///
    /// Returns an error if `point` is not on the manifold within numerical
    /// tolerance.
    fn project_tangent(&self, point: &Point<T>, vector: &TangentVector<T>)
        -> Result<TangentVector<T>>;

    /// Computes the Riemannian inner product ⟨u, v⟩_p.
    ///
    /// # Errors
    ///
    /// Returns an error if `point` is not on the manifold or the vectors
    /// are incompatible with it.
    fn inner_product(
        &self,
        point: &Point<T>,
        u: &TangentVector<T>,
        v: &TangentVector<T>,
    ) -> Result<T>;

    /// Computes the metric norm of a tangent vector.
    ///
    /// Equivalent to `sqrt(inner_product(point, v, v))`.
    fn norm(&self, point: &Point<T>, vector: &TangentVector<T>) -> Result<T> {
        self.inner_product(point, vector, vector)
            .map(|ip| <T as Float>::sqrt(ip))
    }

    /// Whether the ambient inner product restricted to T_pM coincides with
    /// the manifold's own metric.
    ///
    /// Isometric manifolds keep the default; non-isometric manifolds return
    /// `false` and override [`Manifold::change_representer`].
    fn has_isometric_embedding(&self) -> bool {
        true
    }

    /// Corrects the Riesz representer of a tangent linear functional from
    /// the ambient inner product to the manifold metric.
    ///
    /// Given `projected ∈ T_pM`, returns the unique Z ∈ T_pM with
    /// `⟨Z, Y⟩_p = projectedᵀY` for every tangent Y. For isometric
    /// embeddings this is the identity, which is the default.
    ///
    /// # Errors
    ///
    /// Returns an error if `point` is not on the manifold within numerical
    /// tolerance.
    fn change_representer(
        &self,
        _point: &Point<T>,
        projected: &TangentVector<T>,
    ) -> Result<TangentVector<T>> {
        Ok(projected.clone())
    }
}

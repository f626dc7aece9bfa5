//! Manifold collaborators for the manigrad gradient engine.
//!
//! Concrete implementations of the [`manigrad_core::Manifold`] contract:
//!
//! - [`Sphere`]: the unit sphere S^{n-1} ⊂ ℝⁿ, the canonical *isometric*
//!   embedding (projected ambient gradients are already Riemannian).
//! - [`SpdMatrices`]: symmetric positive definite matrices under the
//!   affine-invariant metric, the canonical *non-isometric* embedding
//!   (projected gradients require a change of representer).

pub mod sphere;
pub mod spd;
pub mod util;

pub use sphere::Sphere;
pub use spd::SpdMatrices;

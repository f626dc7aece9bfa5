//! Sphere manifold S^{n-1} = {x in R^n : ||x|| = 1}
//!
//! The unit sphere is the canonical isometric embedding: its metric is the
//! Euclidean inner product restricted to the tangent space, so a projected
//! ambient gradient already is the Riemannian gradient and the representer
//! change is the identity.

use manigrad_core::{
    error::{GradientError, Result},
    manifold::{Manifold, Point, TangentVector},
    types::Scalar,
};
use num_traits::Float;
use rand_distr::{Distribution, StandardNormal};

/// The unit sphere S^{n-1} in ℝⁿ.
///
/// # Mathematical Properties
///
/// - **Dimension**: n-1 (for sphere in ℝⁿ)
/// - **Tangent space**: T_x S^{n-1} = {v in ℝⁿ : xᵀv = 0}
/// - **Riemannian metric**: inherited from Euclidean space (canonical metric)
/// - **Exponential map**: exp_x(v) = cos(‖v‖) x + sin(‖v‖) v/‖v‖
///
/// The retraction used here is the exact exponential map, moving along
/// great circles.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Ambient dimension (n)
    ambient_dim: usize,
}

impl Sphere {
    /// Creates a new sphere S^{n-1} embedded in ℝⁿ.
    ///
    /// # Errors
    ///
    /// Returns an error if `ambient_dim` < 2.
    pub fn new(ambient_dim: usize) -> Result<Self> {
        if ambient_dim < 2 {
            return Err(GradientError::invalid_point(
                "Sphere requires ambient dimension >= 2",
            ));
        }
        Ok(Self { ambient_dim })
    }

    /// Samples a point uniformly on the sphere from an injected generator.
    ///
    /// Seeding is the caller's concern; tests pass an explicitly seeded
    /// `StdRng` so fixtures are reproducible.
    pub fn random_point<T, R>(&self, rng: &mut R) -> Point<T>
    where
        T: Scalar,
        R: rand::Rng + ?Sized,
    {
        let normal = StandardNormal;
        let mut point = Point::<T>::zeros(self.ambient_dim);
        for value in point.iter_mut() {
            let sample: f64 = normal.sample(rng);
            *value = <T as Scalar>::from_f64(sample);
        }
        let norm = point.norm();
        point / norm
    }

    fn check_point<T: Scalar>(&self, point: &Point<T>) -> Result<()> {
        if point.len() != self.ambient_dim {
            return Err(GradientError::dimension_mismatch(
                self.ambient_dim,
                point.len(),
            ));
        }
        if !self.is_point_on_manifold(point, T::MANIFOLD_TOLERANCE) {
            return Err(GradientError::invalid_point(format!(
                "norm differs from 1 by {}",
                <T as Float>::abs(point.norm() - T::one())
            )));
        }
        Ok(())
    }
}

impl<T: Scalar> Manifold<T> for Sphere {
    fn name(&self) -> &str {
        "Sphere"
    }

    fn dimension(&self) -> usize {
        self.ambient_dim - 1
    }

    fn ambient_dimension(&self) -> usize {
        self.ambient_dim
    }

    fn is_point_on_manifold(&self, point: &Point<T>, tol: T) -> bool {
        point.len() == self.ambient_dim && <T as Float>::abs(point.norm() - T::one()) < tol
    }

    /// Orthonormal basis of x⊥ from the Householder frame carrying e₁ to
    /// ±x: the reflector's remaining columns are orthonormal and orthogonal
    /// to its first column ±x.
    fn orthonormal_basis(&self, point: &Point<T>) -> Result<Vec<TangentVector<T>>> {
        self.check_point(point)?;

        // u = x + sign(x₁)·e₁; the sign keeps u away from cancellation.
        let sign = if point[0] >= T::zero() {
            T::one()
        } else {
            -T::one()
        };
        let mut u = point.clone();
        u[0] += sign;
        let uu = u.norm_squared();

        let two = <T as Scalar>::from_f64(2.0);
        let mut basis = Vec::with_capacity(self.ambient_dim - 1);
        for j in 1..self.ambient_dim {
            // Column j of I − 2uuᵀ/uᵀu
            let scale = two * u[j] / uu;
            let mut column = &u * (-scale);
            column[j] += T::one();
            basis.push(column);
        }
        Ok(basis)
    }

    fn retract(&self, point: &Point<T>, tangent: &TangentVector<T>, t: T) -> Result<Point<T>> {
        self.check_point(point)?;

        let step = tangent * t;
        let theta = step.norm();
        if theta < T::EPSILON {
            return Ok(point.clone());
        }

        let cos_theta = <T as Float>::cos(theta);
        let sin_theta = <T as Float>::sin(theta);
        Ok(point * cos_theta + step * (sin_theta / theta))
    }

    fn project_tangent(
        &self,
        point: &Point<T>,
        vector: &TangentVector<T>,
    ) -> Result<TangentVector<T>> {
        self.check_point(point)?;
        // P_x(v) = v − ⟨v, x⟩x
        Ok(vector - point * vector.dot(point))
    }

    fn inner_product(
        &self,
        point: &Point<T>,
        u: &TangentVector<T>,
        v: &TangentVector<T>,
    ) -> Result<T> {
        self.check_point(point)?;
        Ok(u.dot(v))
    }
}

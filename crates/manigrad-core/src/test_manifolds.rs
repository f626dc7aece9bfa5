//! Minimal manifolds for exercising the engine contracts in tests.

use crate::{
    error::Result,
    manifold::{Manifold, Point, TangentVector},
    types::Scalar,
};

/// Flat Euclidean space ℝⁿ with the standard inner product.
///
/// The identity-geometry manifold: retraction is straight-line motion, the
/// tangent projection is the identity, and the orthonormal basis is the
/// standard basis. Useful as a control case because every approximation is
/// exact up to differencing error.
#[derive(Debug, Clone)]
pub struct TestEuclidean {
    dim: usize,
}

impl TestEuclidean {
    /// Creates flat ℝⁿ.
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl<T: Scalar> Manifold<T> for TestEuclidean {
    fn name(&self) -> &str {
        "TestEuclidean"
    }

    fn dimension(&self) -> usize {
        self.dim
    }

    fn ambient_dimension(&self) -> usize {
        self.dim
    }

    fn is_point_on_manifold(&self, point: &Point<T>, _tol: T) -> bool {
        point.len() == self.dim
    }

    fn orthonormal_basis(&self, _point: &Point<T>) -> Result<Vec<TangentVector<T>>> {
        Ok((0..self.dim)
            .map(|i| {
                let mut e = TangentVector::zeros(self.dim);
                e[i] = T::one();
                e
            })
            .collect())
    }

    fn retract(&self, point: &Point<T>, tangent: &TangentVector<T>, t: T) -> Result<Point<T>> {
        Ok(point + tangent * t)
    }

    fn project_tangent(
        &self,
        _point: &Point<T>,
        vector: &TangentVector<T>,
    ) -> Result<TangentVector<T>> {
        Ok(vector.clone())
    }

    fn inner_product(
        &self,
        _point: &Point<T>,
        u: &TangentVector<T>,
        v: &TangentVector<T>,
    ) -> Result<T> {
        Ok(u.dot(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DVector;

    #[test]
    fn test_euclidean_basis_is_standard() {
        let manifold = TestEuclidean::new(3);
        let point = DVector::<f64>::zeros(3);
        let basis = manifold.orthonormal_basis(&point).unwrap();

        assert_eq!(basis.len(), 3);
        for (i, e) in basis.iter().enumerate() {
            assert_eq!(e[i], 1.0);
            assert_eq!(e.norm(), 1.0);
        }
    }

    #[test]
    fn test_euclidean_retraction_is_linear() {
        let manifold = TestEuclidean::new(2);
        let point = DVector::from_vec(vec![1.0, 1.0]);
        let tangent = DVector::from_vec(vec![0.0, 2.0]);

        let moved = manifold.retract(&point, &tangent, 0.5).unwrap();
        assert_eq!(moved, DVector::from_vec(vec![1.0, 2.0]));

        // R_p(0 · Y) = p
        let fixed = manifold.retract(&point, &tangent, 0.0).unwrap();
        assert_eq!(fixed, point);
    }
}

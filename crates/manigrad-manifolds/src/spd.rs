//! Symmetric positive definite matrices S⁺⁺(n) under the affine-invariant
//! metric.
//!
//! Points are n×n SPD matrices carried flattened (column-major) in ℝ^{n²},
//! so the core engine sees the same ambient representation as for vector
//! manifolds. The tangent space at P is the symmetric matrices.
//!
//! # Geometry
//!
//! - **Metric**: g_P(U, V) = tr(P⁻¹ U P⁻¹ V)
//! - **Exponential map**: exp_P(V) = P^{1/2} exp(P^{-1/2} V P^{-1/2}) P^{1/2}
//! - **Logarithmic map**: log_P(Q) = P^{1/2} log(P^{-1/2} Q P^{-1/2}) P^{1/2}
//!
//! The embedding is *not* isometric: the ambient Frobenius inner product
//! differs from g_P, so a projected ambient gradient must be corrected via
//! the representer change Z = P·V·P, the unique symmetric Z with
//! tr(P⁻¹ Z P⁻¹ Y) = tr(V Y) for all symmetric Y.

use crate::util::{flatten, sym_expm, sym_logm, sym_sqrtm, symmetrize, unflatten};
use manigrad_core::{
    error::{GradientError, Result},
    manifold::{Manifold, Point, TangentVector},
    types::{DMatrix, Scalar},
};
use num_traits::Float;

/// The manifold S⁺⁺(n) of n×n symmetric positive definite matrices with
/// the affine-invariant metric.
#[derive(Debug, Clone)]
pub struct SpdMatrices {
    /// Matrix side length (n)
    n: usize,
}

impl SpdMatrices {
    /// Creates the SPD manifold of n×n matrices.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(GradientError::invalid_point(
                "SPD manifold requires n >= 1",
            ));
        }
        Ok(Self { n })
    }

    /// Returns the matrix side length n.
    pub fn matrix_dim(&self) -> usize {
        self.n
    }

    /// Logarithmic map log_P(Q), returned as a flattened tangent vector.
    ///
    /// # Errors
    ///
    /// Returns an error if either argument is not SPD within tolerance.
    pub fn log_map<T: Scalar>(&self, point: &Point<T>, other: &Point<T>) -> Result<TangentVector<T>> {
        let p = self.check_point(point)?;
        let q = self.check_point(other)?;

        let root = sym_sqrtm(&p)?;
        let inv_root = invert_spd(&root)?;
        let middle = sym_logm(&symmetrize(&(&inv_root * q * &inv_root)))?;
        Ok(flatten(&(&root * middle * &root)))
    }

    /// Validates and unflattens a point, returning it in matrix form.
    fn check_point<T: Scalar>(&self, point: &Point<T>) -> Result<DMatrix<T>> {
        let matrix = unflatten(point, self.n)?;
        let tol = T::MANIFOLD_TOLERANCE;

        let asymmetry = (&matrix - matrix.transpose()).norm();
        if asymmetry > tol {
            return Err(GradientError::invalid_point(format!(
                "matrix is not symmetric: asymmetry {asymmetry}"
            )));
        }
        let eigen = matrix.clone().symmetric_eigen();
        let min_eigenvalue = eigen
            .eigenvalues
            .iter()
            .copied()
            .fold(<T as Float>::infinity(), <T as Float>::min);
        if min_eigenvalue <= T::zero() {
            return Err(GradientError::invalid_point(format!(
                "matrix is not positive definite: min eigenvalue {min_eigenvalue}"
            )));
        }
        Ok(matrix)
    }
}

/// Inverse of an SPD (or SPD-root) matrix.
fn invert_spd<T: Scalar>(matrix: &DMatrix<T>) -> Result<DMatrix<T>> {
    matrix.clone().try_inverse().ok_or_else(|| {
        GradientError::invalid_point("matrix is numerically singular".to_string())
    })
}

impl<T: Scalar> Manifold<T> for SpdMatrices {
    fn name(&self) -> &str {
        "SPD"
    }

    fn dimension(&self) -> usize {
        self.n * (self.n + 1) / 2
    }

    fn ambient_dimension(&self) -> usize {
        self.n * self.n
    }

    fn is_point_on_manifold(&self, point: &Point<T>, tol: T) -> bool {
        let Ok(matrix) = unflatten(point, self.n) else {
            return false;
        };
        if (&matrix - matrix.transpose()).norm() > tol {
            return false;
        }
        let eigen = matrix.symmetric_eigen();
        eigen.eigenvalues.iter().all(|&lambda| lambda > T::zero())
    }

    /// Basis P^{1/2}·Sₖ·P^{1/2} for the Frobenius-orthonormal symmetric
    /// basis Sₖ (unit diagonals E_ii, scaled pairs (E_ij + E_ji)/√2).
    ///
    /// Orthonormality under g_P follows from
    /// g_P(P^{1/2}S_aP^{1/2}, P^{1/2}S_bP^{1/2}) = tr(S_a S_b).
    fn orthonormal_basis(&self, point: &Point<T>) -> Result<Vec<TangentVector<T>>> {
        let p = self.check_point(point)?;
        let root = sym_sqrtm(&p)?;

        let inv_sqrt_2 = <T as Scalar>::from_f64(std::f64::consts::FRAC_1_SQRT_2);
        let mut basis = Vec::with_capacity(self.n * (self.n + 1) / 2);
        for i in 0..self.n {
            for j in i..self.n {
                let mut s = DMatrix::<T>::zeros(self.n, self.n);
                if i == j {
                    s[(i, i)] = T::one();
                } else {
                    s[(i, j)] = inv_sqrt_2;
                    s[(j, i)] = inv_sqrt_2;
                }
                basis.push(flatten(&(&root * s * &root)));
            }
        }
        Ok(basis)
    }

    fn retract(&self, point: &Point<T>, tangent: &TangentVector<T>, t: T) -> Result<Point<T>> {
        let p = self.check_point(point)?;
        let v = symmetrize(&unflatten(tangent, self.n)?) * t;

        let root = sym_sqrtm(&p)?;
        let inv_root = invert_spd(&root)?;
        let middle = sym_expm(&symmetrize(&(&inv_root * v * &inv_root)))?;
        Ok(flatten(&(&root * middle * &root)))
    }

    fn project_tangent(
        &self,
        point: &Point<T>,
        vector: &TangentVector<T>,
    ) -> Result<TangentVector<T>> {
        self.check_point(point)?;
        let matrix = unflatten(vector, self.n)?;
        Ok(flatten(&symmetrize(&matrix)))
    }

    fn inner_product(
        &self,
        point: &Point<T>,
        u: &TangentVector<T>,
        v: &TangentVector<T>,
    ) -> Result<T> {
        let p = self.check_point(point)?;
        let p_inv = invert_spd(&p)?;
        let u_m = unflatten(u, self.n)?;
        let v_m = unflatten(v, self.n)?;

        // g_P(U, V) = tr(P⁻¹ U P⁻¹ V)
        Ok((&p_inv * u_m * &p_inv * v_m).trace())
    }

    fn has_isometric_embedding(&self) -> bool {
        false
    }

    /// Representer change from the Frobenius inner product to g_P:
    /// Z = P·V·P.
    fn change_representer(
        &self,
        point: &Point<T>,
        projected: &TangentVector<T>,
    ) -> Result<TangentVector<T>> {
        let p = self.check_point(point)?;
        let v = symmetrize(&unflatten(projected, self.n)?);
        Ok(flatten(&(&p * v * &p)))
    }
}

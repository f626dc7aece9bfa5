//! Symmetric-matrix helpers shared by the matrix manifolds.
//!
//! Matrix manifolds carry their points flattened into ambient vectors so
//! the core engine sees a single representation. These helpers move between
//! the two forms and evaluate eigenvalue functions of symmetric matrices.

use manigrad_core::{
    error::{GradientError, Result},
    types::{DMatrix, DVector, Scalar},
};

/// Reshapes a flattened n×n matrix (column-major) back into matrix form.
///
/// # Errors
///
/// Returns a dimension mismatch if the vector does not hold n² entries.
pub fn unflatten<T: Scalar>(vector: &DVector<T>, n: usize) -> Result<DMatrix<T>> {
    if vector.len() != n * n {
        return Err(GradientError::dimension_mismatch(n * n, vector.len()));
    }
    Ok(DMatrix::from_column_slice(n, n, vector.as_slice()))
}

/// Flattens an n×n matrix into a column-major ambient vector.
pub fn flatten<T: Scalar>(matrix: &DMatrix<T>) -> DVector<T> {
    DVector::from_column_slice(matrix.as_slice())
}

/// Symmetric part (M + Mᵀ)/2.
pub fn symmetrize<T: Scalar>(matrix: &DMatrix<T>) -> DMatrix<T> {
    let half = <T as Scalar>::from_f64(0.5);
    (matrix + matrix.transpose()) * half
}

/// Applies a scalar function to the eigenvalues of a symmetric matrix:
/// `Q diag(f(λᵢ)) Qᵀ`.
///
/// # Errors
///
/// Propagates any error raised by `f` on an eigenvalue (used to reject
/// out-of-domain eigenvalues, e.g. log of a non-positive value).
pub fn sym_eigen_map<T, F>(matrix: &DMatrix<T>, f: F) -> Result<DMatrix<T>>
where
    T: Scalar,
    F: Fn(T) -> Result<T>,
{
    let eigen = matrix.clone().symmetric_eigen();
    let mut mapped = eigen.eigenvalues.clone();
    for value in mapped.iter_mut() {
        *value = f(*value)?;
    }
    let q = &eigen.eigenvectors;
    Ok(q * DMatrix::from_diagonal(&mapped) * q.transpose())
}

/// Matrix exponential of a symmetric matrix.
pub fn sym_expm<T: Scalar>(matrix: &DMatrix<T>) -> Result<DMatrix<T>> {
    sym_eigen_map(matrix, |lambda| Ok(num_traits::Float::exp(lambda)))
}

/// Matrix logarithm of a symmetric positive definite matrix.
///
/// # Errors
///
/// Returns [`GradientError::InvalidPoint`] if an eigenvalue is not
/// strictly positive.
pub fn sym_logm<T: Scalar>(matrix: &DMatrix<T>) -> Result<DMatrix<T>> {
    sym_eigen_map(matrix, |lambda| {
        if lambda <= T::zero() {
            return Err(GradientError::invalid_point(format!(
                "matrix logarithm requires positive eigenvalues, got {lambda}"
            )));
        }
        Ok(num_traits::Float::ln(lambda))
    })
}

/// Square root of a symmetric positive definite matrix.
///
/// # Errors
///
/// Returns [`GradientError::InvalidPoint`] if an eigenvalue is negative.
pub fn sym_sqrtm<T: Scalar>(matrix: &DMatrix<T>) -> Result<DMatrix<T>> {
    sym_eigen_map(matrix, |lambda| {
        if lambda < T::zero() {
            return Err(GradientError::invalid_point(format!(
                "matrix square root requires nonnegative eigenvalues, got {lambda}"
            )));
        }
        Ok(num_traits::Float::sqrt(lambda))
    })
}

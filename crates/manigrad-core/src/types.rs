//! Type definitions and aliases for gradient approximation.
//!
//! This module provides the scalar abstraction shared by all components,
//! together with type aliases for the dynamically-sized vectors and matrices
//! used to represent ambient coordinates.

use nalgebra::{Dyn, OMatrix, OVector, RealField, Scalar as NalgebraScalar};
use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types used in gradient computations (f32 or f64).
///
/// This trait combines the numeric traits required by the differencing and
/// conversion engines, and carries the per-precision tolerance constants
/// used when validating collaborator inputs.
pub trait Scalar:
    NalgebraScalar
    + RealField
    + Float
    + FromPrimitive
    + Display
    + Debug
    + Default
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Machine epsilon for this scalar type.
    const EPSILON: Self;

    /// Tolerance for checking if a point is on the manifold.
    const MANIFOLD_TOLERANCE: Self;

    /// Tolerance for checking basis orthonormality.
    const ORTHONORMALITY_TOLERANCE: Self;

    /// Default finite-difference step size (≈ √ε, balancing truncation
    /// against roundoff for well-scaled objectives).
    const DEFAULT_STEP_SIZE: Self;

    /// Convert from f64 (for constants).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails. Use `try_from_f64` for a
    /// non-panicking version.
    fn from_f64(v: f64) -> Self {
        <Self as FromPrimitive>::from_f64(v).expect("Failed to convert from f64")
    }

    /// Try to convert from f64.
    fn try_from_f64(v: f64) -> Option<Self> {
        <Self as FromPrimitive>::from_f64(v)
    }

    /// Convert to f64 (for display and error messages).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails. Use `try_to_f64` for a non-panicking
    /// version.
    fn to_f64(self) -> f64 {
        num_traits::cast(self).expect("Failed to convert to f64")
    }

    /// Try to convert to f64.
    fn try_to_f64(self) -> Option<f64> {
        num_traits::cast(self)
    }

    /// Convert from usize (for dimension counts).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails.
    fn from_usize(v: usize) -> Self {
        <Self as FromPrimitive>::from_usize(v).expect("Failed to convert from usize")
    }
}

impl Scalar for f32 {
    const EPSILON: Self = f32::EPSILON;
    const MANIFOLD_TOLERANCE: Self = 1e-5;
    const ORTHONORMALITY_TOLERANCE: Self = 1e-4;
    const DEFAULT_STEP_SIZE: Self = 3.45e-4;
}

impl Scalar for f64 {
    const EPSILON: Self = f64::EPSILON;
    const MANIFOLD_TOLERANCE: Self = 1e-10;
    const ORTHONORMALITY_TOLERANCE: Self = 1e-8;
    const DEFAULT_STEP_SIZE: Self = 1.49e-8;
}

/// Type alias for a dynamically-sized matrix.
pub type DMatrix<T> = OMatrix<T, Dyn, Dyn>;

/// Type alias for a dynamically-sized vector.
pub type DVector<T> = OVector<T, Dyn>;

//! Error types for gradient approximation and conversion.
//!
//! Every failure surfaces immediately to the caller: numerical failures are
//! deterministic, so nothing is retried, and no default or degraded gradient
//! is ever substituted — downstream optimizers depend on never receiving a
//! silently wrong gradient. Recovery (switching backend, adjusting the step
//! size) is a caller-level decision.

use thiserror::Error;

/// Errors that can occur while approximating or converting a gradient.
#[derive(Debug, Clone, Error)]
pub enum GradientError {
    /// The finite-difference step size is not strictly positive.
    ///
    /// Step sizes must satisfy h > 0. Note that a *valid* but poorly chosen
    /// h degrades accuracy silently rather than raising this error:
    /// truncation error shrinks and roundoff error grows as h → 0.
    #[error("Invalid step size: {value} (must be strictly positive)")]
    InvalidStep {
        /// The offending value, rendered for display
        value: String,
    },

    /// The supplied tangent basis is not usable.
    ///
    /// Raised when the basis has the wrong number of vectors or when its
    /// vectors are not pairwise orthonormal under the manifold metric at
    /// the base point, within tolerance.
    #[error("Invalid tangent basis: {reason}")]
    InvalidBasis {
        /// Description of why the basis is invalid
        reason: String,
    },

    /// Dimension mismatch between collaborating values.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions
        expected: String,
        /// Actual dimensions
        actual: String,
    },

    /// Point is not on the manifold within numerical tolerance.
    #[error("Point is not on the manifold: {reason}")]
    InvalidPoint {
        /// Description of why the point is invalid
        reason: String,
    },

    /// The ambient extension was evaluated outside its valid domain.
    ///
    /// Numerical-differencing backends perturb off-manifold, so the ambient
    /// extension F must be defined on an open neighborhood of the base
    /// point, not merely on the manifold itself.
    #[error("Ambient extension undefined at evaluation point: {reason}")]
    UndefinedAmbientExtension {
        /// Description of the domain violation
        reason: String,
    },

    /// The differentiation backend cannot handle an operation inside F.
    ///
    /// Automatic-differentiation backends must fail on unsupported
    /// primitives (eigendecomposition, for instance) rather than silently
    /// falling back to an approximation.
    #[error("Backend '{backend}' cannot differentiate operation: {operation}")]
    BackendCapability {
        /// Name of the backend that failed
        backend: String,
        /// The unsupported operation
        operation: String,
    },

    /// Advisory: the estimated truncation/roundoff error exceeds a bound.
    ///
    /// Only raised by callers or extensions that estimate error bounds; the
    /// default differencing paths never produce it.
    #[error("Numerical accuracy bound violated: {reason}")]
    NumericalAccuracy {
        /// Description of the accuracy violation
        reason: String,
    },
}

impl GradientError {
    /// Create an `InvalidStep` error for a rejected step size.
    pub fn invalid_step<S: std::fmt::Display>(value: S) -> Self {
        Self::InvalidStep {
            value: value.to_string(),
        }
    }

    /// Create an `InvalidBasis` error with a custom reason.
    pub fn invalid_basis<S: Into<String>>(reason: S) -> Self {
        Self::InvalidBasis {
            reason: reason.into(),
        }
    }

    /// Create a `DimensionMismatch` error.
    pub fn dimension_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create an `InvalidPoint` error with a custom reason.
    pub fn invalid_point<S: Into<String>>(reason: S) -> Self {
        Self::InvalidPoint {
            reason: reason.into(),
        }
    }

    /// Create an `UndefinedAmbientExtension` error with a custom reason.
    pub fn undefined_ambient_extension<S: Into<String>>(reason: S) -> Self {
        Self::UndefinedAmbientExtension {
            reason: reason.into(),
        }
    }

    /// Create a `BackendCapability` error for an unsupported operation.
    pub fn backend_capability<S1, S2>(backend: S1, operation: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self::BackendCapability {
            backend: backend.into(),
            operation: operation.into(),
        }
    }

    /// Create a `NumericalAccuracy` advisory error.
    pub fn numerical_accuracy<S: Into<String>>(reason: S) -> Self {
        Self::NumericalAccuracy {
            reason: reason.into(),
        }
    }
}

/// Result type alias for operations that can produce `GradientError`.
pub type Result<T> = std::result::Result<T, GradientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = GradientError::invalid_step(-0.5);
        assert!(matches!(err, GradientError::InvalidStep { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid step size: -0.5 (must be strictly positive)"
        );

        let err = GradientError::dimension_mismatch(4, 5);
        assert!(matches!(err, GradientError::DimensionMismatch { .. }));
        assert_eq!(err.to_string(), "Dimension mismatch: expected 4, got 5");
    }

    #[test]
    fn test_backend_capability_context() {
        let err = GradientError::backend_capability("forward-mode", "eigendecomposition");

        if let GradientError::BackendCapability { backend, operation } = &err {
            assert_eq!(backend, "forward-mode");
            assert_eq!(operation, "eigendecomposition");
        } else {
            panic!("Expected BackendCapability variant");
        }
        assert!(err.to_string().contains("eigendecomposition"));
    }

    #[test]
    fn test_error_display() {
        let errors = vec![
            GradientError::invalid_step(0.0),
            GradientError::invalid_basis("vectors 0 and 1 are not orthogonal"),
            GradientError::dimension_mismatch("201", "200"),
            GradientError::invalid_point("norm differs from 1 by 0.3"),
            GradientError::undefined_ambient_extension("log of non-positive matrix"),
            GradientError::backend_capability("forward-mode", "matrix square root"),
            GradientError::numerical_accuracy("estimated error 1e-2 exceeds bound 1e-6"),
        ];

        for err in errors {
            // Ensure Display produces non-empty strings
            assert!(!err.to_string().is_empty());
        }
    }
}

//! Differentiation backend abstraction.
//!
//! A backend exposes a single capability: producing the Euclidean gradient
//! of an ambient extension at a point. Two canonical families implement it:
//! numerical differencing (this module) which works for any objective
//! evaluable near the point, and automatic differentiation
//! (`manigrad-autodiff`) which is exact to floating-point precision but
//! must fail on primitives it cannot differentiate. Callers choose an
//! adapter explicitly; nothing is selected by runtime type inspection.

use crate::{
    cost_function::CostFunction,
    error::{GradientError, Result},
    finite_difference::DifferenceScheme,
    types::{DVector, Scalar},
};
use std::fmt::Debug;

/// Single-capability interface for ambient gradient computation.
///
/// The trait is generic over the function type `F` so each adapter can
/// demand exactly the capabilities it needs: the numerical adapter only
/// evaluates (`F: CostFunction`), while autodiff adapters require functions
/// expressed over their differentiable number type.
pub trait DifferentiationBackend<T: Scalar, F>: Debug {
    /// Computes the Euclidean gradient of `f` at `point`, in ambient
    /// coordinates.
    ///
    /// # Errors
    ///
    /// - [`GradientError::UndefinedAmbientExtension`] if `f` is evaluated
    ///   outside its valid domain (numerical adapters perturb off-manifold).
    /// - [`GradientError::BackendCapability`] if the adapter cannot
    ///   differentiate an operation used inside `f`.
    fn ambient_gradient(&self, f: &F, point: &DVector<T>) -> Result<DVector<T>>;
}

/// Numerical-differencing backend: coordinate-wise finite differences on
/// the ambient space.
///
/// Requires `f` to be defined on an open neighborhood of the point, since
/// every coordinate is perturbed off-manifold. Accuracy is subject to the
/// same truncation/roundoff tradeoff as the intrinsic differencer, and the
/// step size is an explicit parameter for the same reason.
#[derive(Debug, Clone, Copy)]
pub struct FiniteDifferenceBackend<T: Scalar> {
    step_size: T,
    scheme: DifferenceScheme,
}

impl<T: Scalar> FiniteDifferenceBackend<T> {
    /// Creates a backend with the given step size and scheme.
    ///
    /// # Errors
    ///
    /// Returns [`GradientError::InvalidStep`] unless `step_size > 0`.
    pub fn new(step_size: T, scheme: DifferenceScheme) -> Result<Self> {
        if !(step_size > T::zero()) {
            return Err(GradientError::invalid_step(step_size));
        }
        Ok(Self { step_size, scheme })
    }

    /// Creates a central-difference backend with the default step size.
    pub fn central() -> Self {
        Self {
            step_size: T::DEFAULT_STEP_SIZE,
            scheme: DifferenceScheme::Central,
        }
    }

    /// Returns the configured step size.
    pub fn step_size(&self) -> T {
        self.step_size
    }
}

impl<T, F> DifferentiationBackend<T, F> for FiniteDifferenceBackend<T>
where
    T: Scalar,
    F: CostFunction<T>,
{
    fn ambient_gradient(&self, f: &F, point: &DVector<T>) -> Result<DVector<T>> {
        let n = point.len();
        let h = self.step_size;
        let mut gradient = DVector::zeros(n);
        let mut probe = point.clone();

        match self.scheme {
            DifferenceScheme::Forward => {
                let f_base = f.cost(point)?;
                for i in 0..n {
                    probe[i] = point[i] + h;
                    gradient[i] = (f.cost(&probe)? - f_base) / h;
                    probe[i] = point[i];
                }
            }
            DifferenceScheme::Central => {
                let two_h = h + h;
                for i in 0..n {
                    probe[i] = point[i] + h;
                    let ahead = f.cost(&probe)?;
                    probe[i] = point[i] - h;
                    let behind = f.cost(&probe)?;
                    probe[i] = point[i];
                    gradient[i] = (ahead - behind) / two_h;
                }
            }
        }
        Ok(gradient)
    }
}

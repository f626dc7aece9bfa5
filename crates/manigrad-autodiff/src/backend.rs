//! Forward-mode differentiation backend.
//!
//! One seeded dual pass per ambient coordinate: n passes, each costing one
//! objective evaluation, no step-size tradeoff. The contract deliberately
//! narrows what objectives qualify — they must be expressible over dual
//! numbers, and must surface a capability error for any primitive without
//! a dual rule instead of substituting an approximation.

use crate::dual::Dual;
use manigrad_core::{
    backend::DifferentiationBackend,
    error::Result,
    types::{DVector, Scalar},
};
use std::fmt::Debug;

/// Objectives differentiable by the forward-mode backend.
///
/// Implementations evaluate the ambient extension over dual numbers. An
/// objective built on a primitive with no dual rule (eigendecomposition,
/// for instance) must return
/// [`manigrad_core::GradientError::BackendCapability`] — never a silent
/// numerical fallback.
pub trait DualFunction<T: Scalar>: Debug {
    /// Evaluates the objective on dual inputs, propagating derivative
    /// parts.
    fn evaluate_dual(&self, point: &[Dual<T>]) -> Result<Dual<T>>;
}

/// Automatic-differentiation adapter: exact ambient gradients via one
/// forward pass per coordinate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardModeBackend;

impl ForwardModeBackend {
    /// Creates the forward-mode backend.
    pub fn new() -> Self {
        Self
    }
}

impl<T, F> DifferentiationBackend<T, F> for ForwardModeBackend
where
    T: Scalar,
    F: DualFunction<T>,
{
    fn ambient_gradient(&self, f: &F, point: &DVector<T>) -> Result<DVector<T>> {
        let n = point.len();
        let mut inputs: Vec<Dual<T>> = point.iter().map(|&x| Dual::constant(x)).collect();
        let mut gradient = DVector::zeros(n);

        for i in 0..n {
            inputs[i] = Dual::variable(point[i]);
            gradient[i] = f.evaluate_dual(&inputs)?.derivative;
            inputs[i] = Dual::constant(point[i]);
        }
        Ok(gradient)
    }
}

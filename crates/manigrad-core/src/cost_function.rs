//! Scalar objective contract.
//!
//! Objectives are the other external collaborator of the gradient engine:
//! a deterministic scalar function evaluated either intrinsically on
//! manifold points (f: M → ℝ) or on an ambient neighborhood of them
//! (an ambient extension F with F|_M = f).

use crate::{
    error::Result,
    types::{DMatrix, DVector, Scalar},
};
use std::fmt::Debug;

/// Trait for deterministic scalar objectives.
///
/// The same contract serves both gradient modes. In intrinsic mode the
/// engine only ever evaluates on-manifold points produced by retraction. In
/// embedding mode the function is the ambient extension F and must be
/// defined on an open ambient neighborhood of the base point whenever a
/// numerical-differencing backend is used, since such backends perturb
/// off-manifold; evaluating outside the valid domain should return
/// [`crate::GradientError::UndefinedAmbientExtension`].
pub trait CostFunction<T: Scalar>: Debug {
    /// Evaluates the objective at a point (ambient coordinates).
    ///
    /// Must be deterministic: identical points yield identical values.
    fn cost(&self, point: &DVector<T>) -> Result<T>;
}

/// The quadratic form f(x) = xᵀAx for a fixed symmetric matrix A.
///
/// Restricted to the unit sphere this is the Rayleigh quotient, the standard
/// smooth objective for exercising gradient approximation: its Euclidean
/// gradient 2Ax and sphere gradient 2(Ax − x·xᵀAx) are known in closed form.
#[derive(Debug, Clone)]
pub struct QuadraticForm<T: Scalar> {
    /// The quadratic form matrix (should be symmetric)
    pub a: DMatrix<T>,
}

impl<T: Scalar> QuadraticForm<T> {
    /// Creates a new quadratic form from a symmetric matrix.
    pub fn new(a: DMatrix<T>) -> Self {
        Self { a }
    }
}

impl<T: Scalar> CostFunction<T> for QuadraticForm<T> {
    fn cost(&self, point: &DVector<T>) -> Result<T> {
        let ax = &self.a * point;
        Ok(point.dot(&ax))
    }
}

/// Wrapper counting evaluations, for testing evaluation-cost contracts.
///
/// The counter is atomic so the wrapper stays usable under the parallel
/// differencing path.
#[derive(Debug)]
pub struct CountingCostFunction<F> {
    /// The underlying objective
    pub inner: F,
    /// Number of cost evaluations
    pub cost_count: std::sync::atomic::AtomicUsize,
}

impl<F> CountingCostFunction<F> {
    /// Creates a new counting wrapper around an objective.
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            cost_count: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Returns the current evaluation count.
    pub fn count(&self) -> usize {
        self.cost_count.load(std::sync::atomic::Ordering::Relaxed)
    }
}

impl<T: Scalar, F: CostFunction<T>> CostFunction<T> for CountingCostFunction<F> {
    fn cost(&self, point: &DVector<T>) -> Result<T> {
        self.cost_count
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        self.inner.cost(point)
    }
}

//! Dual numbers for forward-mode differentiation.
//!
//! A dual number a + bε with ε² = 0 carries a value and its derivative
//! along one seeded direction. Arithmetic propagates both parts, so
//! evaluating a function on duals yields the exact directional derivative
//! to floating-point precision — no step size, no truncation error.

use manigrad_core::types::Scalar;
use num_traits::Float;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A dual number: value plus derivative part along the seeded direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual<T: Scalar> {
    /// Function value
    pub value: T,
    /// Derivative part
    pub derivative: T,
}

impl<T: Scalar> Dual<T> {
    /// Creates a dual number with the given value and derivative part.
    pub fn new(value: T, derivative: T) -> Self {
        Self { value, derivative }
    }

    /// A constant: derivative part zero.
    pub fn constant(value: T) -> Self {
        Self::new(value, T::zero())
    }

    /// A seeded variable: derivative part one.
    pub fn variable(value: T) -> Self {
        Self::new(value, T::one())
    }

    /// Sine.
    pub fn sin(self) -> Self {
        Self::new(
            <T as Float>::sin(self.value),
            self.derivative * <T as Float>::cos(self.value),
        )
    }

    /// Cosine.
    pub fn cos(self) -> Self {
        Self::new(
            <T as Float>::cos(self.value),
            -self.derivative * <T as Float>::sin(self.value),
        )
    }

    /// Exponential.
    pub fn exp(self) -> Self {
        let e = <T as Float>::exp(self.value);
        Self::new(e, self.derivative * e)
    }

    /// Natural logarithm. The value part follows IEEE semantics for
    /// non-positive inputs; domain checks belong to the objective.
    pub fn ln(self) -> Self {
        Self::new(
            <T as Float>::ln(self.value),
            self.derivative / self.value,
        )
    }

    /// Square root.
    pub fn sqrt(self) -> Self {
        let root = <T as Float>::sqrt(self.value);
        let two = T::one() + T::one();
        Self::new(root, self.derivative / (two * root))
    }

    /// Integer power.
    pub fn powi(self, n: i32) -> Self {
        let value = <T as Float>::powi(self.value, n);
        let scale = <T as Scalar>::from_f64(f64::from(n));
        Self::new(
            value,
            self.derivative * scale * <T as Float>::powi(self.value, n - 1),
        )
    }
}

impl<T: Scalar> Add for Dual<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value, self.derivative + rhs.derivative)
    }
}

impl<T: Scalar> Sub for Dual<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value, self.derivative - rhs.derivative)
    }
}

impl<T: Scalar> Mul for Dual<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.value * rhs.value,
            self.derivative * rhs.value + self.value * rhs.derivative,
        )
    }
}

impl<T: Scalar> Div for Dual<T> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(
            self.value / rhs.value,
            (self.derivative * rhs.value - self.value * rhs.derivative)
                / (rhs.value * rhs.value),
        )
    }
}

impl<T: Scalar> Neg for Dual<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.value, -self.derivative)
    }
}

impl<T: Scalar> Mul<T> for Dual<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.value * rhs, self.derivative * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arithmetic_rules() {
        let x = Dual::variable(3.0);
        let c = Dual::constant(2.0);

        // d/dx (2x + x·x) = 2 + 2x = 8
        let y = c * x + x * x;
        assert_relative_eq!(y.value, 15.0);
        assert_relative_eq!(y.derivative, 8.0);
    }

    #[test]
    fn test_quotient_rule() {
        // d/dx (x / (x + 1)) = 1/(x+1)^2
        let x = Dual::variable(2.0);
        let y = x / (x + Dual::constant(1.0));
        assert_relative_eq!(y.value, 2.0 / 3.0);
        assert_relative_eq!(y.derivative, 1.0 / 9.0);
    }

    #[test]
    fn test_elementary_functions() {
        let x = Dual::variable(0.7_f64);

        let s = x.sin();
        assert_relative_eq!(s.value, 0.7_f64.sin());
        assert_relative_eq!(s.derivative, 0.7_f64.cos());

        let e = x.exp();
        assert_relative_eq!(e.derivative, 0.7_f64.exp());

        let l = x.ln();
        assert_relative_eq!(l.derivative, 1.0 / 0.7);

        let r = x.sqrt();
        assert_relative_eq!(r.derivative, 0.5 / 0.7_f64.sqrt());

        let p = x.powi(3);
        assert_relative_eq!(p.derivative, 3.0 * 0.7_f64.powi(2));
    }

    #[test]
    fn test_chain_rule_composition() {
        // d/dx sin(x^2) = 2x cos(x^2)
        let x = Dual::variable(1.3_f64);
        let y = x.powi(2).sin();
        assert_relative_eq!(y.derivative, 2.0 * 1.3 * (1.3_f64 * 1.3).cos());
    }
}

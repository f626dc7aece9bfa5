//! Forward-mode automatic differentiation backend for manigrad.
//!
//! This crate provides the second canonical family of ambient-gradient
//! adapters: exact differentiation through dual numbers, one seeded forward
//! pass per ambient coordinate. It accepts no step size, and in exchange
//! every primitive operation inside the objective must have a dual rule —
//! functions built on unsupported primitives (eigendecomposition, say) must
//! fail with a capability error rather than being silently approximated.

pub mod backend;
pub mod dual;

pub use backend::{DualFunction, ForwardModeBackend};
pub use dual::Dual;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::backend::{DualFunction, ForwardModeBackend};
    pub use crate::dual::Dual;
}

//! Services built on the distance engine.
//!
//! # Components
//!
//! - [`calculation`]: `compute_between` and the `CalculationResult` record
//! - [`trace`]: derivation-trace rendering
//! - [`validation`]: star descriptor checks (errors and warnings)

pub mod calculation;
pub mod trace;
pub mod validation;

#[cfg(test)]
mod calculation_tests;

pub use calculation::{
    compute_between, compute_between_checked, compute_between_checked_with, compute_between_with,
    CalculationResult,
};
pub use trace::{render_trace, TraceFormat, TraceValues};
pub use validation::{ensure_computable, validate_pair, validate_star, ValidationResult};

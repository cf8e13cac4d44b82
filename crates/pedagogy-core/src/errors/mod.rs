//! Error handling for the pedagogy engine.
//! One error enum per concern, `thiserror` only.
//!
//! Statistical edge cases (ties, non-convergence, zero-information items,
//! empty pools) are never errors; they are reported through return values.

pub mod config_error;
pub mod pedagogy_error;

pub use config_error::ConfigError;
pub use pedagogy_error::{PedagogyError, PedagogyResult};

//! # pedagogy-core
//!
//! Foundation crate for the pedagogy engine.
//! Defines the item and learner types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PedagogyConfig;
pub use errors::{ConfigError, PedagogyError, PedagogyResult};
pub use models::{
    Ability, AttemptRecord, BloomsDistribution, BloomsLevel, BloomsProgress, Question,
    ResponseRecord, StudentProfile,
};

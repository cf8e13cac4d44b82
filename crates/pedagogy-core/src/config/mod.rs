//! Configuration for the pedagogy engine.
//! TOML-based; resolution order: env > file > compiled defaults.

pub mod adaptation_config;
pub mod defaults;
pub mod estimation_config;
pub mod pedagogy_config;
pub mod quiz_config;
pub mod selection_config;

pub use adaptation_config::AdaptationConfig;
pub use estimation_config::EstimationConfig;
pub use pedagogy_config::PedagogyConfig;
pub use quiz_config::QuizConfig;
pub use selection_config::SelectionConfig;

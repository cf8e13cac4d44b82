//! # pedagogy-irt
//!
//! Three-parameter logistic (3PL) item response model:
//! response probability, Fisher information, and maximum-likelihood
//! ability estimation.

pub mod estimator;
pub mod scorer;

pub use estimator::{estimate_ability, AbilityEstimate, AbilityEstimator};
pub use scorer::{fisher_information, item_information, probability_correct};

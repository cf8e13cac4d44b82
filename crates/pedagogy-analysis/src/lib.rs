//! # pedagogy-analysis
//!
//! Turns a completed response history into a performance report, then into
//! learner-facing insights: ability band, difficulty range, time efficiency,
//! recommendations, and next steps.

pub mod analyzer;
pub mod insights;

pub use analyzer::{PerformanceAnalyzer, PerformanceLevel, PerformanceReport};
pub use insights::{AbilityBand, DifficultyRange, QuizAnalysis, TimeEfficiency};

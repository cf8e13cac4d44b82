//! # pedagogy-adaptive
//!
//! Adaptive sequencing on top of the IRT model: pick the most informative
//! next item, update a learner after each response, and assemble quizzes
//! that follow a target Bloom's distribution.

pub mod assembler;
pub mod engine;
pub mod selector;
pub mod updater;

pub use assembler::QuizAssembler;
pub use engine::PedagogicalEngine;
pub use selector::ItemSelector;
pub use updater::{ProfileUpdater, UpdateOutcome};

//! Compiled defaults for every config section.

pub use crate::constants::{
    ADJACENT_LEVEL_WEIGHT as DEFAULT_ADJACENT_LEVEL_WEIGHT,
    CONVERGENCE_THRESHOLD as DEFAULT_CONVERGENCE_THRESHOLD,
    LEARNING_RATE as DEFAULT_LEARNING_RATE, MASTERY_GAIN as DEFAULT_MASTERY_GAIN,
    MASTERY_PENALTY as DEFAULT_MASTERY_PENALTY,
    MAX_ESTIMATION_ITERATIONS as DEFAULT_MAX_ITERATIONS,
    TARGET_LEVEL_WEIGHT as DEFAULT_TARGET_LEVEL_WEIGHT,
};

/// Questions per quiz when the request does not say.
pub const DEFAULT_QUESTION_COUNT: usize = 10;

/// Pool size requested from the generator, as a multiple of the quiz length.
pub const DEFAULT_POOL_MULTIPLIER: usize = 2;

/// Time budget per question used for quiz estimates.
pub const DEFAULT_MINUTES_PER_QUESTION: u32 = 2;

/// Guessing floor for generated four-option multiple choice items.
pub const DEFAULT_GENERATED_GUESSING: f64 = 0.25;

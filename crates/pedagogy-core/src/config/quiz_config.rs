use serde::{Deserialize, Serialize};

use super::defaults;

/// Quiz generation settings for the session layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub default_question_count: usize,
    pub pool_multiplier: usize,
    pub minutes_per_question: u32,
    /// Guessing floor assigned to generated multiple choice items.
    pub default_guessing: f64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_question_count: defaults::DEFAULT_QUESTION_COUNT,
            pool_multiplier: defaults::DEFAULT_POOL_MULTIPLIER,
            minutes_per_question: defaults::DEFAULT_MINUTES_PER_QUESTION,
            default_guessing: defaults::DEFAULT_GENERATED_GUESSING,
        }
    }
}

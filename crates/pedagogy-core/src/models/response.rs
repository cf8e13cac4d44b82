use serde::{Deserialize, Serialize};

use super::question::Question;

/// A graded response reduced to what ability estimation needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub correct: bool,
    pub difficulty: f64,
    pub discrimination: f64,
    pub guessing: f64,
}

impl ResponseRecord {
    pub fn new(correct: bool, difficulty: f64, discrimination: f64, guessing: f64) -> Self {
        Self {
            correct,
            difficulty,
            discrimination,
            guessing,
        }
    }

    /// Build a record from the item a learner answered.
    pub fn for_question(question: &Question, correct: bool) -> Self {
        Self::new(
            correct,
            question.difficulty,
            question.discrimination,
            question.guessing,
        )
    }
}

/// A full attempt: the item, whether it was answered correctly, and how long it took.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub question: Question,
    pub correct: bool,
    /// Seconds; zero or negative means "not recorded".
    #[serde(default)]
    pub response_time: f64,
}

impl AttemptRecord {
    pub fn new(question: Question, correct: bool, response_time: f64) -> Self {
        Self {
            question,
            correct,
            response_time,
        }
    }

    pub fn to_response(&self) -> ResponseRecord {
        ResponseRecord::for_question(&self.question, self.correct)
    }
}

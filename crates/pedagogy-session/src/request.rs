//! Request and response payloads for the quiz service.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use pedagogy_core::models::blooms::lenient;
use pedagogy_core::{BloomsLevel, Question, StudentProfile};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::evaluation::ResponseFeedback;

/// A request for a new adaptive quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizRequest {
    pub user_id: String,
    pub subject: String,
    pub topic: String,
    /// Difficulty hint passed through to the question source.
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    /// Falls back to the configured default when absent.
    #[serde(default)]
    pub num_questions: Option<usize>,
    /// Levels to cover evenly; empty means the default distribution.
    /// Unrecognized names load as `Remember`.
    #[serde(default, deserialize_with = "lenient::deserialize_vec")]
    pub blooms_levels: Vec<BloomsLevel>,
}

fn default_difficulty() -> String {
    "medium".to_string()
}

impl QuizRequest {
    pub fn new(
        user_id: impl Into<String>,
        subject: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            subject: subject.into(),
            topic: topic.into(),
            difficulty: default_difficulty(),
            num_questions: None,
            blooms_levels: Vec::new(),
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.num_questions = Some(count);
        self
    }

    pub fn with_levels(mut self, levels: Vec<BloomsLevel>) -> Self {
        self.blooms_levels = levels;
        self
    }
}

/// An assembled quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveQuiz {
    pub quiz_id: Uuid,
    pub title: String,
    pub subject: String,
    pub topic: String,
    pub questions: Vec<Question>,
    pub estimated_minutes: u32,
    /// Learner state the quiz was built against.
    pub profile: StudentProfile,
    pub created_at: DateTime<Utc>,
}

/// A learner's answer to one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSubmission {
    pub user_id: String,
    pub question: Question,
    pub answer: String,
    #[serde(default)]
    pub response_time: f64,
    /// Candidates for the next question when the quiz is adaptive.
    #[serde(default)]
    pub remaining: Vec<Question>,
    #[serde(default = "default_adaptive")]
    pub is_adaptive: bool,
}

fn default_adaptive() -> bool {
    true
}

/// Result of grading one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseOutcome {
    pub correct: bool,
    pub correct_answer: String,
    pub feedback: ResponseFeedback,
    pub updated_ability: f64,
    pub blooms_progress: BTreeMap<BloomsLevel, f64>,
    pub next_question: Option<Question>,
    pub insight: String,
}

use serde::{Deserialize, Serialize};

use super::blooms::{lenient, BloomsLevel};
use crate::constants::{DEFAULT_DISCRIMINATION, DEFAULT_GUESSING};

/// An immutable test item with its 3PL parameters.
///
/// Missing fields in serialized payloads take the 3PL defaults
/// (`a = 1.0`, `c = 0.0`, level `Remember`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(default)]
    pub text: String,
    /// IRT `b` parameter, nominally in [-4, 4].
    #[serde(default)]
    pub difficulty: f64,
    /// IRT `a` parameter.
    #[serde(default = "default_discrimination")]
    pub discrimination: f64,
    /// IRT `c` parameter: pseudo-guessing floor in [0, 1].
    #[serde(default = "default_guessing")]
    pub guessing: f64,
    /// Unrecognized level names load as `Remember`.
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub blooms_level: BloomsLevel,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default)]
    pub options: Vec<String>,
}

fn default_discrimination() -> f64 {
    DEFAULT_DISCRIMINATION
}

fn default_guessing() -> f64 {
    DEFAULT_GUESSING
}

impl Question {
    /// A 1PL item with default discrimination and no guessing floor.
    pub fn new(id: impl Into<String>, difficulty: f64, blooms_level: BloomsLevel) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
            difficulty,
            discrimination: DEFAULT_DISCRIMINATION,
            guessing: DEFAULT_GUESSING,
            blooms_level,
            subject: String::new(),
            topic: String::new(),
            correct_answer: String::new(),
            options: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_parameters(mut self, discrimination: f64, guessing: f64) -> Self {
        self.discrimination = discrimination;
        self.guessing = guessing;
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>, topic: impl Into<String>) -> Self {
        self.subject = subject.into();
        self.topic = topic.into();
        self
    }

    pub fn with_answer(mut self, correct_answer: impl Into<String>, options: Vec<String>) -> Self {
        self.correct_answer = correct_answer.into();
        self.options = options;
        self
    }
}

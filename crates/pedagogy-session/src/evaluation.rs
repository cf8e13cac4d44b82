//! Answer grading and learner-facing feedback text.

use pedagogy_core::{Question, StudentProfile};
use serde::{Deserialize, Serialize};

const STRONG_ABILITY: f64 = 1.0;
const STRUGGLING_ABILITY: f64 = -1.0;

/// Trimmed, case-insensitive comparison against the keyed answer.
pub fn evaluate_answer(question: &Question, answer: &str) -> bool {
    question
        .correct_answer
        .trim()
        .eq_ignore_ascii_case(answer.trim())
}

/// Immediate feedback shown after a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseFeedback {
    pub message: String,
    pub explanation: String,
}

impl ResponseFeedback {
    pub fn for_response(question: &Question, answer: &str, correct: bool) -> Self {
        let key = question.correct_answer.as_str();
        if correct {
            Self {
                message: "Correct! Well done.".to_string(),
                explanation: format!("The correct answer is {key}."),
            }
        } else {
            Self {
                message: format!("Incorrect. The correct answer is {key}."),
                explanation: format!(
                    "You selected {}, but the correct answer is {key}.",
                    answer.trim()
                ),
            }
        }
    }
}

/// Encouragement for the response just graded. Correctness picks the branch;
/// the updated overall ability picks the message within it.
pub fn performance_insight(profile: &StudentProfile, correct: bool) -> String {
    let ability = profile.ability_level.value();
    let insight = match correct {
        true if ability > STRONG_ABILITY => {
            "Excellent! You're demonstrating strong mastery of this topic."
        }
        true => "Good job! You're making steady progress.",
        false if ability < STRUGGLING_ABILITY => {
            "Don't worry, this is challenging material. Keep practicing!"
        }
        false => "Close! Review the concept and you'll get it next time.",
    };
    insight.to_string()
}

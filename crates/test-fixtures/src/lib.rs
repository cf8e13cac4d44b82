//! Shared builders for questions, profiles, and pools used across the
//! workspace test suites.

use pedagogy_core::{AttemptRecord, BloomsLevel, Question, ResponseRecord, StudentProfile};

pub const SUBJECT: &str = "Computer Science";
pub const TOPIC: &str = "Algorithms";

/// A 1PL multiple choice question in the default subject.
pub fn question(id: &str, difficulty: f64, level: BloomsLevel) -> Question {
    Question::new(id, difficulty, level)
        .with_text(format!("Question {id}"))
        .with_subject(SUBJECT, TOPIC)
        .with_answer("A", four_options())
}

/// A 3PL question with explicit parameters.
pub fn question_3pl(
    id: &str,
    difficulty: f64,
    discrimination: f64,
    guessing: f64,
    level: BloomsLevel,
) -> Question {
    question(id, difficulty, level).with_parameters(discrimination, guessing)
}

/// A question in a named subject.
pub fn subject_question(id: &str, subject: &str, difficulty: f64, level: BloomsLevel) -> Question {
    question(id, difficulty, level).with_subject(subject, TOPIC)
}

pub fn profile(user_id: &str, ability: f64) -> StudentProfile {
    StudentProfile::new(user_id).with_ability(ability)
}

/// `per_level` questions for every Bloom's level, difficulties spread over [-2, 2].
/// Ids are `{level}-{n}`.
pub fn balanced_pool(per_level: usize) -> Vec<Question> {
    BloomsLevel::ALL
        .iter()
        .flat_map(|level| {
            (0..per_level).map(move |n| {
                let difficulty = spread(n, per_level);
                question(&format!("{level}-{n}"), difficulty, *level)
            })
        })
        .collect()
}

/// `count` questions all at one level, difficulties spread over [-2, 2].
pub fn level_pool(level: BloomsLevel, count: usize) -> Vec<Question> {
    (0..count)
        .map(|n| question(&format!("{level}-{n}"), spread(n, count), level))
        .collect()
}

pub fn responses(outcomes: &[(bool, f64)]) -> Vec<ResponseRecord> {
    outcomes
        .iter()
        .map(|(correct, b)| ResponseRecord::new(*correct, *b, 1.0, 0.0))
        .collect()
}

pub fn attempt(question: Question, correct: bool, response_time: f64) -> AttemptRecord {
    AttemptRecord::new(question, correct, response_time)
}

/// JSON payload shaped like a generated question, for deserialization tests.
pub fn question_json(id: &str, level: &str, difficulty: f64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "text": format!("Question {id}"),
        "options": four_options(),
        "correct_answer": "A",
        "difficulty": difficulty,
        "blooms_level": level,
        "subject": SUBJECT,
        "topic": TOPIC,
    })
}

fn four_options() -> Vec<String> {
    ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect()
}

fn spread(n: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    -2.0 + 4.0 * n as f64 / (count - 1) as f64
}

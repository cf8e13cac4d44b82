//! Deterministic template pool used when the configured generator fails.

use pedagogy_core::config::defaults::DEFAULT_GENERATED_GUESSING;
use pedagogy_core::traits::{PoolRequest, QuestionPoolGenerator};
use pedagogy_core::{BloomsLevel, PedagogyResult, Question};

const DIFFICULTY_CYCLE: [f64; 5] = [-1.5, -0.5, 0.0, 0.5, 1.5];
const OPTIONS: [&str; 4] = ["A", "B", "C", "D"];

/// Builds placeholder multiple choice items that cycle through difficulty
/// and Bloom's level. Never fails.
#[derive(Debug, Clone)]
pub struct TemplatePoolGenerator {
    guessing: f64,
}

impl TemplatePoolGenerator {
    pub fn new(guessing: f64) -> Self {
        Self { guessing }
    }
}

impl Default for TemplatePoolGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_GENERATED_GUESSING)
    }
}

impl QuestionPoolGenerator for TemplatePoolGenerator {
    fn generate(&self, request: &PoolRequest) -> PedagogyResult<Vec<Question>> {
        let options: Vec<String> = OPTIONS.iter().map(|s| s.to_string()).collect();
        let pool = (0..request.count)
            .map(|i| {
                let level = BloomsLevel::ALL[i % BloomsLevel::ALL.len()];
                let difficulty = DIFFICULTY_CYCLE[i % DIFFICULTY_CYCLE.len()];
                Question::new(format!("fallback_{i}"), difficulty, level)
                    .with_text(format!(
                        "{} question {} about {} ({level})",
                        request.subject,
                        i + 1,
                        request.topic
                    ))
                    .with_parameters(1.0, self.guessing)
                    .with_subject(request.subject.clone(), request.topic.clone())
                    .with_answer(OPTIONS[0], options.clone())
            })
            .collect();
        Ok(pool)
    }

    fn name(&self) -> &str {
        "template"
    }
}

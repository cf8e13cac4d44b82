use std::collections::BTreeMap;
use std::fmt;

use pedagogy_core::{AttemptRecord, BloomsLevel, ResponseRecord};
use pedagogy_irt::AbilityEstimator;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Overall performance label from joint accuracy and ability thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceLevel {
    Excellent,
    Good,
    Satisfactory,
    NeedsImprovement,
    RequiresSupport,
}

impl PerformanceLevel {
    /// `(min accuracy, min ability, label)`; first matching row wins.
    const THRESHOLDS: [(f64, f64, PerformanceLevel); 4] = [
        (0.9, 2.0, Self::Excellent),
        (0.8, 1.0, Self::Good),
        (0.7, 0.0, Self::Satisfactory),
        (0.6, -1.0, Self::NeedsImprovement),
    ];

    pub fn classify(accuracy: f64, ability: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(min_accuracy, min_ability, _)| {
                accuracy >= *min_accuracy && ability >= *min_ability
            })
            .map(|(_, _, level)| *level)
            .unwrap_or(Self::RequiresSupport)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Satisfactory => "satisfactory",
            Self::NeedsImprovement => "needs_improvement",
            Self::RequiresSupport => "requires_support",
        }
    }
}

impl fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary statistics for a completed quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub accuracy: f64,
    pub total_questions: usize,
    pub correct_answers: usize,
    /// Accuracy per Bloom's level, only for levels that were attempted.
    pub blooms_performance: BTreeMap<BloomsLevel, f64>,
    pub average_difficulty: f64,
    /// Mean over attempts with a recorded (positive) response time; 0.0 if none.
    pub average_response_time: f64,
    pub estimated_ability: f64,
    pub ability_standard_error: f64,
    pub performance_level: PerformanceLevel,
}

/// Aggregates an attempt history and re-estimates ability from it.
#[derive(Debug, Clone, Default)]
pub struct PerformanceAnalyzer {
    estimator: AbilityEstimator,
}

impl PerformanceAnalyzer {
    pub fn new(estimator: AbilityEstimator) -> Self {
        Self { estimator }
    }

    /// Analyze a completed history. `None` is the empty report for an empty history.
    pub fn analyze(&self, attempts: &[AttemptRecord]) -> Option<PerformanceReport> {
        if attempts.is_empty() {
            return None;
        }

        let total = attempts.len();
        let correct = attempts.iter().filter(|a| a.correct).count();
        let accuracy = correct as f64 / total as f64;

        let mut per_level: BTreeMap<BloomsLevel, (usize, usize)> = BTreeMap::new();
        for attempt in attempts {
            let entry = per_level
                .entry(attempt.question.blooms_level)
                .or_insert((0, 0));
            entry.1 += 1;
            if attempt.correct {
                entry.0 += 1;
            }
        }
        let blooms_performance = per_level
            .into_iter()
            .map(|(level, (right, seen))| (level, right as f64 / seen as f64))
            .collect();

        let average_difficulty =
            attempts.iter().map(|a| a.question.difficulty).sum::<f64>() / total as f64;

        let timed: Vec<f64> = attempts
            .iter()
            .map(|a| a.response_time)
            .filter(|t| *t > 0.0)
            .collect();
        let average_response_time = if timed.is_empty() {
            0.0
        } else {
            timed.iter().sum::<f64>() / timed.len() as f64
        };

        let responses: Vec<ResponseRecord> =
            attempts.iter().map(AttemptRecord::to_response).collect();
        let estimate = self.estimator.estimate(&responses);
        let performance_level = PerformanceLevel::classify(accuracy, estimate.ability);

        info!(
            total,
            correct,
            accuracy,
            ability = estimate.ability,
            level = %performance_level,
            "performance analyzed"
        );

        Some(PerformanceReport {
            accuracy,
            total_questions: total,
            correct_answers: correct,
            blooms_performance,
            average_difficulty,
            average_response_time,
            estimated_ability: estimate.ability,
            ability_standard_error: estimate.standard_error,
            performance_level,
        })
    }
}

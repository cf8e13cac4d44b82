//! Learner-facing interpretation of a [`PerformanceReport`].

use pedagogy_core::AttemptRecord;
use serde::{Deserialize, Serialize};

use crate::analyzer::{PerformanceLevel, PerformanceReport};

/// Accuracy below which foundational review is recommended.
const FOUNDATION_ACCURACY: f64 = 0.6;

/// Per-level accuracy below which extra practice at that level is recommended.
const WEAK_LEVEL_ACCURACY: f64 = 0.5;

/// Mean response time (seconds) above which time management is flagged.
const SLOW_RESPONSE_SECS: f64 = 180.0;

/// Descriptive band for an ability estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityBand {
    Advanced,
    Proficient,
    Developing,
    Beginning,
    NeedsSupport,
}

impl AbilityBand {
    pub fn classify(ability: f64) -> Self {
        if ability >= 2.0 {
            Self::Advanced
        } else if ability >= 1.0 {
            Self::Proficient
        } else if ability >= 0.0 {
            Self::Developing
        } else if ability >= -1.0 {
            Self::Beginning
        } else {
            Self::NeedsSupport
        }
    }
}

/// Spread of item difficulty attempted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DifficultyRange {
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

impl DifficultyRange {
    /// All zeros for an empty history.
    pub fn from_attempts(attempts: &[AttemptRecord]) -> Self {
        let mut difficulties = attempts.iter().map(|a| a.question.difficulty);
        let Some(first) = difficulties.next() else {
            return Self::default();
        };
        let (min, max) = difficulties.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Self {
            min,
            max,
            range: max - min,
        }
    }
}

/// Pace rating from the mean of recorded response times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeEfficiency {
    VeryEfficient,
    Efficient,
    Moderate,
    NeedsImprovement,
    Unknown,
}

impl TimeEfficiency {
    /// Rates the mean of positive response times; `Unknown` when none were recorded.
    pub fn from_attempts(attempts: &[AttemptRecord]) -> Self {
        let times: Vec<f64> = attempts
            .iter()
            .map(|a| a.response_time)
            .filter(|t| *t > 0.0)
            .collect();
        if times.is_empty() {
            return Self::Unknown;
        }
        Self::from_mean_secs(times.iter().sum::<f64>() / times.len() as f64)
    }

    pub fn from_mean_secs(mean: f64) -> Self {
        if mean < 60.0 {
            Self::VeryEfficient
        } else if mean < 120.0 {
            Self::Efficient
        } else if mean < 180.0 {
            Self::Moderate
        } else {
            Self::NeedsImprovement
        }
    }
}

/// Personalized study recommendations for a report.
pub fn recommendations(report: &PerformanceReport) -> Vec<String> {
    let mut out = Vec::new();

    if report.accuracy < FOUNDATION_ACCURACY {
        out.push("Focus on foundational concepts before moving to advanced topics".to_string());
    }

    for (level, score) in &report.blooms_performance {
        if *score < WEAK_LEVEL_ACCURACY {
            out.push(format!(
                "Practice more {level}-level questions to strengthen this cognitive skill"
            ));
        }
    }

    if report.average_response_time > SLOW_RESPONSE_SECS {
        out.push("Work on time management and quick recall of key concepts".to_string());
    }

    out
}

/// Progression advice keyed on the overall performance label.
pub fn next_steps(level: PerformanceLevel) -> Vec<String> {
    let steps: [&str; 2] = match level {
        PerformanceLevel::Excellent | PerformanceLevel::Good => [
            "Ready for more challenging material",
            "Consider exploring advanced topics in this subject",
        ],
        PerformanceLevel::Satisfactory => [
            "Continue practicing current level material",
            "Gradually introduce more complex problems",
        ],
        PerformanceLevel::NeedsImprovement | PerformanceLevel::RequiresSupport => [
            "Review fundamental concepts",
            "Practice with easier questions first",
        ],
    };
    steps.iter().map(|s| s.to_string()).collect()
}

/// Full post-quiz analysis for one learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizAnalysis {
    pub user_id: String,
    pub report: PerformanceReport,
    pub ability_band: AbilityBand,
    pub difficulty_range: DifficultyRange,
    pub time_efficiency: TimeEfficiency,
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
}

impl QuizAnalysis {
    pub fn build(
        user_id: impl Into<String>,
        report: PerformanceReport,
        attempts: &[AttemptRecord],
    ) -> Self {
        Self {
            user_id: user_id.into(),
            ability_band: AbilityBand::classify(report.estimated_ability),
            difficulty_range: DifficultyRange::from_attempts(attempts),
            time_efficiency: TimeEfficiency::from_attempts(attempts),
            recommendations: recommendations(&report),
            next_steps: next_steps(report.performance_level),
            report,
        }
    }
}

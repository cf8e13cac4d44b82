//! Online (per-response) learner profile updates.

use pedagogy_core::config::AdaptationConfig;
use pedagogy_core::constants::{
    DEFAULT_DISCRIMINATION, DEFAULT_GUESSING, LEARNING_RATE, MASTERY_GAIN, MASTERY_PENALTY,
};
use pedagogy_core::{Question, StudentProfile};
use pedagogy_irt::probability_correct;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What a single update did to the profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    /// Model probability of a correct answer before the update.
    pub expected_probability: f64,
    pub ability_before: f64,
    pub ability_after: f64,
    pub subject_ability_after: f64,
}

impl UpdateOutcome {
    pub fn ability_delta(&self) -> f64 {
        self.ability_after - self.ability_before
    }
}

/// Stochastic-gradient style profile updater.
///
/// ```text
/// θ ← clamp(θ + η · (y − P(θ)))
/// ```
///
/// with `η = 0.1` by default. Bloom's mastery moves by `+0.1` on a correct
/// answer and `−0.05` on an incorrect one.
#[derive(Debug, Clone)]
pub struct ProfileUpdater {
    learning_rate: f64,
    mastery_gain: f64,
    mastery_penalty: f64,
}

impl ProfileUpdater {
    pub fn new() -> Self {
        Self {
            learning_rate: LEARNING_RATE,
            mastery_gain: MASTERY_GAIN,
            mastery_penalty: MASTERY_PENALTY,
        }
    }

    pub fn from_config(config: &AdaptationConfig) -> Self {
        Self {
            learning_rate: config.learning_rate,
            mastery_gain: config.mastery_gain,
            mastery_penalty: config.mastery_penalty,
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Apply one graded response to `profile`.
    ///
    /// The caller must hold the only writer for this profile; there is no
    /// internal synchronization. `response_time` is recorded in logs only.
    pub fn update(
        &self,
        profile: &mut StudentProfile,
        question: &Question,
        correct: bool,
        response_time: f64,
    ) -> UpdateOutcome {
        let observed = if correct { 1.0 } else { 0.0 };
        let ability_before = profile.ability_level.value();

        let expected = probability_correct(
            ability_before,
            question.difficulty,
            question.discrimination,
            question.guessing,
        );
        profile.ability_level = profile.ability_level + self.learning_rate * (observed - expected);

        let mastery_delta = if correct {
            self.mastery_gain
        } else {
            -self.mastery_penalty
        };
        profile
            .blooms_progress
            .adjust(question.blooms_level, mastery_delta);

        let subject_ability = match profile.subject_abilities.get(&question.subject).copied() {
            None => profile.ability_level,
            Some(current) => {
                let subject_expected = probability_correct(
                    current.value(),
                    question.difficulty,
                    DEFAULT_DISCRIMINATION,
                    DEFAULT_GUESSING,
                );
                current + self.learning_rate * (observed - subject_expected)
            }
        };
        profile
            .subject_abilities
            .insert(question.subject.clone(), subject_ability);

        let outcome = UpdateOutcome {
            expected_probability: expected,
            ability_before,
            ability_after: profile.ability_level.value(),
            subject_ability_after: subject_ability.value(),
        };

        debug!(
            user_id = %profile.user_id,
            question_id = %question.id,
            correct,
            response_time,
            expected,
            ability = outcome.ability_after,
            "profile updated"
        );

        outcome
    }
}

impl Default for ProfileUpdater {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedagogy_core::{Ability, BloomsLevel};

    fn apply_item() -> Question {
        Question::new("q1", 0.0, BloomsLevel::Apply).with_subject("math", "algebra")
    }

    #[test]
    fn correct_answer_at_difficulty_moves_ability_by_five_hundredths() {
        let mut profile = StudentProfile::new("u");
        let outcome = ProfileUpdater::new().update(&mut profile, &apply_item(), true, 0.0);
        assert!((profile.ability_level.value() - 0.05).abs() < 1e-12);
        assert_eq!(outcome.expected_probability, 0.5);
        assert!((outcome.ability_delta() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn incorrect_answer_moves_ability_down() {
        let mut profile = StudentProfile::new("u");
        ProfileUpdater::new().update(&mut profile, &apply_item(), false, 0.0);
        assert!((profile.ability_level.value() + 0.05).abs() < 1e-12);
    }

    #[test]
    fn mastery_gain_and_penalty_are_asymmetric() {
        let updater = ProfileUpdater::new();
        let mut profile = StudentProfile::new("u");
        updater.update(&mut profile, &apply_item(), true, 0.0);
        updater.update(&mut profile, &apply_item(), true, 0.0);
        assert!((profile.blooms_progress.get(BloomsLevel::Apply) - 0.2).abs() < 1e-12);
        updater.update(&mut profile, &apply_item(), false, 0.0);
        assert!((profile.blooms_progress.get(BloomsLevel::Apply) - 0.15).abs() < 1e-12);
    }

    #[test]
    fn mastery_floors_at_zero() {
        let mut profile = StudentProfile::new("u");
        ProfileUpdater::new().update(&mut profile, &apply_item(), false, 0.0);
        assert_eq!(profile.blooms_progress.get(BloomsLevel::Apply), 0.0);
    }

    #[test]
    fn new_subject_starts_at_updated_overall_ability() {
        let mut profile = StudentProfile::new("u");
        ProfileUpdater::new().update(&mut profile, &apply_item(), true, 0.0);
        assert_eq!(
            profile.subject_abilities["math"].value(),
            profile.ability_level.value()
        );
    }

    #[test]
    fn known_subject_updates_from_its_own_ability() {
        let mut profile = StudentProfile::new("u").with_ability(2.0);
        profile
            .subject_abilities
            .insert("math".into(), Ability::new(0.0));
        ProfileUpdater::new().update(&mut profile, &apply_item(), true, 0.0);
        // Subject ability 0.0 against difficulty 0.0: 0.1 * (1 - 0.5).
        assert!((profile.subject_abilities["math"].value() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn ability_is_clamped_at_bounds() {
        let mut profile = StudentProfile::new("u").with_ability(-4.0);
        let hard = Question::new("hard", 4.0, BloomsLevel::Create);
        ProfileUpdater::new().update(&mut profile, &hard, false, 0.0);
        assert_eq!(profile.ability_level.value(), -4.0);
    }
}

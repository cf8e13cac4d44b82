//! Maximum-information item selection weighted by Bloom's level.

use pedagogy_core::config::SelectionConfig;
use pedagogy_core::constants::{
    ADJACENT_LEVEL_WEIGHT, DEFAULT_DISCRIMINATION, DEFAULT_GUESSING, TARGET_LEVEL_WEIGHT,
};
use pedagogy_core::{BloomsLevel, Question, StudentProfile};
use pedagogy_irt::{item_information, probability_correct};

/// Picks the candidate that is most informative for a learner.
///
/// Score per candidate:
///
/// ```text
/// (I(θ_overall; a, b, c) + a² · P_s · (1 − P_s)) × bloomsWeight
/// ```
///
/// where `P_s` is the one-parameter probability at the learner's ability in
/// the candidate's subject (overall ability for unseen subjects).
#[derive(Debug, Clone)]
pub struct ItemSelector {
    target_level_weight: f64,
    adjacent_level_weight: f64,
}

impl ItemSelector {
    /// Create a selector with the default weights (2.0 exact, 1.5 adjacent).
    pub fn new() -> Self {
        Self {
            target_level_weight: TARGET_LEVEL_WEIGHT,
            adjacent_level_weight: ADJACENT_LEVEL_WEIGHT,
        }
    }

    pub fn from_config(config: &SelectionConfig) -> Self {
        Self {
            target_level_weight: config.target_level_weight,
            adjacent_level_weight: config.adjacent_level_weight,
        }
    }

    /// Preference weight for an item at `level` given an optional target.
    pub fn blooms_weight(&self, level: BloomsLevel, target: Option<BloomsLevel>) -> f64 {
        match target {
            Some(t) if t == level => self.target_level_weight,
            Some(t) if t.is_adjacent(level) => self.adjacent_level_weight,
            _ => 1.0,
        }
    }

    /// Weighted information score of `question` for `profile`.
    pub fn score(
        &self,
        profile: &StudentProfile,
        question: &Question,
        target: Option<BloomsLevel>,
    ) -> f64 {
        let overall = item_information(profile.ability_level.value(), question);

        let subject_ability = profile.subject_ability(&question.subject).value();
        let p_subject = probability_correct(
            subject_ability,
            question.difficulty,
            DEFAULT_DISCRIMINATION,
            DEFAULT_GUESSING,
        );
        let subject = question.discrimination * question.discrimination
            * p_subject
            * (1.0 - p_subject);

        (overall + subject) * self.blooms_weight(question.blooms_level, target)
    }

    /// Select the best candidate from a slice. `None` only when `candidates` is empty.
    pub fn select_next<'a>(
        &self,
        profile: &StudentProfile,
        candidates: &'a [Question],
        target: Option<BloomsLevel>,
    ) -> Option<&'a Question> {
        self.select_from(profile, candidates, target)
    }

    /// Select the best candidate from any sequence of borrowed questions.
    ///
    /// Ties go to the earliest candidate. A NaN score never wins over a real one.
    pub fn select_from<'a, I>(
        &self,
        profile: &StudentProfile,
        candidates: I,
        target: Option<BloomsLevel>,
    ) -> Option<&'a Question>
    where
        I: IntoIterator<Item = &'a Question>,
    {
        let mut best: Option<(&'a Question, f64)> = None;

        for question in candidates {
            let raw = self.score(profile, question, target);
            let score = if raw.is_nan() { f64::NEG_INFINITY } else { raw };
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((question, score)),
            }
        }

        best.map(|(question, _)| question)
    }
}

impl Default for ItemSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedagogy_core::Ability;

    fn q(id: &str, difficulty: f64, level: BloomsLevel) -> Question {
        Question::new(id, difficulty, level)
    }

    #[test]
    fn empty_candidates_yield_none() {
        let selector = ItemSelector::new();
        let profile = StudentProfile::new("u");
        assert!(selector.select_next(&profile, &[], None).is_none());
    }

    #[test]
    fn ties_go_to_first_candidate() {
        let selector = ItemSelector::new();
        let profile = StudentProfile::new("u");
        let candidates = vec![
            q("first", 0.5, BloomsLevel::Apply),
            q("second", 0.5, BloomsLevel::Apply),
        ];
        let chosen = selector.select_next(&profile, &candidates, None).unwrap();
        assert_eq!(chosen.id, "first");
    }

    #[test]
    fn prefers_item_matched_to_ability() {
        let selector = ItemSelector::new();
        let profile = StudentProfile::new("u").with_ability(1.0);
        let candidates = vec![
            q("easy", -3.0, BloomsLevel::Apply),
            q("matched", 1.0, BloomsLevel::Apply),
            q("hard", 3.5, BloomsLevel::Apply),
        ];
        let chosen = selector.select_next(&profile, &candidates, None).unwrap();
        assert_eq!(chosen.id, "matched");
    }

    #[test]
    fn blooms_weights() {
        let selector = ItemSelector::new();
        assert_eq!(selector.blooms_weight(BloomsLevel::Apply, Some(BloomsLevel::Apply)), 2.0);
        assert_eq!(selector.blooms_weight(BloomsLevel::Analyze, Some(BloomsLevel::Apply)), 1.5);
        assert_eq!(selector.blooms_weight(BloomsLevel::Understand, Some(BloomsLevel::Apply)), 1.5);
        assert_eq!(selector.blooms_weight(BloomsLevel::Create, Some(BloomsLevel::Apply)), 1.0);
        assert_eq!(selector.blooms_weight(BloomsLevel::Create, None), 1.0);
    }

    #[test]
    fn target_level_outweighs_better_matched_item() {
        let selector = ItemSelector::new();
        let profile = StudentProfile::new("u");
        // Off-target item sits at θ; on-target item is slightly off but doubled.
        let candidates = vec![
            q("off-target", 0.0, BloomsLevel::Remember),
            q("on-target", 0.5, BloomsLevel::Create),
        ];
        let chosen = selector
            .select_next(&profile, &candidates, Some(BloomsLevel::Create))
            .unwrap();
        assert_eq!(chosen.id, "on-target");
    }

    #[test]
    fn subject_ability_shifts_the_choice() {
        let selector = ItemSelector::new();
        let mut profile = StudentProfile::new("u");
        profile
            .subject_abilities
            .insert("math".into(), Ability::new(3.0));
        let candidates = vec![
            q("math-easy", 0.0, BloomsLevel::Apply).with_subject("math", "algebra"),
            q("math-hard", 2.0, BloomsLevel::Apply).with_subject("math", "algebra"),
        ];
        let s_easy = selector.score(&profile, &candidates[0], None);
        let s_hard = selector.score(&profile, &candidates[1], None);
        // Overall ability (0.0) favors the easy item; the math ability (3.0)
        // favors the hard one by a wider margin.
        assert!(s_hard > s_easy);
    }

    #[test]
    fn nan_discrimination_never_beats_a_real_item() {
        let selector = ItemSelector::new();
        let profile = StudentProfile::new("u");
        let candidates = vec![
            q("broken", 0.0, BloomsLevel::Apply).with_parameters(f64::NAN, 0.0),
            q("fine", 3.9, BloomsLevel::Apply),
        ];
        let chosen = selector.select_next(&profile, &candidates, None).unwrap();
        assert_eq!(chosen.id, "fine");
    }
}

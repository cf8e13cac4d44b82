//! PedagogicalEngine: one handle over scoring, estimation, selection,
//! profile updates, and quiz assembly, all built from one config.

use pedagogy_core::config::PedagogyConfig;
use pedagogy_core::{BloomsDistribution, BloomsLevel, Question, ResponseRecord, StudentProfile};
use pedagogy_irt::{AbilityEstimate, AbilityEstimator};

use crate::assembler::QuizAssembler;
use crate::selector::ItemSelector;
use crate::updater::{ProfileUpdater, UpdateOutcome};

/// The adaptive engine. Stateless apart from its settings; profiles are
/// passed in by the caller, so one engine can serve every learner.
#[derive(Debug, Clone, Default)]
pub struct PedagogicalEngine {
    estimator: AbilityEstimator,
    updater: ProfileUpdater,
    assembler: QuizAssembler,
}

impl PedagogicalEngine {
    /// Create an engine with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &PedagogyConfig) -> Self {
        Self {
            estimator: AbilityEstimator::from_config(&config.estimation),
            updater: ProfileUpdater::from_config(&config.adaptation),
            assembler: QuizAssembler::new(ItemSelector::from_config(&config.selection)),
        }
    }

    pub fn estimator(&self) -> &AbilityEstimator {
        &self.estimator
    }

    pub fn selector(&self) -> &ItemSelector {
        self.assembler.selector()
    }

    pub fn probability_correct(
        &self,
        ability: f64,
        difficulty: f64,
        discrimination: f64,
        guessing: f64,
    ) -> f64 {
        pedagogy_irt::probability_correct(ability, difficulty, discrimination, guessing)
    }

    pub fn estimate_ability(&self, responses: &[ResponseRecord]) -> AbilityEstimate {
        self.estimator.estimate(responses)
    }

    pub fn select_next<'a>(
        &self,
        profile: &StudentProfile,
        candidates: &'a [Question],
        target: Option<BloomsLevel>,
    ) -> Option<&'a Question> {
        self.assembler.selector().select_next(profile, candidates, target)
    }

    pub fn update_profile(
        &self,
        profile: &mut StudentProfile,
        question: &Question,
        correct: bool,
        response_time: f64,
    ) -> UpdateOutcome {
        self.updater.update(profile, question, correct, response_time)
    }

    pub fn assemble_quiz(
        &self,
        profile: &StudentProfile,
        pool: &[Question],
        target_count: usize,
        distribution: Option<&BloomsDistribution>,
    ) -> Vec<Question> {
        self.assembler
            .assemble(profile, pool, target_count, distribution)
    }
}

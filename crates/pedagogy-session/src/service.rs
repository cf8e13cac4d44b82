//! AdaptiveQuizService: quiz generation, response handling, and analysis
//! over a pluggable question source and profile store.

use std::sync::Arc;

use chrono::Utc;
use pedagogy_adaptive::PedagogicalEngine;
use pedagogy_analysis::{PerformanceAnalyzer, QuizAnalysis};
use pedagogy_core::config::{PedagogyConfig, QuizConfig};
use pedagogy_core::traits::{PoolRequest, ProfileStore, QuestionPoolGenerator};
use pedagogy_core::{AttemptRecord, BloomsDistribution, PedagogyError, PedagogyResult, Question};
use tracing::{info, warn};
use uuid::Uuid;

use crate::evaluation::{evaluate_answer, performance_insight, ResponseFeedback};
use crate::fallback::TemplatePoolGenerator;
use crate::request::{AdaptiveQuiz, QuizRequest, ResponseOutcome, ResponseSubmission};
use crate::{analysis_span, quiz_span, response_span};

/// Session-level facade over the adaptive engine.
///
/// Does not serialize concurrent submissions for the same user: two
/// overlapping `submit_response` calls may each load the same profile and
/// the later save wins. Callers must order submissions per user.
pub struct AdaptiveQuizService {
    engine: PedagogicalEngine,
    analyzer: PerformanceAnalyzer,
    quiz: QuizConfig,
    generator: Arc<dyn QuestionPoolGenerator>,
    fallback: TemplatePoolGenerator,
    store: Arc<dyn ProfileStore>,
}

impl AdaptiveQuizService {
    /// Create a service with default settings.
    pub fn new(generator: Arc<dyn QuestionPoolGenerator>, store: Arc<dyn ProfileStore>) -> Self {
        Self::with_config(&PedagogyConfig::default(), generator, store)
    }

    pub fn with_config(
        config: &PedagogyConfig,
        generator: Arc<dyn QuestionPoolGenerator>,
        store: Arc<dyn ProfileStore>,
    ) -> Self {
        let engine = PedagogicalEngine::from_config(config);
        Self {
            analyzer: PerformanceAnalyzer::new(engine.estimator().clone()),
            engine,
            quiz: config.quiz.clone(),
            generator,
            fallback: TemplatePoolGenerator::new(config.quiz.default_guessing),
            store,
        }
    }

    pub fn engine(&self) -> &PedagogicalEngine {
        &self.engine
    }

    /// Build a quiz fitted to the learner's current profile.
    pub fn generate_quiz(&self, request: &QuizRequest) -> PedagogyResult<AdaptiveQuiz> {
        let _span = quiz_span!(request.user_id, request.topic).entered();

        let profile = self.store.load_or_default(&request.user_id)?;
        let target = request
            .num_questions
            .unwrap_or(self.quiz.default_question_count);
        let pool_request = PoolRequest {
            subject: request.subject.clone(),
            topic: request.topic.clone(),
            difficulty: request.difficulty.clone(),
            count: target.saturating_mul(self.quiz.pool_multiplier),
        };
        let pool = self.candidate_pool(&pool_request)?;

        let distribution = (!request.blooms_levels.is_empty())
            .then(|| BloomsDistribution::uniform(&request.blooms_levels));
        let questions = self
            .engine
            .assemble_quiz(&profile, &pool, target, distribution.as_ref());

        info!(
            requested = target,
            pool = pool.len(),
            assembled = questions.len(),
            "quiz generated"
        );

        Ok(AdaptiveQuiz {
            quiz_id: Uuid::new_v4(),
            title: format!("Adaptive Quiz: {}", request.topic),
            subject: request.subject.clone(),
            topic: request.topic.clone(),
            estimated_minutes: (questions.len() as u32)
                .saturating_mul(self.quiz.minutes_per_question),
            questions,
            profile,
            created_at: Utc::now(),
        })
    }

    /// Grade a response, update and persist the profile, and pick the next item.
    pub fn submit_response(&self, submission: &ResponseSubmission) -> PedagogyResult<ResponseOutcome> {
        let _span = response_span!(submission.user_id, submission.question.id).entered();

        let correct = evaluate_answer(&submission.question, &submission.answer);
        let mut profile = self.store.load_or_default(&submission.user_id)?;
        let outcome = self.engine.update_profile(
            &mut profile,
            &submission.question,
            correct,
            submission.response_time,
        );
        self.store.save(&profile)?;

        let next_question = if submission.is_adaptive {
            self.engine
                .select_next(&profile, &submission.remaining, None)
                .cloned()
        } else {
            None
        };

        info!(
            correct,
            ability = outcome.ability_after,
            delta = outcome.ability_delta(),
            has_next = next_question.is_some(),
            "response processed"
        );

        Ok(ResponseOutcome {
            correct,
            correct_answer: submission.question.correct_answer.clone(),
            feedback: ResponseFeedback::for_response(
                &submission.question,
                &submission.answer,
                correct,
            ),
            updated_ability: outcome.ability_after,
            blooms_progress: profile.blooms_progress.to_map(),
            next_question,
            insight: performance_insight(&profile, correct),
        })
    }

    /// Post-quiz analysis of a completed attempt history.
    pub fn analyze_quiz(&self, user_id: &str, attempts: &[AttemptRecord]) -> PedagogyResult<QuizAnalysis> {
        let _span = analysis_span!(user_id, attempts.len()).entered();

        let report = self
            .analyzer
            .analyze(attempts)
            .ok_or(PedagogyError::NoResponses)?;
        Ok(QuizAnalysis::build(user_id, report, attempts))
    }

    fn candidate_pool(&self, request: &PoolRequest) -> PedagogyResult<Vec<Question>> {
        match self.generator.generate(request) {
            Ok(pool) if !pool.is_empty() => return Ok(pool),
            Ok(_) => warn!(
                generator = self.generator.name(),
                "empty question pool, using template fallback"
            ),
            Err(e) => warn!(
                generator = self.generator.name(),
                error = %e,
                "question pool generation failed, using template fallback"
            ),
        }
        self.fallback.generate(request)
    }
}

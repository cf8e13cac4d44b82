//! # pedagogy-session
//!
//! The service layer around the adaptive engine: builds quizzes from an
//! external question source (falling back to a template pool), grades
//! responses, persists learner profiles, and produces post-quiz analysis.

pub mod evaluation;
pub mod fallback;
pub mod request;
pub mod service;
pub mod store;
pub mod tracing_setup;

pub use evaluation::{evaluate_answer, performance_insight, ResponseFeedback};
pub use fallback::TemplatePoolGenerator;
pub use request::{AdaptiveQuiz, QuizRequest, ResponseOutcome, ResponseSubmission};
pub use service::AdaptiveQuizService;
pub use store::InMemoryProfileStore;

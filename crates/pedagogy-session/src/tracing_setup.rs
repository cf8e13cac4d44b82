//! Tracing setup: span macros for session operations and subscriber init.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Create a quiz generation span.
#[macro_export]
macro_rules! quiz_span {
    ($user_id:expr, $topic:expr) => {
        tracing::info_span!("pedagogy.quiz", user_id = %$user_id, topic = %$topic)
    };
}

/// Create a response submission span.
#[macro_export]
macro_rules! response_span {
    ($user_id:expr, $question_id:expr) => {
        tracing::info_span!("pedagogy.response", user_id = %$user_id, question_id = %$question_id)
    };
}

/// Create an analysis span.
#[macro_export]
macro_rules! analysis_span {
    ($user_id:expr, $attempts:expr) => {
        tracing::info_span!("pedagogy.analysis", user_id = %$user_id, attempts = $attempts)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const QUIZ: &str = "pedagogy.quiz";
    pub const RESPONSE: &str = "pedagogy.response";
    pub const ANALYSIS: &str = "pedagogy.analysis";
}

/// Initialize the global subscriber.
///
/// Reads `PEDAGOGY_LOG` for filtering and falls back to `info`. Emits JSON
/// lines when `json` is set. Idempotent.
pub fn init_tracing(json: bool) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("PEDAGOGY_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
        let registry = tracing_subscriber::registry().with(filter);
        if json {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .init();
        } else {
            registry
                .with(fmt::layer().with_target(true).with_line_number(true))
                .init();
        }
    });
}

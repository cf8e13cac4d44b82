use serde::{Deserialize, Serialize};

use crate::errors::PedagogyResult;
use crate::models::Question;

/// Parameters for a question pool request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolRequest {
    pub subject: String,
    pub topic: String,
    /// Free-form difficulty hint ("easy", "medium", "hard").
    pub difficulty: String,
    pub count: usize,
}

/// Source of raw question candidates (LLM-backed or otherwise).
///
/// Implementations may fail or return fewer items than requested; the
/// engine tolerates short and empty pools.
pub trait QuestionPoolGenerator: Send + Sync {
    fn generate(&self, request: &PoolRequest) -> PedagogyResult<Vec<Question>>;

    /// Name used in logs.
    fn name(&self) -> &str;
}

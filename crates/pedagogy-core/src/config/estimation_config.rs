use serde::{Deserialize, Serialize};

use super::defaults;

/// Newton-Raphson ability estimation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimationConfig {
    /// Iteration cap; reaching it is not an error.
    pub max_iterations: usize,
    /// Step size below which the estimate is considered converged.
    pub convergence_threshold: f64,
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            max_iterations: defaults::DEFAULT_MAX_ITERATIONS,
            convergence_threshold: defaults::DEFAULT_CONVERGENCE_THRESHOLD,
        }
    }
}

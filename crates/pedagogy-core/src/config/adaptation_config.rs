use serde::{Deserialize, Serialize};

use super::defaults;

/// Online profile update settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptationConfig {
    /// Step applied to `(observed - expected)` for ability updates.
    pub learning_rate: f64,
    /// Bloom's mastery added on a correct response.
    pub mastery_gain: f64,
    /// Bloom's mastery removed on an incorrect response.
    pub mastery_penalty: f64,
}

impl Default for AdaptationConfig {
    fn default() -> Self {
        Self {
            learning_rate: defaults::DEFAULT_LEARNING_RATE,
            mastery_gain: defaults::DEFAULT_MASTERY_GAIN,
            mastery_penalty: defaults::DEFAULT_MASTERY_PENALTY,
        }
    }
}

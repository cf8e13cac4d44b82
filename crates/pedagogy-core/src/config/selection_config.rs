use serde::{Deserialize, Serialize};

use super::defaults;

/// Bloom's-level preference weights used by item selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub target_level_weight: f64,
    pub adjacent_level_weight: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            target_level_weight: defaults::DEFAULT_TARGET_LEVEL_WEIGHT,
            adjacent_level_weight: defaults::DEFAULT_ADJACENT_LEVEL_WEIGHT,
        }
    }
}

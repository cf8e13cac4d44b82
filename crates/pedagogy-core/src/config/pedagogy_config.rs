//! Top-level engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AdaptationConfig, EstimationConfig, QuizConfig, SelectionConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PEDAGOGY_*`)
/// 2. Config file passed to [`PedagogyConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PedagogyConfig {
    pub estimation: EstimationConfig,
    pub adaptation: AdaptationConfig,
    pub selection: SelectionConfig,
    pub quiz: QuizConfig,
}

impl PedagogyConfig {
    /// Load configuration from an optional TOML file, then apply env overrides
    /// and validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `PEDAGOGY_*` overrides read through `lookup`.
    /// Unparseable values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("PEDAGOGY_LEARNING_RATE").and_then(|v| v.parse::<f64>().ok()) {
            self.adaptation.learning_rate = v;
        }
        if let Some(v) = lookup("PEDAGOGY_MAX_ITERATIONS").and_then(|v| v.parse::<usize>().ok()) {
            self.estimation.max_iterations = v;
        }
        if let Some(v) =
            lookup("PEDAGOGY_CONVERGENCE_THRESHOLD").and_then(|v| v.parse::<f64>().ok())
        {
            self.estimation.convergence_threshold = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.estimation.max_iterations == 0 {
            return Err(invalid("estimation.max_iterations", "must be greater than 0"));
        }
        if !positive(self.estimation.convergence_threshold) {
            return Err(invalid(
                "estimation.convergence_threshold",
                "must be a positive number",
            ));
        }
        if !positive(self.adaptation.learning_rate) {
            return Err(invalid("adaptation.learning_rate", "must be a positive number"));
        }
        if !unit_interval(self.adaptation.mastery_gain) {
            return Err(invalid("adaptation.mastery_gain", "must be between 0.0 and 1.0"));
        }
        if !unit_interval(self.adaptation.mastery_penalty) {
            return Err(invalid(
                "adaptation.mastery_penalty",
                "must be between 0.0 and 1.0",
            ));
        }
        if !at_least_one(self.selection.target_level_weight) {
            return Err(invalid("selection.target_level_weight", "must be at least 1.0"));
        }
        if !at_least_one(self.selection.adjacent_level_weight) {
            return Err(invalid(
                "selection.adjacent_level_weight",
                "must be at least 1.0",
            ));
        }
        if self.quiz.pool_multiplier == 0 {
            return Err(invalid("quiz.pool_multiplier", "must be at least 1"));
        }
        if !unit_interval(self.quiz.default_guessing) {
            return Err(invalid("quiz.default_guessing", "must be between 0.0 and 1.0"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn at_least_one(value: f64) -> bool {
    value.is_finite() && value >= 1.0
}

fn unit_interval(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ability::Ability;
use super::blooms::BloomsProgress;
use crate::constants::DEFAULT_LEARNING_STYLE;

/// Mutable state for one learner.
///
/// `blooms_progress` always holds all six levels and every ability stays in
/// [-4, 4]; both invariants are enforced by the field types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub user_id: String,
    #[serde(default)]
    pub ability_level: Ability,
    #[serde(default)]
    pub blooms_progress: BloomsProgress,
    /// Per-subject ability, created the first time a subject is answered.
    #[serde(default)]
    pub subject_abilities: BTreeMap<String, Ability>,
    /// Opaque tag carried for callers; not used by the engine.
    #[serde(default = "default_learning_style")]
    pub learning_style: String,
}

fn default_learning_style() -> String {
    DEFAULT_LEARNING_STYLE.to_string()
}

impl StudentProfile {
    /// A zero-ability profile with no recorded mastery.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ability_level: Ability::default(),
            blooms_progress: BloomsProgress::default(),
            subject_abilities: BTreeMap::new(),
            learning_style: default_learning_style(),
        }
    }

    pub fn with_ability(mut self, ability: f64) -> Self {
        self.ability_level = Ability::new(ability);
        self
    }

    /// Ability for `subject`, falling back to overall ability for unseen subjects.
    pub fn subject_ability(&self, subject: &str) -> Ability {
        self.subject_abilities
            .get(subject)
            .copied()
            .unwrap_or(self.ability_level)
    }
}

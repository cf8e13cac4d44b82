use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::blooms::BloomsLevel;

/// Target share of a quiz per Bloom's level. Weights are expected to sum to
/// roughly 1.0; levels absent from the map get no dedicated quota.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BloomsDistribution(BTreeMap<BloomsLevel, f64>);

impl BloomsDistribution {
    pub fn new(weights: BTreeMap<BloomsLevel, f64>) -> Self {
        Self(weights)
    }

    /// Equal weight over the given levels. Duplicates collapse; an empty list
    /// yields the default distribution.
    pub fn uniform(levels: &[BloomsLevel]) -> Self {
        let mut unique: Vec<BloomsLevel> = levels.to_vec();
        unique.sort();
        unique.dedup();
        if unique.is_empty() {
            return Self::default();
        }
        let weight = 1.0 / unique.len() as f64;
        Self(unique.into_iter().map(|l| (l, weight)).collect())
    }

    /// Weight for a level, 0.0 when absent.
    pub fn weight(&self, level: BloomsLevel) -> f64 {
        self.0.get(&level).copied().unwrap_or(0.0)
    }

    /// `(level, weight)` pairs in canonical level order.
    pub fn iter(&self) -> impl Iterator<Item = (BloomsLevel, f64)> + '_ {
        self.0.iter().map(|(l, w)| (*l, *w))
    }

    pub fn total_weight(&self) -> f64 {
        self.0.values().sum()
    }
}

impl Default for BloomsDistribution {
    /// Emphasizes application and analysis over recall.
    fn default() -> Self {
        Self(BTreeMap::from([
            (BloomsLevel::Remember, 0.1),
            (BloomsLevel::Understand, 0.2),
            (BloomsLevel::Apply, 0.3),
            (BloomsLevel::Analyze, 0.2),
            (BloomsLevel::Evaluate, 0.1),
            (BloomsLevel::Create, 0.1),
        ]))
    }
}

impl FromIterator<(BloomsLevel, f64)> for BloomsDistribution {
    fn from_iter<I: IntoIterator<Item = (BloomsLevel, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

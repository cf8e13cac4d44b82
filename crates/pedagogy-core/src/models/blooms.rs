use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PedagogyError;

/// The six cognitive levels of Bloom's Taxonomy, lowest to highest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BloomsLevel {
    #[default]
    Remember,
    Understand,
    Apply,
    Analyze,
    Evaluate,
    Create,
}

impl BloomsLevel {
    /// All levels in canonical (ascending) order.
    pub const ALL: [BloomsLevel; 6] = [
        Self::Remember,
        Self::Understand,
        Self::Apply,
        Self::Analyze,
        Self::Evaluate,
        Self::Create,
    ];

    /// 1-based position in the taxonomy.
    pub fn ordinal(self) -> u8 {
        self.index() as u8 + 1
    }

    /// 0-based slot, used to index fixed per-level storage.
    pub fn index(self) -> usize {
        match self {
            Self::Remember => 0,
            Self::Understand => 1,
            Self::Apply => 2,
            Self::Analyze => 3,
            Self::Evaluate => 4,
            Self::Create => 5,
        }
    }

    /// Number of taxonomy steps between two levels.
    pub fn distance(self, other: BloomsLevel) -> u8 {
        self.ordinal().abs_diff(other.ordinal())
    }

    /// Whether the two levels are exactly one step apart.
    pub fn is_adjacent(self, other: BloomsLevel) -> bool {
        self.distance(other) == 1
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Remember => "remember",
            Self::Understand => "understand",
            Self::Apply => "apply",
            Self::Analyze => "analyze",
            Self::Evaluate => "evaluate",
            Self::Create => "create",
        }
    }

    /// Parse a level name, falling back to `Remember` for anything unrecognized.
    /// Generated question payloads are not trusted to spell levels correctly.
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or(Self::Remember)
    }
}

impl fmt::Display for BloomsLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloomsLevel {
    type Err = PedagogyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| PedagogyError::UnknownBloomsLevel {
                name: s.to_string(),
            })
    }
}

/// Serde adapters for payload fields that read level names through
/// [`BloomsLevel::parse_lenient`] instead of the strict lowercase form.
pub mod lenient {
    use serde::{Deserialize, Deserializer};

    use super::BloomsLevel;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BloomsLevel, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(BloomsLevel::parse_lenient(&name))
    }

    pub fn deserialize_vec<'de, D>(deserializer: D) -> Result<Vec<BloomsLevel>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(names.iter().map(|n| BloomsLevel::parse_lenient(n)).collect())
    }
}

/// Mastery score in [0.0, 1.0] for each Bloom's level.
///
/// Backed by a fixed array so every level is always present. Serialized as a
/// map keyed by level name; levels missing from a serialized map load as 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<BloomsLevel, f64>",
    into = "BTreeMap<BloomsLevel, f64>"
)]
pub struct BloomsProgress([f64; 6]);

impl BloomsProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, level: BloomsLevel) -> f64 {
        self.0[level.index()]
    }

    /// Set mastery for a level, clamping to [0.0, 1.0].
    pub fn set(&mut self, level: BloomsLevel, value: f64) {
        let value = if value.is_finite() { value } else { 0.0 };
        self.0[level.index()] = value.clamp(0.0, 1.0);
    }

    /// Add `delta` (possibly negative) to a level's mastery, clamped.
    pub fn adjust(&mut self, level: BloomsLevel, delta: f64) {
        self.set(level, self.get(level) + delta);
    }

    /// `(level, mastery)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (BloomsLevel, f64)> + '_ {
        BloomsLevel::ALL.into_iter().map(move |l| (l, self.get(l)))
    }

    pub fn to_map(&self) -> BTreeMap<BloomsLevel, f64> {
        self.iter().collect()
    }
}

impl From<BTreeMap<BloomsLevel, f64>> for BloomsProgress {
    fn from(map: BTreeMap<BloomsLevel, f64>) -> Self {
        let mut progress = Self::default();
        for (level, value) in map {
            progress.set(level, value);
        }
        progress
    }
}

impl From<BloomsProgress> for BTreeMap<BloomsLevel, f64> {
    fn from(progress: BloomsProgress) -> Self {
        progress.to_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_taxonomy() {
        let ordinals: Vec<u8> = BloomsLevel::ALL.iter().map(|l| l.ordinal()).collect();
        assert_eq!(ordinals, vec![1, 2, 3, 4, 5, 6]);
        assert!(BloomsLevel::Remember < BloomsLevel::Create);
    }

    #[test]
    fn adjacency_is_symmetric_and_exact() {
        assert!(BloomsLevel::Apply.is_adjacent(BloomsLevel::Understand));
        assert!(BloomsLevel::Understand.is_adjacent(BloomsLevel::Apply));
        assert!(!BloomsLevel::Apply.is_adjacent(BloomsLevel::Apply));
        assert!(!BloomsLevel::Remember.is_adjacent(BloomsLevel::Apply));
        assert_eq!(BloomsLevel::Remember.distance(BloomsLevel::Create), 5);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Analyze".parse::<BloomsLevel>().unwrap(), BloomsLevel::Analyze);
        assert_eq!(" EVALUATE ".parse::<BloomsLevel>().unwrap(), BloomsLevel::Evaluate);
        assert!("synthesize".parse::<BloomsLevel>().is_err());
    }

    #[test]
    fn lenient_parse_defaults_to_remember() {
        assert_eq!(BloomsLevel::parse_lenient("synthesize"), BloomsLevel::Remember);
        assert_eq!(BloomsLevel::parse_lenient("create"), BloomsLevel::Create);
    }

    #[test]
    fn progress_always_has_six_levels() {
        let progress = BloomsProgress::new();
        assert_eq!(progress.to_map().len(), 6);
    }

    #[test]
    fn progress_clamps_to_unit_interval() {
        let mut progress = BloomsProgress::new();
        progress.adjust(BloomsLevel::Apply, 3.0);
        assert_eq!(progress.get(BloomsLevel::Apply), 1.0);
        progress.adjust(BloomsLevel::Apply, -5.0);
        assert_eq!(progress.get(BloomsLevel::Apply), 0.0);
    }

    #[test]
    fn partial_map_deserializes_with_missing_levels_zeroed() {
        let progress: BloomsProgress = serde_json::from_str(r#"{"apply": 0.4}"#).unwrap();
        assert_eq!(progress.get(BloomsLevel::Apply), 0.4);
        assert_eq!(progress.get(BloomsLevel::Create), 0.0);
        assert_eq!(progress.to_map().len(), 6);
    }

    #[test]
    fn serializes_with_lowercase_keys() {
        let json = serde_json::to_value(BloomsProgress::new()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 6);
        assert!(obj.contains_key("remember"));
        assert!(obj.contains_key("create"));
    }
}

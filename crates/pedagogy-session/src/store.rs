//! InMemoryProfileStore: concurrent per-user profile storage via DashMap.

use std::sync::Arc;

use dashmap::DashMap;
use pedagogy_core::traits::ProfileStore;
use pedagogy_core::{PedagogyResult, StudentProfile};

/// Thread-safe profile store keyed by user id.
///
/// Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profiles: Arc<DashMap<String, StudentProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a profile, returning it if present.
    pub fn remove(&self, user_id: &str) -> Option<StudentProfile> {
        self.profiles.remove(user_id).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn user_ids(&self) -> Vec<String> {
        self.profiles.iter().map(|r| r.key().clone()).collect()
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn load(&self, user_id: &str) -> PedagogyResult<Option<StudentProfile>> {
        Ok(self.profiles.get(user_id).map(|r| r.clone()))
    }

    fn save(&self, profile: &StudentProfile) -> PedagogyResult<()> {
        self.profiles
            .insert(profile.user_id.clone(), profile.clone());
        Ok(())
    }
}

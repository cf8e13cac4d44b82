use crate::errors::PedagogyResult;
use crate::models::StudentProfile;

/// Persistence for learner profiles.
///
/// The engine itself never calls this; it operates on profiles handed to it.
/// Implementations do not serialize concurrent updates for the same user.
pub trait ProfileStore: Send + Sync {
    fn load(&self, user_id: &str) -> PedagogyResult<Option<StudentProfile>>;
    fn save(&self, profile: &StudentProfile) -> PedagogyResult<()>;

    /// Load a stored profile, or a fresh zero-ability one for unknown users.
    fn load_or_default(&self, user_id: &str) -> PedagogyResult<StudentProfile> {
        Ok(self
            .load(user_id)?
            .unwrap_or_else(|| StudentProfile::new(user_id)))
    }
}

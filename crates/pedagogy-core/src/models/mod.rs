pub mod ability;
pub mod blooms;
pub mod distribution;
pub mod profile;
pub mod question;
pub mod response;

pub use ability::Ability;
pub use blooms::{BloomsLevel, BloomsProgress};
pub use distribution::BloomsDistribution;
pub use profile::StudentProfile;
pub use question::Question;
pub use response::{AttemptRecord, ResponseRecord};

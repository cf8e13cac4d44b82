pub mod pool_generator;
pub mod profile_store;

pub use pool_generator::{PoolRequest, QuestionPoolGenerator};
pub use profile_store::ProfileStore;

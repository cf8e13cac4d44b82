use super::ConfigError;

/// Top-level error for operations that cross an external boundary
/// (pool generation, profile persistence, request handling).
#[derive(Debug, thiserror::Error)]
pub enum PedagogyError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("question pool generation failed: {reason}")]
    PoolGeneration { reason: String },

    #[error("profile store failure: {reason}")]
    ProfileStore { reason: String },

    #[error("no responses provided for analysis")]
    NoResponses,

    #[error("unknown Bloom's level: {name}")]
    UnknownBloomsLevel { name: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type PedagogyResult<T> = Result<T, PedagogyError>;

use super::{ConfigError, DistributionError, SourceError};

/// Top-level error for every Horizon operation.
#[derive(Debug, thiserror::Error)]
pub enum HorizonError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Distribution(#[from] DistributionError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type HorizonResult<T> = Result<T, HorizonError>;

use chrono::{DateTime, Utc};

/// Errors raised by the per-source normalizers.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("source {source_name} has no snapshots")]
    EmptySeries { source_name: String },

    #[error("CDF has {actual} points, expected {expected}")]
    CdfLength { expected: usize, actual: usize },

    #[error("no forecast starts on or before {date}")]
    NoForecastBefore { date: DateTime<Utc> },

    #[error("invalid scaling: {reason}")]
    InvalidScaling { reason: String },
}

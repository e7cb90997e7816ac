//! Span definitions for the index pipeline.

/// Create an index-build span.
#[macro_export]
macro_rules! index_span {
    ($days:expr) => {
        tracing::info_span!($crate::tracing::spans::names::INDEX, days = $days)
    };
}

/// Create a normalizer span.
#[macro_export]
macro_rules! normalize_span {
    ($source:expr, $rows:expr) => {
        tracing::info_span!($crate::tracing::spans::names::NORMALIZE, source = %$source, rows = $rows)
    };
}

/// Span names used by the macros above.
pub mod names {
    pub const INDEX: &str = "horizon.index";
    pub const NORMALIZE: &str = "horizon.normalize";
}

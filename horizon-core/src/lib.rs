//! # horizon-core
//!
//! Foundation crate for the Horizon forecast index.
//! Defines the shared types, errors, config, constants and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{HorizonConfig, IndexConfig, SourcesConfig};
pub use errors::{HorizonError, HorizonResult};
pub use traits::IIndexEngine;
pub use models::{
    BinaryMarketPoint, BinaryMarketSeries, ChartPoint, IndexDataPoint, IndexInputs, IndexReport,
    PercentileTriple, ScalingSpec, SourceSeries, SourceSnapshot, StartDates, YearDistribution,
    YearRange,
};

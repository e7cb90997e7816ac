//! # horizon-sources
//!
//! Turns each platform's raw forecast history into a [`SourceSeries`] of
//! normalized year distributions, or into a binary-market price series.
//!
//! - [`transform`]: unit-interval ↔ real-value scaling for CDF questions.
//! - [`continuous`]: discretized-CDF forecasts, expanded to one snapshot per day.
//! - [`discrete`]: per-answer betting prices folded into daily snapshots.
//! - [`binary`]: yes/no market candlesticks and price histories.
//!
//! [`SourceSeries`]: horizon_core::SourceSeries

pub mod binary;
pub mod continuous;
pub mod discrete;
pub mod transform;

pub use continuous::{ForecastHistory, NormalizedQuestion};
pub use discrete::{BetEvent, NormalizedMarket};
pub use transform::{inverse_transform, transform};

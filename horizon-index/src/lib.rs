//! # horizon-index
//!
//! Builds the daily index from the five normalized series.
//!
//! For each day the distribution sources present on that exact day are
//! averaged slot by slot, the average is reweighted so its pre-cutoff mass
//! matches the binary market's price, the two are blended, and the
//! (lower, median, upper) percentile years are read off the result.

pub mod align;
pub mod average;
pub mod engine;
pub mod percentile;
pub mod reweight;
pub mod smoothing;

pub use engine::IndexEngine;
pub use reweight::ReweightBreakdown;
pub use smoothing::smooth;

//! Configuration for index construction.
//!
//! # Examples
//!
//! ```
//! use horizon_core::config::IndexConfig;
//!
//! let config = IndexConfig::default();
//! assert_eq!(config.year_range().len(), 176);
//! assert_eq!(config.cutoff_offset(), 6);
//! assert!((config.weights.other + config.weights.market - 1.0).abs() < 1e-12);
//! ```

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::YearRange;

/// Blend between the plain cross-source average and the binary-market
/// reweighted distribution. The two weights sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendWeights {
    /// Weight of the unweighted average. Default: 0.8.
    pub other: f64,
    /// Weight of the reweighted distribution. Default: 0.2.
    pub market: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            other: defaults::DEFAULT_OTHER_WEIGHT,
            market: defaults::DEFAULT_MARKET_WEIGHT,
        }
    }
}

impl BlendWeights {
    /// Weights with the given market share and the remainder on the average.
    pub fn with_market(market: f64) -> Self {
        Self {
            other: 1.0 - market,
            market,
        }
    }
}

/// Cumulative-mass thresholds for the (lower, median, upper) percentile triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quantiles {
    pub lower: f64,
    pub median: f64,
    pub upper: f64,
}

impl Default for Quantiles {
    fn default() -> Self {
        Self {
            lower: defaults::DEFAULT_LOWER_QUANTILE,
            median: defaults::DEFAULT_MEDIAN_QUANTILE,
            upper: defaults::DEFAULT_UPPER_QUANTILE,
        }
    }
}

impl Quantiles {
    pub fn as_array(&self) -> [f64; 3] {
        [self.lower, self.median, self.upper]
    }
}

/// Index construction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// First year of the distribution. Default: 2024.
    pub start_year: i32,
    /// Last year (inclusive) of the distribution. Default: 2199.
    pub end_year: i32,
    /// Binary-market cutoff year. Default: 2030.
    pub cutoff_year: i32,
    /// Days before this date are trimmed from the output. Default: 2020-02-02.
    pub index_cutoff_date: NaiveDate,
    pub weights: BlendWeights,
    pub quantiles: Quantiles,
    /// Compute days on the rayon pool. Default: true.
    pub parallel: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            start_year: defaults::DEFAULT_START_YEAR,
            end_year: defaults::DEFAULT_END_YEAR,
            cutoff_year: defaults::DEFAULT_CUTOFF_YEAR,
            index_cutoff_date: NaiveDate::parse_from_str(
                defaults::DEFAULT_INDEX_CUTOFF_DATE,
                "%Y-%m-%d",
            )
            .unwrap_or_default(),
            weights: BlendWeights::default(),
            quantiles: Quantiles::default(),
            parallel: defaults::DEFAULT_PARALLEL,
        }
    }
}

impl IndexConfig {
    /// The year axis every distribution is laid out on.
    pub fn year_range(&self) -> YearRange {
        YearRange::new(self.start_year, self.end_year)
    }

    /// Slot index of the cutoff year; slots below it are "before".
    pub fn cutoff_offset(&self) -> usize {
        (self.cutoff_year - self.start_year).max(0) as usize
    }

    /// Midnight UTC of the index cutoff date.
    pub fn index_cutoff(&self) -> DateTime<Utc> {
        self.index_cutoff_date.and_time(NaiveTime::MIN).and_utc()
    }
}

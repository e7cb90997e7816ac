use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::iso_millis;

/// (lower, median, upper) percentile years of one distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentileTriple {
    pub lower: i32,
    pub median: i32,
    pub upper: i32,
}

/// One day of the emitted index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDataPoint {
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
    /// Median arrival year.
    pub value: i32,
    /// `[lower, upper]` percentile years; `range[0] <= value <= range[1]`.
    pub range: [i32; 2],
}

impl IndexDataPoint {
    pub fn new(date: DateTime<Utc>, triple: PercentileTriple) -> Self {
        Self {
            date,
            value: triple.median,
            range: [triple.lower, triple.upper],
        }
    }
}

/// Effective first date each source contributes to the trimmed index:
/// the later of the source's own first date and `computed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartDates {
    /// First date of the trimmed index.
    pub computed: DateTime<Utc>,
    pub weak_source: DateTime<Utc>,
    pub full_source: DateTime<Utc>,
    pub aux_source: DateTime<Utc>,
    pub market_source: DateTime<Utc>,
    /// `None` when the binary market has no points.
    pub binary_market_source: Option<DateTime<Utc>>,
}

/// Output of one index build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexReport {
    pub data: Vec<IndexDataPoint>,
    pub start_dates: StartDates,
    /// Days in the trimmed range that produced no point (no source present,
    /// or a distribution whose percentiles could not be found).
    pub gaps: Vec<DateTime<Utc>>,
}

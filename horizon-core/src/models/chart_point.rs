use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{iso_millis, IndexDataPoint};

/// A single-series chart sample in the source's real units
/// (unix seconds for date questions, years for the index).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

impl ChartPoint {
    pub fn new(date: DateTime<Utc>, value: f64, range: Option<[f64; 2]>) -> Self {
        Self { date, value, range }
    }
}

impl From<&IndexDataPoint> for ChartPoint {
    fn from(point: &IndexDataPoint) -> Self {
        Self {
            date: point.date,
            value: f64::from(point.value),
            range: Some([f64::from(point.range[0]), f64::from(point.range[1])]),
        }
    }
}

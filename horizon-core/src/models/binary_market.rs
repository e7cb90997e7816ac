use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A binary market's "yes before the cutoff year" price on one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryMarketPoint {
    pub date: DateTime<Utc>,
    /// Yes-probability in percent, 0..=100.
    pub probability_percent: f64,
}

impl BinaryMarketPoint {
    pub fn new(date: DateTime<Utc>, probability_percent: f64) -> Self {
        Self {
            date,
            probability_percent,
        }
    }

    /// Probability as a fraction in [0, 1].
    pub fn probability(&self) -> f64 {
        self.probability_percent / 100.0
    }
}

/// Binary-market points ordered by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<BinaryMarketPoint>", into = "Vec<BinaryMarketPoint>")]
pub struct BinaryMarketSeries {
    points: Vec<BinaryMarketPoint>,
}

impl BinaryMarketSeries {
    pub fn new(mut points: Vec<BinaryMarketPoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self { points }
    }

    pub fn points(&self) -> &[BinaryMarketPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_date(&self) -> Option<DateTime<Utc>> {
        self.points.first().map(|p| p.date)
    }
}

impl From<Vec<BinaryMarketPoint>> for BinaryMarketSeries {
    fn from(points: Vec<BinaryMarketPoint>) -> Self {
        Self::new(points)
    }
}

impl From<BinaryMarketSeries> for Vec<BinaryMarketPoint> {
    fn from(series: BinaryMarketSeries) -> Self {
        series.points
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::YearDistribution;

/// One dated observation of a source's year distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSnapshot {
    pub date: DateTime<Utc>,
    pub distribution: YearDistribution,
}

impl SourceSnapshot {
    pub fn new(date: DateTime<Utc>, distribution: YearDistribution) -> Self {
        Self { date, distribution }
    }

    /// UTC calendar day this snapshot belongs to.
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

/// A source's full history: ordered by date, at most one snapshot per UTC day.
///
/// Construction sorts the snapshots and keeps the latest one of each day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<SourceSnapshot>", into = "Vec<SourceSnapshot>")]
pub struct SourceSeries {
    snapshots: Vec<SourceSnapshot>,
}

impl SourceSeries {
    pub fn new(mut snapshots: Vec<SourceSnapshot>) -> Self {
        snapshots.sort_by_key(|s| s.date);
        // Keep the last snapshot of each day: reverse, dedup keeps the first, reverse back.
        snapshots.reverse();
        snapshots.dedup_by_key(|s| s.day());
        snapshots.reverse();
        Self { snapshots }
    }

    pub fn snapshots(&self) -> &[SourceSnapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn first_date(&self) -> Option<DateTime<Utc>> {
        self.snapshots.first().map(|s| s.date)
    }

    pub fn last_date(&self) -> Option<DateTime<Utc>> {
        self.snapshots.last().map(|s| s.date)
    }
}

impl From<Vec<SourceSnapshot>> for SourceSeries {
    fn from(snapshots: Vec<SourceSnapshot>) -> Self {
        Self::new(snapshots)
    }
}

impl From<SourceSeries> for Vec<SourceSnapshot> {
    fn from(series: SourceSeries) -> Self {
        series.snapshots
    }
}

impl FromIterator<SourceSnapshot> for SourceSeries {
    fn from_iter<I: IntoIterator<Item = SourceSnapshot>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

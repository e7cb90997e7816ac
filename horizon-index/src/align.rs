//! Temporal alignment of sources to a single day.

use chrono::{DateTime, NaiveDate, Utc};
use horizon_core::{BinaryMarketPoint, BinaryMarketSeries, IndexInputs, SourceSeries, SourceSnapshot};

/// The snapshot on exactly `day`, if any. No fallback to nearby days.
pub fn snapshot_on(series: &SourceSeries, day: NaiveDate) -> Option<&SourceSnapshot> {
    let snapshots = series.snapshots();
    let index = snapshots.partition_point(|s| s.day() < day);
    snapshots.get(index).filter(|s| s.day() == day)
}

/// The earliest binary-market point at or after `date`.
///
/// Seeks forward because market data has gaps and the next known price is
/// preferred over none. The first point of the series is a valid match.
pub fn binary_point_on_or_after(
    series: &BinaryMarketSeries,
    date: DateTime<Utc>,
) -> Option<&BinaryMarketPoint> {
    let points = series.points();
    points.get(points.partition_point(|p| p.date < date))
}

/// Everything the combiner sees for one day.
#[derive(Debug, Clone)]
pub struct DaySources<'a> {
    /// Present distribution sources, in weak, full, aux, market order.
    pub present: Vec<&'a SourceSnapshot>,
    pub binary: Option<&'a BinaryMarketPoint>,
}

/// Align all inputs to `date`: distribution sources by UTC day, the binary
/// market by forward seek from the exact timestamp.
pub fn align(inputs: &IndexInputs, date: DateTime<Utc>) -> DaySources<'_> {
    let day = date.date_naive();
    let present = [&inputs.weak, &inputs.full, &inputs.aux, &inputs.market]
        .into_iter()
        .filter_map(|series| snapshot_on(series, day))
        .collect();
    DaySources {
        present,
        binary: binary_point_on_or_after(&inputs.binary_market, date),
    }
}

use chrono::DateTime;
use horizon_core::constants::SECS_PER_DAY;
use horizon_core::{ChartPoint, ScalingSpec};
use serde::{Deserialize, Serialize};

use crate::transform::transform;

/// One entry of a question's aggregated forecast history, in unit space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationEntry {
    /// Unix seconds.
    pub start_time: i64,
    pub centers: Vec<f64>,
    #[serde(default)]
    pub interval_lower_bounds: Option<Vec<f64>>,
    #[serde(default)]
    pub interval_upper_bounds: Option<Vec<f64>>,
}

/// Daily chart points from the first entry's start to the last entry's start.
///
/// Each day shows the latest entry that started strictly before it (the
/// first day shows the first entry). Entries without a center are skipped;
/// a range is attached only when both interval bounds are present.
pub fn aggregation_points(entries: &[AggregationEntry], scaling: &ScalingSpec) -> Vec<ChartPoint> {
    let mut history: Vec<&AggregationEntry> = entries.iter().collect();
    history.sort_by_key(|e| e.start_time);

    let (Some(first), Some(last)) = (history.first(), history.last()) else {
        return Vec::new();
    };
    let end = last.start_time;

    let mut points = Vec::new();
    let mut current = first.start_time;
    while current <= end {
        let index = history
            .partition_point(|e| e.start_time < current)
            .saturating_sub(1);
        if let Some(point) = chart_point(history[index], current, scaling) {
            points.push(point);
        }
        current += SECS_PER_DAY;
    }
    points
}

fn chart_point(entry: &AggregationEntry, at: i64, scaling: &ScalingSpec) -> Option<ChartPoint> {
    let date = DateTime::from_timestamp(at, 0)?;
    let center = *entry.centers.first()?;
    let lower = entry.interval_lower_bounds.as_ref().and_then(|b| b.first());
    let upper = entry.interval_upper_bounds.as_ref().and_then(|b| b.first());
    let range = match (lower, upper) {
        (Some(&lo), Some(&hi)) => Some([transform(scaling, lo), transform(scaling, hi)]),
        _ => None,
    };
    Some(ChartPoint::new(date, transform(scaling, center), range))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: i64, center: f64) -> AggregationEntry {
        AggregationEntry {
            start_time: day * SECS_PER_DAY,
            centers: vec![center],
            interval_lower_bounds: Some(vec![center - 0.1]),
            interval_upper_bounds: Some(vec![center + 0.1]),
        }
    }

    #[test]
    fn each_day_shows_entry_started_strictly_before_it() {
        let scaling = ScalingSpec::linear(0.0, 100.0);
        let entries = vec![entry(3, 0.5), entry(0, 0.2)];
        let points = aggregation_points(&entries, &scaling);

        assert_eq!(points.len(), 4);
        let values: Vec<f64> = points.iter().map(|p| p.value.round()).collect();
        assert_eq!(values, vec![20.0, 20.0, 20.0, 20.0]);
        assert_eq!(points[3].date.timestamp(), 3 * SECS_PER_DAY);
    }

    #[test]
    fn missing_bounds_drop_the_range() {
        let scaling = ScalingSpec::linear(0.0, 100.0);
        let mut only = entry(0, 0.5);
        only.interval_upper_bounds = None;
        let points = aggregation_points(&[only], &scaling);
        assert_eq!(points.len(), 1);
        assert!(points[0].range.is_none());
    }

    #[test]
    fn empty_history_has_no_points() {
        assert!(aggregation_points(&[], &ScalingSpec::default()).is_empty());
    }
}

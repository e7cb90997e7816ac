use horizon_core::ChartPoint;

/// Weekly smoothing for daily series.
pub const DEFAULT_WINDOW: usize = 7;

/// Centred moving average.
///
/// The window is clamped to the series length and cut at both ends, so edge
/// points average fewer neighbours. A point's range is averaged over the
/// neighbours that carry one; points without a range stay without.
pub fn smooth(points: &[ChartPoint], window: usize) -> Vec<ChartPoint> {
    if points.is_empty() || window <= 1 {
        return points.to_vec();
    }

    let half = window.min(points.len()) / 2;
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let neighbours = &points[i.saturating_sub(half)..=(i + half).min(points.len() - 1)];
            let value = neighbours.iter().map(|p| p.value).sum::<f64>() / neighbours.len() as f64;
            let range = point.range.and_then(|_| mean_range(neighbours));
            ChartPoint::new(point.date, value, range)
        })
        .collect()
}

fn mean_range(neighbours: &[ChartPoint]) -> Option<[f64; 2]> {
    let ranges: Vec<[f64; 2]> = neighbours.iter().filter_map(|p| p.range).collect();
    if ranges.is_empty() {
        return None;
    }
    let n = ranges.len() as f64;
    let lower = ranges.iter().map(|r| r[0]).sum::<f64>() / n;
    let upper = ranges.iter().map(|r| r[1]).sum::<f64>() / n;
    Some([lower, upper])
}

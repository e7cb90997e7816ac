use horizon_core::config::Quantiles;
use horizon_core::{PercentileTriple, YearRange};

/// Percentile years of a distribution laid out on `range`.
///
/// Walks the slots accumulating mass; a threshold is met by the first year
/// whose cumulative mass reaches it. `None` unless all three are met.
pub fn extract(masses: &[f64], range: YearRange, quantiles: &Quantiles) -> Option<PercentileTriple> {
    let thresholds = quantiles.as_array();
    let mut found: [Option<i32>; 3] = [None; 3];
    let mut cumulative = 0.0;
    for (offset, mass) in masses.iter().enumerate() {
        cumulative += mass;
        for (slot, threshold) in found.iter_mut().zip(thresholds) {
            if slot.is_none() && cumulative >= threshold {
                *slot = Some(range.year_at(offset));
            }
        }
        if found[2].is_some() {
            break;
        }
    }

    let [lower, median, upper] = found;
    Some(PercentileTriple {
        lower: lower?,
        median: median?,
        upper: upper?,
    })
}

use std::collections::BTreeMap;

use chrono::NaiveTime;
use horizon_core::config::Quantiles;
use horizon_core::errors::{DistributionError, SourceError};
use horizon_core::{
    normalize_span, ChartPoint, HorizonConfig, HorizonResult, PercentileTriple, SourceSeries,
    SourceSnapshot, YearDistribution, YearRange,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{daily_probabilities, BetEvent};

const SOURCE_NAME: &str = "market";

/// Daily year distributions of the betting market plus its own percentile chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMarket {
    pub series: SourceSeries,
    /// `value` is the median year, `range` the lower/upper years.
    pub chart: Vec<ChartPoint>,
}

/// Turn a market's answer prices into a distribution over `range`.
///
/// Years before the latest priced year keep their own price. The latest
/// year's price is spread evenly over it and every year after it up to
/// `range.end`. The result is normalized, since the prices are independent
/// per-answer quotes rather than a distribution.
pub fn market_distribution(
    probabilities: &BTreeMap<i32, f64>,
    range: YearRange,
) -> Result<YearDistribution, DistributionError> {
    let Some((&last_year, &last_price)) = probabilities.last_key_value() else {
        return Err(DistributionError::Degenerate { sum: 0.0 });
    };
    let tail_years = (range.end - last_year + 1).max(1);
    let spread = last_price / f64::from(tail_years);

    YearDistribution::from_lookup(range, |year| {
        if year < last_year {
            probabilities.get(&year).copied()
        } else {
            Some(spread)
        }
    })
}

/// Percentile years read straight off the answer prices.
///
/// Years are scanned in order, accumulating `price / total`; a threshold is
/// met by the first year whose cumulative share exceeds it. The walk stops
/// after `max_nonzero_years` priced years, so a threshold not met by then
/// yields `None`.
pub fn market_percentiles(
    probabilities: &BTreeMap<i32, f64>,
    quantiles: &Quantiles,
    max_nonzero_years: usize,
) -> Option<PercentileTriple> {
    let total: f64 = probabilities.values().sum();
    if !total.is_finite() || total <= 0.0 {
        return None;
    }

    let thresholds = quantiles.as_array();
    let mut found: [Option<i32>; 3] = [None; 3];
    let mut cumulative = 0.0;
    let mut nonzero = 0;
    for (&year, &price) in probabilities {
        if nonzero >= max_nonzero_years {
            break;
        }
        if price > 0.0 {
            nonzero += 1;
        }
        cumulative += price / total;
        for (slot, threshold) in found.iter_mut().zip(thresholds) {
            if slot.is_none() && cumulative > threshold {
                *slot = Some(year);
            }
        }
        if found.iter().all(Option::is_some) {
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

/// Normalize a betting market's bet stream into one snapshot per day.
///
/// Days whose prices cannot be normalized are skipped with a warning.
pub fn normalize_market(bets: &[BetEvent], config: &HorizonConfig) -> HorizonResult<NormalizedMarket> {
    let _span = normalize_span!(SOURCE_NAME, bets.len()).entered();
    let answer_years = &config.sources.answer_years;

    let ignored = bets.iter().filter(|b| b.year(answer_years).is_none()).count();
    if ignored > 0 {
        debug!(ignored, "ignoring cancelled or unmapped bets");
    }

    let days = daily_probabilities(bets, answer_years);
    if days.is_empty() {
        return Err(SourceError::EmptySeries {
            source_name: SOURCE_NAME.to_string(),
        }
        .into());
    }

    let range = config.index.year_range();
    let mut snapshots = Vec::with_capacity(days.len());
    let mut chart = Vec::new();
    for daily in &days {
        let date = daily.day.and_time(NaiveTime::MIN).and_utc();
        match market_distribution(&daily.probabilities, range) {
            Ok(distribution) => snapshots.push(SourceSnapshot::new(date, distribution)),
            Err(e) => warn!(day = %daily.day, error = %e, "skipping market day"),
        }
        if let Some(p) = market_percentiles(
            &daily.probabilities,
            &config.index.quantiles,
            config.sources.max_nonzero_years_scanned,
        ) {
            chart.push(ChartPoint::new(
                date,
                f64::from(p.median),
                Some([f64::from(p.lower), f64::from(p.upper)]),
            ));
        }
    }

    debug!(days = snapshots.len(), chart_points = chart.len(), "market normalized");
    Ok(NormalizedMarket {
        series: SourceSeries::new(snapshots),
        chart,
    })
}

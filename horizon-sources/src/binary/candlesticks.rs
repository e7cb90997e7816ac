use chrono::DateTime;
use horizon_core::{BinaryMarketPoint, BinaryMarketSeries};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBand {
    /// Cents.
    pub close: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TradePrice {
    /// Mean traded price in cents; `None` when nothing traded in the period.
    #[serde(default)]
    pub mean: Option<f64>,
}

/// A periodic price summary of a binary market.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candlestick {
    /// Unix seconds.
    pub end_period_ts: i64,
    pub yes_bid: PriceBand,
    pub yes_ask: PriceBand,
    #[serde(default)]
    pub price: TradePrice,
}

impl Candlestick {
    fn midpoint(&self) -> f64 {
        ((self.yes_bid.close + self.yes_ask.close) / 2.0).round()
    }
}

/// A dense series stepping `period_interval_minutes` from the first
/// candlestick to the last.
///
/// Each step reads the first candlestick ending at or after it. Its value is
/// the latest mean traded price seen so far, or the rounded bid/ask midpoint
/// when no trade has happened yet.
pub fn candlestick_series(sticks: &[Candlestick], period_interval_minutes: i64) -> BinaryMarketSeries {
    let mut sorted = sticks.to_vec();
    sorted.sort_by_key(|s| s.end_period_ts);
    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return BinaryMarketSeries::default();
    };
    let step = period_interval_minutes.max(1) * 60;

    let mut points = Vec::new();
    let mut last_valid_mean: Option<f64> = None;
    let mut cursor = 0;
    let mut current = first.end_period_ts;
    while current <= last.end_period_ts {
        cursor += sorted[cursor..].partition_point(|s| s.end_period_ts < current);
        let Some(stick) = sorted.get(cursor) else {
            break;
        };
        if let Some(mean) = stick.price.mean {
            last_valid_mean = Some(mean);
        }
        let value = last_valid_mean.unwrap_or_else(|| stick.midpoint());
        if let Some(date) = DateTime::from_timestamp(current, 0) {
            points.push(BinaryMarketPoint::new(date, value));
        }
        current += step;
    }

    debug!(sticks = sorted.len(), points = points.len(), "candlesticks expanded");
    BinaryMarketSeries::new(points)
}

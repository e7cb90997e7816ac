use chrono::DateTime;
use horizon_core::{BinaryMarketPoint, BinaryMarketSeries};
use serde::{Deserialize, Serialize};

/// A raw price sample: unix seconds and a yes-price in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub t: i64,
    pub p: f64,
}

/// Convert price samples to percent. Samples with an unrepresentable
/// timestamp are dropped.
pub fn price_history_series(history: &[PricePoint]) -> BinaryMarketSeries {
    history
        .iter()
        .filter_map(|point| {
            let date = DateTime::from_timestamp(point.t, 0)?;
            Some(BinaryMarketPoint::new(date, point.p * 100.0))
        })
        .collect::<Vec<_>>()
        .into()
}

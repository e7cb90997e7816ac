//! Binary yes/no markets on "arrives before the cutoff year".
//!
//! Both readers emit a [`BinaryMarketSeries`](horizon_core::BinaryMarketSeries)
//! with prices in percent.

mod candlesticks;
mod price_history;

pub use candlesticks::{candlestick_series, Candlestick, PriceBand, TradePrice};
pub use price_history::{price_history_series, PricePoint};

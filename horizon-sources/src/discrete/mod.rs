//! Yearly betting market: one answer per arrival year, each with its own
//! yes-price, folded day by day into year distributions.

mod bets;
mod fold;
mod market;

pub use bets::BetEvent;
pub use fold::{daily_probabilities, DailyProbabilities};
pub use market::{market_distribution, market_percentiles, normalize_market, NormalizedMarket};

use serde::{Deserialize, Serialize};

use super::{BinaryMarketSeries, SourceSeries};
use crate::errors::HorizonResult;

/// The five pre-normalized series an index build consumes.
///
/// The four distribution sources are peers in the average; the binary market
/// only reweights their average. Missing series deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexInputs {
    /// Weak-AGI forecasting question.
    pub weak: SourceSeries,
    /// Full-AGI forecasting question.
    pub full: SourceSeries,
    /// Auxiliary question (difficult Turing test).
    pub aux: SourceSeries,
    /// Yearly betting market.
    pub market: SourceSeries,
    pub binary_market: BinaryMarketSeries,
}

impl IndexInputs {
    /// Parse the five series from their JSON form.
    pub fn from_json(raw: &str) -> HorizonResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

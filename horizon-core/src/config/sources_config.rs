//! Configuration for the per-source normalizers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Normalizer settings shared by the three source kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Buckets in a discretized CDF; the CDF carries `cdf_buckets + 1` points. Default: 200.
    pub cdf_buckets: usize,
    /// Non-zero years scanned before the betting-market percentile walk gives up. Default: 10.
    pub max_nonzero_years_scanned: usize,
    /// Betting-market answer id to the year it resolves to.
    pub answer_years: BTreeMap<String, i32>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            cdf_buckets: defaults::DEFAULT_CDF_BUCKETS,
            max_nonzero_years_scanned: defaults::DEFAULT_MAX_NONZERO_YEARS_SCANNED,
            answer_years: defaults::DEFAULT_ANSWER_YEARS
                .iter()
                .map(|(id, year)| (id.to_string(), *year))
                .collect(),
        }
    }
}

impl SourcesConfig {
    /// Latest year any answer resolves to, if the mapping is non-empty.
    pub fn last_answer_year(&self) -> Option<i32> {
        self.answer_years.values().copied().max()
    }
}

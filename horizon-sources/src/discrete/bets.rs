use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One bet on a yearly answer, with the answer's price right after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetEvent {
    pub answer_id: String,
    pub prob_after: f64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_time: DateTime<Utc>,
    #[serde(default)]
    pub is_cancelled: bool,
}

impl BetEvent {
    /// The year this bet's answer resolves to, unless the bet was cancelled
    /// or the answer is not in `answer_years`.
    pub(crate) fn year(&self, answer_years: &BTreeMap<String, i32>) -> Option<i32> {
        if self.is_cancelled || !self.prob_after.is_finite() {
            return None;
        }
        answer_years.get(&self.answer_id).copied()
    }
}

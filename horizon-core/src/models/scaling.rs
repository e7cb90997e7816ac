use serde::{Deserialize, Serialize};

/// How a question's native unit interval maps onto real values.
///
/// A present `zero_point` selects logarithmic scaling, otherwise linear.
/// Missing bounds degrade every transform to the identity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScalingSpec {
    pub range_min: Option<f64>,
    pub range_max: Option<f64>,
    #[serde(default)]
    pub zero_point: Option<f64>,
}

impl ScalingSpec {
    pub fn linear(range_min: f64, range_max: f64) -> Self {
        Self {
            range_min: Some(range_min),
            range_max: Some(range_max),
            zero_point: None,
        }
    }

    pub fn logarithmic(range_min: f64, range_max: f64, zero_point: f64) -> Self {
        Self {
            range_min: Some(range_min),
            range_max: Some(range_max),
            zero_point: Some(zero_point),
        }
    }

    /// Both bounds, or `None` when either is missing.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        Some((self.range_min?, self.range_max?))
    }
}

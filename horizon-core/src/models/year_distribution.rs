use serde::{Deserialize, Serialize};

use super::YearRange;
use crate::errors::DistributionError;

/// Probability mass per calendar year, normalized to sum to one.
///
/// Slot `i` holds P(arrival in `range.start + i`). Values are mass, not
/// density. Every instance is built through a normalizing constructor and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct YearDistribution {
    masses: Vec<f64>,
}

impl YearDistribution {
    /// Normalize non-negative weights so they sum to one.
    ///
    /// Fails with [`DistributionError::Degenerate`] when the weights sum to
    /// zero or to a non-finite value.
    pub fn from_weights(weights: Vec<f64>) -> Result<Self, DistributionError> {
        if let Some((offset, &value)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| w.is_nan() || **w < 0.0)
        {
            return Err(DistributionError::NegativeMass { offset, value });
        }

        let sum: f64 = weights.iter().sum();
        if !sum.is_finite() || sum <= 0.0 {
            return Err(DistributionError::Degenerate { sum });
        }

        Ok(Self {
            masses: weights.into_iter().map(|w| w / sum).collect(),
        })
    }

    /// Build a distribution over `range` from a per-year weight lookup.
    ///
    /// Years the lookup has no value for get zero weight.
    pub fn from_lookup<F>(range: YearRange, mut lookup: F) -> Result<Self, DistributionError>
    where
        F: FnMut(i32) -> Option<f64>,
    {
        let weights = range.years().map(|year| lookup(year).unwrap_or(0.0)).collect();
        Self::from_weights(weights)
    }

    /// All mass on a single year. Years outside `range` are degenerate.
    pub fn point_mass(range: YearRange, year: i32) -> Result<Self, DistributionError> {
        Self::from_lookup(range, |y| (y == year).then_some(1.0))
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.masses.iter().sum()
    }

    /// Mass in slots `[0, offset)`.
    pub fn mass_before(&self, offset: usize) -> f64 {
        self.masses[..offset.min(self.masses.len())].iter().sum()
    }

    /// Mass in slots `[offset, len)`.
    pub fn mass_from(&self, offset: usize) -> f64 {
        self.masses[offset.min(self.masses.len())..].iter().sum()
    }

    /// Check that the distribution is laid out on `range`.
    pub fn ensure_len(&self, range: YearRange) -> Result<(), DistributionError> {
        if self.masses.len() != range.len() {
            return Err(DistributionError::LengthMismatch {
                expected: range.len(),
                actual: self.masses.len(),
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<f64>> for YearDistribution {
    type Error = DistributionError;

    fn try_from(weights: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_weights(weights)
    }
}

impl From<YearDistribution> for Vec<f64> {
    fn from(distribution: YearDistribution) -> Self {
        distribution.masses
    }
}

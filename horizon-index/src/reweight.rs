//! Binary-market reweighting and blending.
//!
//! ```text
//! before   = Σ averages[0..cutoff)        after = Σ averages[cutoff..]
//! reweighted[y] = averages[y] × (p / before   if y < cutoff
//!                                (1-p) / after otherwise)
//! final[y] = averages[y] × other + reweighted[y] × market
//! ```
//!
//! A side with no averaged mass stays at zero and the other side is
//! rescaled to one, so no mass is invented in empty years.

use horizon_core::config::BlendWeights;
use serde::{Deserialize, Serialize};

/// One day's reweighting, factor by factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReweightBreakdown {
    /// Binary-market probability of arrival before the cutoff, in [0, 1].
    pub probability: f64,
    pub before_mass: f64,
    pub after_mass: f64,
    pub scale_before: f64,
    pub scale_after: f64,
    pub reweighted_before: f64,
    pub reweighted_after: f64,
}

/// Rescale `averages` so the mass before `cutoff_offset` equals `probability`.
pub fn reweight(averages: &[f64], cutoff_offset: usize, probability: f64) -> Vec<f64> {
    let (before, after) = split_mass(averages, cutoff_offset);
    let (scale_before, scale_after) = scale_factors(before, after, probability);
    averages
        .iter()
        .enumerate()
        .map(|(i, mass)| mass * if i < cutoff_offset { scale_before } else { scale_after })
        .collect()
}

/// Reweight and report every intermediate value.
pub fn reweight_breakdown(averages: &[f64], cutoff_offset: usize, probability: f64) -> ReweightBreakdown {
    let (before_mass, after_mass) = split_mass(averages, cutoff_offset);
    let (scale_before, scale_after) = scale_factors(before_mass, after_mass, probability);
    let (reweighted_before, reweighted_after) =
        split_mass(&reweight(averages, cutoff_offset, probability), cutoff_offset);
    ReweightBreakdown {
        probability: probability.clamp(0.0, 1.0),
        before_mass,
        after_mass,
        scale_before,
        scale_after,
        reweighted_before,
        reweighted_after,
    }
}

/// `averages × other + reweighted × market`, slot by slot.
pub fn blend(averages: &[f64], reweighted: &[f64], weights: BlendWeights) -> Vec<f64> {
    averages
        .iter()
        .zip(reweighted)
        .map(|(avg, rw)| avg * weights.other + rw * weights.market)
        .collect()
}

/// Mass in `[0, cutoff)` and `[cutoff, len)`.
pub fn split_mass(masses: &[f64], cutoff_offset: usize) -> (f64, f64) {
    let cutoff = cutoff_offset.min(masses.len());
    let before = masses[..cutoff].iter().sum();
    let after = masses[cutoff..].iter().sum();
    (before, after)
}

fn scale_factors(before: f64, after: f64, probability: f64) -> (f64, f64) {
    let p = probability.clamp(0.0, 1.0);
    match (before > 0.0, after > 0.0) {
        (true, true) => (p / before, (1.0 - p) / after),
        (false, true) => (0.0, 1.0 / after),
        (true, false) => (1.0 / before, 0.0),
        (false, false) => (0.0, 0.0),
    }
}

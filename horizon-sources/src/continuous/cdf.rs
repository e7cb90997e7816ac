use horizon_core::config::Quantiles;
use horizon_core::errors::SourceError;
use horizon_core::ScalingSpec;
use serde::{Deserialize, Serialize};

use crate::transform::transform;

/// A discretized CDF over the unit interval.
///
/// Point `i` is the cumulative probability at unit value `i / buckets`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousCdf {
    points: Vec<f64>,
}

/// Percentile markers of one forecast, in the question's real units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CdfMarkers {
    pub lower: f64,
    pub median: f64,
    pub upper: f64,
}

impl ContinuousCdf {
    /// Wrap `points`, which must hold exactly `buckets + 1` values.
    pub fn new(points: Vec<f64>, buckets: usize) -> Result<Self, SourceError> {
        if points.len() != buckets + 1 {
            return Err(SourceError::CdfLength {
                expected: buckets + 1,
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }

    pub fn buckets(&self) -> usize {
        self.points.len() - 1
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Cumulative probability at `unit`, interpolated between the two
    /// neighbouring buckets. Units outside [0, 1] clamp to the ends.
    pub fn value_at_unit(&self, unit: f64) -> f64 {
        let buckets = self.buckets() as f64;
        let rough = (unit * buckets).clamp(0.0, buckets);
        let lower_index = rough.floor();
        let upper_index = rough.ceil();

        let lower = self.points[lower_index as usize];
        let upper = self.points[upper_index as usize];
        lower + (upper - lower) * (rough - lower_index)
    }

    /// Unit value where the CDF crosses `target`.
    ///
    /// Finds the first point strictly above `target` and interpolates the
    /// index between it and the point before. `None` if the CDF never
    /// exceeds `target`.
    pub fn quantile_unit(&self, target: f64) -> Option<f64> {
        let index = self.points.iter().position(|&p| p > target)?;
        if index == 0 {
            return Some(0.0);
        }

        let below = self.points[index - 1];
        let at = self.points[index];
        let interpolated = (index - 1) as f64 + (target - below) / (at - below);
        Some(interpolated / self.buckets() as f64)
    }

    /// Lower, median and upper markers mapped through `scaling`.
    /// `None` unless all three thresholds are crossed.
    pub fn markers(&self, scaling: &ScalingSpec, quantiles: &Quantiles) -> Option<CdfMarkers> {
        let at = |q: f64| self.quantile_unit(q).map(|unit| transform(scaling, unit));
        Some(CdfMarkers {
            lower: at(quantiles.lower)?,
            median: at(quantiles.median)?,
            upper: at(quantiles.upper)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(buckets: usize) -> ContinuousCdf {
        let points = (0..=buckets).map(|i| i as f64 / buckets as f64).collect();
        ContinuousCdf::new(points, buckets).unwrap()
    }

    #[test]
    fn rejects_wrong_length() {
        let err = ContinuousCdf::new(vec![0.0, 1.0], 200).unwrap_err();
        assert!(matches!(err, SourceError::CdfLength { expected: 201, actual: 2 }));
    }

    #[test]
    fn interpolates_between_buckets() {
        let cdf = uniform(4);
        assert!((cdf.value_at_unit(0.375) - 0.375).abs() < 1e-12);
        assert_eq!(cdf.value_at_unit(-0.5), 0.0);
        assert_eq!(cdf.value_at_unit(1.5), 1.0);
    }

    #[test]
    fn quantile_of_uniform_cdf_is_identity() {
        let cdf = uniform(200);
        for q in [0.1, 0.5, 0.9] {
            let unit = cdf.quantile_unit(q).unwrap();
            assert!((unit - q).abs() < 1e-9, "q={q} unit={unit}");
        }
    }

    #[test]
    fn markers_missing_when_cdf_never_reaches_upper() {
        let points = (0..=200).map(|i| 0.8 * i as f64 / 200.0).collect();
        let cdf = ContinuousCdf::new(points, 200).unwrap();
        let scaling = ScalingSpec::linear(0.0, 100.0);
        assert!(cdf.markers(&scaling, &Quantiles::default()).is_none());
    }

    #[test]
    fn markers_map_through_scaling() {
        let cdf = uniform(200);
        let scaling = ScalingSpec::linear(0.0, 100.0);
        let markers = cdf.markers(&scaling, &Quantiles::default()).unwrap();
        assert!((markers.lower - 10.0).abs() < 1e-6);
        assert!((markers.median - 50.0).abs() < 1e-6);
        assert!((markers.upper - 90.0).abs() < 1e-6);
    }
}

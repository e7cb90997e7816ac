use chrono::{DateTime, Duration, Utc};
use horizon_core::config::Quantiles;
use horizon_core::errors::SourceError;
use horizon_core::{
    normalize_span, ChartPoint, HorizonConfig, HorizonResult, ScalingSpec, SourceSeries,
    SourceSnapshot, YearDistribution, YearRange,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{question_years, year_distribution, year_forecasts, CdfMarkers, ContinuousCdf};

/// One aggregated forecast: a discretized CDF valid from `start_time` on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CdfForecast {
    pub start_time: DateTime<Utc>,
    pub cdf: Vec<f64>,
}

/// The parts of a date question a normalizer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSpec {
    pub id: u64,
    pub scaling: ScalingSpec,
    #[serde(default)]
    pub scheduled_close_time: Option<DateTime<Utc>>,
}

/// Daily snapshots of a question plus its percentile chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedQuestion {
    pub series: SourceSeries,
    /// `value` is the median, `range` the lower/upper markers, in unix seconds.
    pub chart: Vec<ChartPoint>,
}

/// Expands a question's forecast history into one snapshot per day.
pub struct ForecastHistory<'a> {
    question: &'a QuestionSpec,
    buckets: usize,
    quantiles: Quantiles,
    index_range: YearRange,
}

struct Prepared {
    start_time: DateTime<Utc>,
    distribution: Option<YearDistribution>,
    markers: Option<CdfMarkers>,
}

impl<'a> ForecastHistory<'a> {
    pub fn new(question: &'a QuestionSpec, config: &HorizonConfig) -> Self {
        Self {
            question,
            buckets: config.sources.cdf_buckets,
            quantiles: config.index.quantiles,
            index_range: config.index.year_range(),
        }
    }

    /// Walk day by day from the first forecast to the earlier of `until` and
    /// the question's close, carrying the latest forecast that had started.
    ///
    /// Forecasts whose yearly mass cannot be normalized are skipped with a
    /// warning; the previous forecast stays in effect for their days.
    pub fn normalize(
        &self,
        forecasts: &[CdfForecast],
        until: DateTime<Utc>,
    ) -> HorizonResult<NormalizedQuestion> {
        let label = format!("question-{}", self.question.id);
        let _span = normalize_span!(label.as_str(), forecasts.len()).entered();

        if forecasts.is_empty() {
            return Err(SourceError::EmptySeries { source_name: label }.into());
        }
        let years = question_years(&self.question.scaling).ok_or_else(|| {
            SourceError::InvalidScaling {
                reason: format!("{label} has no calendar year inside its bounds"),
            }
        })?;

        let mut sorted: Vec<&CdfForecast> = forecasts.iter().collect();
        sorted.sort_by_key(|f| f.start_time);
        let prepared = sorted
            .into_iter()
            .map(|forecast| self.prepare(forecast, years))
            .collect::<Result<Vec<_>, _>>()?;

        let end = match self.question.scheduled_close_time {
            Some(close) if close < until => close,
            _ => until,
        };

        let mut snapshots = Vec::new();
        let mut chart = Vec::new();
        let mut current: Option<usize> = None;
        let mut date = prepared[0].start_time;
        while date <= end {
            loop {
                let next = current.map_or(0, |i| i + 1);
                match prepared.get(next) {
                    Some(p) if p.start_time <= date => current = Some(next),
                    _ => break,
                }
            }
            let index = current.ok_or(SourceError::NoForecastBefore { date })?;

            if let Some(distribution) = latest_distribution(&prepared[..=index]) {
                snapshots.push(SourceSnapshot::new(date, distribution.clone()));
            }
            if let Some(m) = prepared[index].markers {
                chart.push(ChartPoint::new(date, m.median, Some([m.lower, m.upper])));
            }
            date += Duration::days(1);
        }

        debug!(
            question = self.question.id,
            days = snapshots.len(),
            chart_points = chart.len(),
            "question normalized"
        );
        Ok(NormalizedQuestion {
            series: SourceSeries::new(snapshots),
            chart,
        })
    }

    fn prepare(&self, forecast: &CdfForecast, years: YearRange) -> Result<Prepared, SourceError> {
        let cdf = ContinuousCdf::new(forecast.cdf.clone(), self.buckets)?;
        let scaling = &self.question.scaling;
        let yearly = year_forecasts(&cdf, scaling, years);
        let distribution = match year_distribution(&yearly, self.index_range) {
            Ok(distribution) => Some(distribution),
            Err(e) => {
                warn!(
                    question = self.question.id,
                    start = %forecast.start_time,
                    error = %e,
                    "skipping forecast with unusable yearly mass"
                );
                None
            }
        };
        Ok(Prepared {
            start_time: forecast.start_time,
            distribution,
            markers: cdf.markers(scaling, &self.quantiles),
        })
    }
}

fn latest_distribution(prepared: &[Prepared]) -> Option<&YearDistribution> {
    prepared.iter().rev().find_map(|p| p.distribution.as_ref())
}

//! Index assembly over the date axis.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use horizon_core::errors::SourceError;
use horizon_core::traits::IIndexEngine;
use horizon_core::{
    index_span, HorizonResult, IndexConfig, IndexDataPoint, IndexInputs, IndexReport,
    SourceSeries, StartDates,
};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::align::{align, DaySources};
use crate::average::average;
use crate::percentile::extract;
use crate::reweight::{blend, reweight, reweight_breakdown, ReweightBreakdown};

/// Builds the daily index from normalized sources.
pub struct IndexEngine {
    config: IndexConfig,
}

/// What one day of the date axis produced.
#[derive(Debug, Clone)]
enum Day {
    Point(IndexDataPoint),
    Gap(DateTime<Utc>),
}

impl Day {
    fn date(&self) -> DateTime<Utc> {
        match self {
            Day::Point(point) => point.date,
            Day::Gap(date) => *date,
        }
    }
}

impl IndexEngine {
    pub fn new(config: IndexConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// The blended distribution for `date`, or `None` if no distribution
    /// source has a snapshot on that day. Without a binary-market price
    /// the plain average is returned.
    pub fn combine(&self, inputs: &IndexInputs, date: DateTime<Utc>) -> Option<Vec<f64>> {
        self.combine_aligned(&align(inputs, date))
    }

    /// How the binary market reweights the average at timestamp `date`, if
    /// both exist.
    pub fn breakdown(&self, inputs: &IndexInputs, date: DateTime<Utc>) -> Option<ReweightBreakdown> {
        let sources = align(inputs, date);
        let averages = average(&sources.present)?;
        let point = sources.binary?;
        Some(reweight_breakdown(
            &averages,
            self.config.cutoff_offset(),
            point.probability(),
        ))
    }

    /// [`Self::breakdown`] at the date-axis timestamp that falls on `day`,
    /// so the binary-market point matches the one the build used. `None`
    /// when `day` is outside the axis.
    pub fn breakdown_on(&self, inputs: &IndexInputs, day: NaiveDate) -> Option<ReweightBreakdown> {
        let (start, end) = Self::axis(inputs)?;
        let date = start + Duration::days((day - start.date_naive()).num_days());
        if date < start || date > end {
            return None;
        }
        self.breakdown(inputs, date)
    }

    fn combine_aligned(&self, sources: &DaySources<'_>) -> Option<Vec<f64>> {
        let averages = average(&sources.present)?;
        let Some(point) = sources.binary else {
            return Some(averages);
        };
        let reweighted = reweight(&averages, self.config.cutoff_offset(), point.probability());
        Some(blend(&averages, &reweighted, self.config.weights))
    }

    fn day(&self, inputs: &IndexInputs, date: DateTime<Utc>) -> Day {
        let sources = align(inputs, date);
        let Some(distribution) = self.combine_aligned(&sources) else {
            debug!(%date, "no source on this day");
            return Day::Gap(date);
        };
        match extract(&distribution, self.config.year_range(), &self.config.quantiles) {
            Some(triple) => Day::Point(IndexDataPoint::new(date, triple)),
            None => {
                debug!(%date, sources = sources.present.len(), "percentiles not reached");
                Day::Gap(date)
            }
        }
    }

    fn validate(&self, inputs: &IndexInputs) -> HorizonResult<()> {
        let range = self.config.year_range();
        for (name, series) in named_sources(inputs) {
            if series.is_empty() {
                return Err(SourceError::EmptySeries {
                    source_name: name.to_string(),
                }
                .into());
            }
            for snapshot in series.snapshots() {
                snapshot.distribution.ensure_len(range)?;
            }
        }
        Ok(())
    }

    /// First and last timestamp of the date axis.
    fn axis(inputs: &IndexInputs) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let sources = named_sources(inputs);
        let start = sources.iter().filter_map(|(_, s)| s.first_date()).min()?;
        let end = sources.iter().filter_map(|(_, s)| s.last_date()).max()?;
        Some((start, end))
    }

    fn dates(inputs: &IndexInputs) -> Vec<DateTime<Utc>> {
        let Some((start, end)) = Self::axis(inputs) else {
            return Vec::new();
        };
        std::iter::successors(Some(start), |date| Some(*date + Duration::days(1)))
            .take_while(|date| *date <= end)
            .collect()
    }
}

impl IIndexEngine for IndexEngine {
    fn build(&self, inputs: &IndexInputs) -> HorizonResult<IndexReport> {
        self.validate(inputs)?;
        let dates = Self::dates(inputs);
        let _span = index_span!(dates.len()).entered();

        let days: Vec<Day> = if self.config.parallel {
            dates.par_iter().map(|date| self.day(inputs, *date)).collect()
        } else {
            dates.iter().map(|date| self.day(inputs, *date)).collect()
        };
        let days = trim(days, self.config.index_cutoff());

        let computed = days.first().map(Day::date).or_else(|| dates.first().copied());
        let computed = computed.unwrap_or(self.config.index_cutoff());
        let start_dates = start_dates(inputs, computed);

        let mut data = Vec::with_capacity(days.len());
        let mut gaps = Vec::new();
        for day in days {
            match day {
                Day::Point(point) => data.push(point),
                Day::Gap(date) => gaps.push(date),
            }
        }

        if !gaps.is_empty() {
            warn!(gaps = gaps.len(), "index has days without a point");
        }
        info!(
            points = data.len(),
            first = %computed,
            binary_points = inputs.binary_market.len(),
            "index built"
        );
        Ok(IndexReport {
            data,
            start_dates,
            gaps,
        })
    }
}

/// Drop days before `cutoff`. If no day reaches it, keep everything.
fn trim(days: Vec<Day>, cutoff: DateTime<Utc>) -> Vec<Day> {
    match days.iter().position(|day| day.date() >= cutoff) {
        Some(start) => days.into_iter().skip(start).collect(),
        None => days,
    }
}

fn named_sources(inputs: &IndexInputs) -> [(&'static str, &SourceSeries); 4] {
    [
        ("weak", &inputs.weak),
        ("full", &inputs.full),
        ("aux", &inputs.aux),
        ("market", &inputs.market),
    ]
}

fn start_dates(inputs: &IndexInputs, computed: DateTime<Utc>) -> StartDates {
    let effective = |series: &SourceSeries| series.first_date().map_or(computed, |d| d.max(computed));
    StartDates {
        computed,
        weak_source: effective(&inputs.weak),
        full_source: effective(&inputs.full),
        aux_source: effective(&inputs.aux),
        market_source: effective(&inputs.market),
        binary_market_source: inputs.binary_market.first_date().map(|d| d.max(computed)),
    }
}

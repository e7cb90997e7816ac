use chrono::{DateTime, Datelike, NaiveDate, Utc};
use horizon_core::errors::DistributionError;
use horizon_core::{ScalingSpec, YearDistribution, YearRange};
use serde::{Deserialize, Serialize};

use super::ContinuousCdf;
use crate::transform::inverse_transform;

/// CDF at Jan 1 of `year` and the mass added since Jan 1 of the previous year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearForecast {
    pub year: i32,
    pub cdf_value: f64,
    pub pdf_value: f64,
}

/// Calendar years whose Jan 1 lies inside the question's date bounds
/// (bounds are unix seconds). `None` when a bound is missing or the range
/// holds no Jan 1.
pub fn question_years(scaling: &ScalingSpec) -> Option<YearRange> {
    let (min, max) = scaling.bounds()?;
    let start = first_year_on_or_after(DateTime::from_timestamp(min as i64, 0)?);
    let end = last_year_on_or_before(DateTime::from_timestamp(max as i64, 0)?);
    (start <= end).then(|| YearRange::new(start, end))
}

/// Read `cdf` at Jan 1 of every year in `years` and difference consecutive values.
///
/// The first year's mass is its whole CDF value.
pub fn year_forecasts(cdf: &ContinuousCdf, scaling: &ScalingSpec, years: YearRange) -> Vec<YearForecast> {
    let mut previous = 0.0;
    years
        .years()
        .map(|year| {
            let unit = inverse_transform(scaling, jan_first_secs(year));
            let cdf_value = cdf.value_at_unit(unit);
            let pdf_value = cdf_value - previous;
            previous = cdf_value;
            YearForecast {
                year,
                cdf_value,
                pdf_value,
            }
        })
        .collect()
}

/// Lay yearly mass out on `range` and normalize. Years the forecast does not
/// cover get no mass.
pub fn year_distribution(
    forecasts: &[YearForecast],
    range: YearRange,
) -> Result<YearDistribution, DistributionError> {
    let first_year = forecasts.first().map(|f| f.year).unwrap_or(range.start);
    YearDistribution::from_lookup(range, |year| {
        let index = usize::try_from(year - first_year).ok()?;
        // Interpolation noise on a flat CDF can dip a difference just below zero.
        forecasts.get(index).map(|f| f.pdf_value.max(0.0))
    })
}

fn jan_first(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
}

fn jan_first_secs(year: i32) -> f64 {
    jan_first(year)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|d| d.and_utc().timestamp() as f64)
        .unwrap_or(f64::NAN)
}

fn first_year_on_or_after(date: DateTime<Utc>) -> i32 {
    let year = date.year();
    match jan_first(year).and_then(|d| d.and_hms_opt(0, 0, 0)) {
        Some(start) if date.naive_utc() <= start => year,
        _ => year + 1,
    }
}

fn last_year_on_or_before(date: DateTime<Utc>) -> i32 {
    // Every date is on or after Jan 1 of its own year.
    date.year()
}

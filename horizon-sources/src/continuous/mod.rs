//! Continuous-CDF questions.
//!
//! Each forecast row carries a CDF sampled at `cdf_buckets + 1` evenly spaced
//! unit values. Per calendar year the CDF is read at Jan 1 (through the
//! question's inverse transform) and differenced into yearly mass; the
//! resulting distribution is carried forward day by day until the next
//! forecast starts.

pub mod aggregation;
pub mod cdf;
pub mod history;
pub mod year_pdf;

pub use aggregation::{aggregation_points, AggregationEntry};
pub use cdf::{CdfMarkers, ContinuousCdf};
pub use history::{CdfForecast, ForecastHistory, NormalizedQuestion, QuestionSpec};
pub use year_pdf::{question_years, year_distribution, year_forecasts, YearForecast};

//! Golden end-to-end scenarios for the index build.
//!
//! Each file under `test-fixtures/golden/index/` gives sparse per-year
//! weights for the three question sources, raw answer prices for the
//! betting market and a binary-market series, plus the exact report data.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use horizon_core::{
    BinaryMarketPoint, BinaryMarketSeries, IIndexEngine, IndexConfig, IndexInputs, SourceSeries,
    SourceSnapshot, YearDistribution,
};
use horizon_index::IndexEngine;
use horizon_sources::discrete::market_distribution;
use serde::Deserialize;
use test_fixtures::{list_fixtures, load_golden, GoldenScenario};

#[derive(Debug, Deserialize)]
struct DatedYears {
    date: DateTime<Utc>,
    years: BTreeMap<i32, f64>,
}

#[derive(Debug, Deserialize)]
struct DatedPrices {
    date: DateTime<Utc>,
    prices: BTreeMap<i32, f64>,
}

#[derive(Debug, Deserialize)]
struct QuestionSources {
    weak: Vec<DatedYears>,
    full: Vec<DatedYears>,
    aux: Vec<DatedYears>,
}

#[derive(Debug, Deserialize)]
struct Input {
    sources: QuestionSources,
    market: Vec<DatedPrices>,
    #[serde(default)]
    binary_market: Vec<BinaryMarketPoint>,
}

#[derive(Debug, Deserialize)]
struct Expected {
    data: serde_json::Value,
    gaps: Vec<DateTime<Utc>>,
    computed: DateTime<Utc>,
}

type Scenario = GoldenScenario<Input, Expected>;

fn question_series(config: &IndexConfig, rows: &[DatedYears]) -> SourceSeries {
    rows.iter()
        .map(|row| {
            let dist = YearDistribution::from_lookup(config.year_range(), |y| row.years.get(&y).copied())
                .unwrap();
            SourceSnapshot::new(row.date, dist)
        })
        .collect()
}

fn market_series(config: &IndexConfig, rows: &[DatedPrices]) -> SourceSeries {
    rows.iter()
        .map(|row| {
            let dist = market_distribution(&row.prices, config.year_range()).unwrap();
            SourceSnapshot::new(row.date, dist)
        })
        .collect()
}

fn inputs(config: &IndexConfig, input: &Input) -> IndexInputs {
    IndexInputs {
        weak: question_series(config, &input.sources.weak),
        full: question_series(config, &input.sources.full),
        aux: question_series(config, &input.sources.aux),
        market: market_series(config, &input.market),
        binary_market: BinaryMarketSeries::new(input.binary_market.clone()),
    }
}

fn check(path: &str, parallel: bool) {
    let scenario: Scenario = load_golden(path);
    let config = IndexConfig {
        parallel,
        ..IndexConfig::default()
    };
    let inputs = inputs(&config, &scenario.input);
    let report = IndexEngine::new(config).build(&inputs).unwrap();

    assert_eq!(
        serde_json::to_value(&report.data).unwrap(),
        scenario.expected.data,
        "{path}: {}",
        scenario.description
    );
    assert_eq!(report.gaps, scenario.expected.gaps, "{path}: gaps");
    assert_eq!(report.start_dates.computed, scenario.expected.computed, "{path}: computed");
}

#[test]
fn agreement_with_zero_binary_price_stays_on_agreed_year() {
    check("golden/index/agreement_binary_zero.json", true);
}

#[test]
fn high_binary_price_cannot_fill_empty_years() {
    check("golden/index/agreement_binary_high.json", true);
}

#[test]
fn spread_distribution() {
    check("golden/index/spread_distribution.json", true);
}

#[test]
fn percentile_bounds() {
    check("golden/index/percentile_bounds.json", true);
}

#[test]
fn unnormalized_scales() {
    check("golden/index/unnormalized_scales.json", true);
}

#[test]
fn trim_falls_back_to_full_series() {
    check("golden/index/trim_fallback.json", true);
}

#[test]
fn trim_starts_at_index_cutoff() {
    check("golden/index/trim_at_cutoff.json", true);
}

#[test]
fn sequential_build_matches_every_golden() {
    let files = list_fixtures("golden/index");
    assert!(!files.is_empty());
    for file in files {
        let name = file.file_name().unwrap().to_string_lossy().into_owned();
        check(&format!("golden/index/{name}"), false);
    }
}

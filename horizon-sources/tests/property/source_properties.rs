use std::collections::BTreeMap;

use horizon_core::{ScalingSpec, YearRange};
use horizon_sources::continuous::{question_years, year_distribution, year_forecasts, ContinuousCdf};
use horizon_sources::discrete::market_distribution;
use horizon_sources::{inverse_transform, transform};
use proptest::prelude::*;

const INDEX_RANGE: YearRange = YearRange { start: 2024, end: 2199 };

fn jan_first(year: i32) -> f64 {
    chrono::NaiveDate::from_ymd_opt(year, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp() as f64
}

/// A monotone 201-point CDF from 0 to 1.
fn arb_cdf() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..1.0, 200).prop_filter_map("all-zero increments", |steps| {
        let total: f64 = steps.iter().sum();
        if total <= 0.0 {
            return None;
        }
        let mut points = Vec::with_capacity(201);
        let mut running = 0.0;
        points.push(0.0);
        for step in steps {
            running += step;
            points.push(running / total);
        }
        Some(points)
    })
}

// ── Transform round trip ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn linear_round_trip(unit in 0.0f64..=1.0) {
        let scaling = ScalingSpec::linear(2024.0, 2100.0);
        let back = inverse_transform(&scaling, transform(&scaling, unit));
        prop_assert!((back - unit).abs() < 1e-9);
    }

    #[test]
    fn logarithmic_round_trip(
        unit in 0.0f64..=1.0,
        min in 1.0f64..1000.0,
        span in 1.0f64..1000.0,
        below in 0.5f64..100.0,
    ) {
        let scaling = ScalingSpec::logarithmic(min, min + span, min - below);
        let back = inverse_transform(&scaling, transform(&scaling, unit));
        prop_assert!((back - unit).abs() < 1e-7);
    }
}

// ── Normalization ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn question_distribution_sums_to_one(points in arb_cdf()) {
        let scaling = ScalingSpec::linear(jan_first(2024), jan_first(2100));
        let cdf = ContinuousCdf::new(points, 200).unwrap();
        let years = question_years(&scaling).unwrap();
        let forecasts = year_forecasts(&cdf, &scaling, years);

        if let Ok(dist) = year_distribution(&forecasts, INDEX_RANGE) {
            prop_assert_eq!(dist.len(), INDEX_RANGE.len());
            prop_assert!((dist.total() - 1.0).abs() < 1e-9);
            prop_assert!(dist.masses().iter().all(|m| *m >= 0.0));
        }
    }

    #[test]
    fn market_distribution_sums_to_one(prices in prop::collection::vec(0.0f64..1.0, 26)) {
        prop_assume!(prices.iter().any(|p| *p > 0.0));
        let probabilities: BTreeMap<i32, f64> = (2024..).zip(prices).collect();

        if let Ok(dist) = market_distribution(&probabilities, INDEX_RANGE) {
            prop_assert!((dist.total() - 1.0).abs() < 1e-9);
        }
    }
}

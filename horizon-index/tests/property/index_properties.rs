use chrono::{TimeZone, Utc};
use horizon_core::config::BlendWeights;
use horizon_core::{
    BinaryMarketPoint, BinaryMarketSeries, IIndexEngine, IndexConfig, IndexInputs, SourceSeries,
    SourceSnapshot, YearDistribution,
};
use horizon_index::percentile::extract;
use horizon_index::reweight::{blend, reweight, split_mass};
use horizon_index::IndexEngine;
use proptest::prelude::*;

const SLOTS: usize = 176;
const CUTOFF: usize = 6;

/// A normalized 176-slot distribution with mass on both sides of the cutoff.
fn arb_distribution() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..1.0, SLOTS).prop_filter_map("needs mass on both sides", |w| {
        let (before, after) = split_mass(&w, CUTOFF);
        if before <= 1e-6 || after <= 1e-6 {
            return None;
        }
        YearDistribution::from_weights(w).ok().map(Vec::from)
    })
}

fn single_day_inputs(masses: Vec<f64>, percent: f64) -> IndexInputs {
    let date = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
    let dist = YearDistribution::from_weights(masses).unwrap();
    let snapshot = || SourceSeries::new(vec![SourceSnapshot::new(date, dist.clone())]);
    IndexInputs {
        weak: snapshot(),
        full: snapshot(),
        aux: snapshot(),
        market: snapshot(),
        binary_market: BinaryMarketSeries::new(vec![BinaryMarketPoint::new(date, percent)]),
    }
}

// ── Percentile ordering ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn percentiles_are_ordered_and_in_range(masses in arb_distribution(), percent in 0.0f64..=100.0) {
        let config = IndexConfig::default();
        let report = IndexEngine::new(config.clone()).build(&single_day_inputs(masses, percent)).unwrap();

        prop_assert_eq!(report.data.len(), 1);
        let point = &report.data[0];
        let [lower, upper] = point.range;
        prop_assert!(lower <= point.value && point.value <= upper);
        prop_assert!(config.start_year <= lower && upper <= config.end_year);
    }
}

// ── Binary-market mass conservation ──────────────────────────────────────

proptest! {
    #[test]
    fn reweighting_matches_binary_split(masses in arb_distribution(), p in 0.0f64..=1.0) {
        let reweighted = reweight(&masses, CUTOFF, p);
        let (before, after) = split_mass(&reweighted, CUTOFF);
        prop_assert!((before - p).abs() < 1e-9);
        prop_assert!((after - (1.0 - p)).abs() < 1e-9);
    }

    #[test]
    fn blended_distribution_still_sums_to_one(masses in arb_distribution(), p in 0.0f64..=1.0) {
        let reweighted = reweight(&masses, CUTOFF, p);
        let blended = blend(&masses, &reweighted, BlendWeights::default());
        prop_assert!((blended.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }
}

// ── Blend identity ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn zero_market_weight_is_the_plain_average(masses in arb_distribution(), p in 0.0f64..=1.0) {
        let reweighted = reweight(&masses, CUTOFF, p);
        let blended = blend(&masses, &reweighted, BlendWeights::with_market(0.0));
        prop_assert_eq!(blended, masses);
    }
}

// ── Monotonic binary-market effect ───────────────────────────────────────

proptest! {
    #[test]
    fn higher_binary_price_never_delays_the_median(
        masses in arb_distribution(),
        low in 0.0f64..=100.0,
        high in 0.0f64..=100.0,
    ) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let engine = IndexEngine::new(IndexConfig::default());
        let at_low = engine.build(&single_day_inputs(masses.clone(), low)).unwrap();
        let at_high = engine.build(&single_day_inputs(masses, high)).unwrap();
        prop_assert!(at_high.data[0].value <= at_low.data[0].value);
    }
}

#[test]
fn point_mass_after_cutoff_ignores_binary_price() {
    let mut masses = vec![0.0; SLOTS];
    masses[11] = 1.0;
    let engine = IndexEngine::new(IndexConfig::default());
    let low = engine.build(&single_day_inputs(masses.clone(), 10.0)).unwrap();
    let high = engine.build(&single_day_inputs(masses, 90.0)).unwrap();
    assert_eq!(low.data[0].value, 2035);
    assert!(high.data[0].value <= low.data[0].value);
}

#[test]
fn extract_reads_point_mass() {
    let config = IndexConfig::default();
    let mut masses = vec![0.0; SLOTS];
    masses[11] = 1.0;
    let triple = extract(&masses, config.year_range(), &config.quantiles).unwrap();
    assert_eq!((triple.lower, triple.median, triple.upper), (2035, 2035, 2035));
}

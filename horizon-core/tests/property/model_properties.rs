use chrono::{Duration, TimeZone, Utc};
use horizon_core::{SourceSeries, SourceSnapshot, YearDistribution};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalized_weights_sum_to_one(weights in prop::collection::vec(0.0f64..10.0, 1..200)) {
        prop_assume!(weights.iter().sum::<f64>() > 0.0);
        let dist = YearDistribution::from_weights(weights).unwrap();
        prop_assert!((dist.total() - 1.0).abs() < 1e-9);
        prop_assert!(dist.masses().iter().all(|m| *m >= 0.0));
    }

    #[test]
    fn series_is_sorted_with_one_snapshot_per_day(hours in prop::collection::vec(0i64..24 * 30, 1..60)) {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let dist = YearDistribution::from_weights(vec![1.0]).unwrap();
        let series: SourceSeries = hours
            .iter()
            .map(|h| SourceSnapshot::new(start + Duration::hours(*h), dist.clone()))
            .collect();

        let days: Vec<_> = series.snapshots().iter().map(SourceSnapshot::day).collect();
        prop_assert!(days.windows(2).all(|w| w[0] < w[1]));

        let distinct: std::collections::BTreeSet<_> =
            hours.iter().map(|h| (start + Duration::hours(*h)).date_naive()).collect();
        prop_assert_eq!(days.len(), distinct.len());

        // Each kept snapshot is the latest one of its day.
        for snapshot in series.snapshots() {
            let latest = hours
                .iter()
                .map(|h| start + Duration::hours(*h))
                .filter(|d| d.date_naive() == snapshot.day())
                .max()
                .unwrap();
            prop_assert_eq!(snapshot.date, latest);
        }
    }
}

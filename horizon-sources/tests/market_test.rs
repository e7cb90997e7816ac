use chrono::{DateTime, Duration, NaiveDate, Utc};
use horizon_core::errors::SourceError;
use horizon_core::{HorizonConfig, HorizonError};
use horizon_sources::discrete::normalize_market;
use horizon_sources::BetEvent;

fn morning(day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2024, 5, day)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
        .and_utc()
}

fn bet(answer_id: &str, prob_after: f64, created_time: DateTime<Utc>) -> BetEvent {
    BetEvent {
        answer_id: answer_id.to_string(),
        prob_after,
        created_time,
        is_cancelled: false,
    }
}

/// Prices every answer once: 2025 at 0.6, 2026 at 0.2, 2027 at 0.1, the rest at 0.001.
fn opening_bets(config: &HorizonConfig) -> Vec<BetEvent> {
    config
        .sources
        .answer_years
        .iter()
        .enumerate()
        .map(|(i, (id, year))| {
            let price = match year {
                2025 => 0.6,
                2026 => 0.2,
                2027 => 0.1,
                _ => 0.001,
            };
            bet(id, price, morning(1) + Duration::minutes(i as i64))
        })
        .collect()
}

fn answer_for(config: &HorizonConfig, year: i32) -> String {
    config
        .sources
        .answer_years
        .iter()
        .find(|(_, y)| **y == year)
        .map(|(id, _)| id.clone())
        .unwrap()
}

#[test]
fn normalizes_every_day_between_first_and_last_bet() {
    let config = HorizonConfig::default();
    let mut bets = opening_bets(&config);
    bets.push(bet(&answer_for(&config, 2025), 0.05, morning(3)));

    let market = normalize_market(&bets, &config).unwrap();
    let snapshots = market.series.snapshots();

    assert_eq!(snapshots.len(), 3);
    for snapshot in snapshots {
        assert_eq!(snapshot.distribution.len(), 176);
        assert!((snapshot.distribution.total() - 1.0).abs() < 1e-9);
    }
    // Day two has no bets and repeats day one.
    assert_eq!(snapshots[1].distribution, snapshots[0].distribution);
    assert!(snapshots[2].distribution.masses()[1] < snapshots[0].distribution.masses()[1]);
}

#[test]
fn chart_reads_percentiles_off_the_prices() {
    let config = HorizonConfig::default();
    let market = normalize_market(&opening_bets(&config), &config).unwrap();

    assert_eq!(market.chart.len(), 1);
    let point = market.chart[0];
    assert_eq!(point.value, 2025.0);
    assert_eq!(point.range, Some([2025.0, 2027.0]));

    let day = market.series.snapshots()[0].date;
    assert_eq!(day, point.date);
    assert_eq!(day.format("%H:%M").to_string(), "00:00");
}

#[test]
fn cancelled_and_unknown_bets_do_not_move_prices() {
    let config = HorizonConfig::default();
    let mut bets = opening_bets(&config);
    let mut cancelled = bet(&answer_for(&config, 2025), 0.9, morning(2));
    cancelled.is_cancelled = true;
    bets.push(cancelled);
    bets.push(bet("not-an-answer", 0.9, morning(2)));
    bets.push(bet(&answer_for(&config, 2026), 0.2, morning(2)));

    let market = normalize_market(&bets, &config).unwrap();
    let snapshots = market.series.snapshots();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0].distribution, snapshots[1].distribution);
}

#[test]
fn incomplete_pricing_is_an_empty_series() {
    let config = HorizonConfig::default();
    let bets = vec![bet(&answer_for(&config, 2030), 0.3, morning(1))];
    let err = normalize_market(&bets, &config).unwrap_err();
    assert!(matches!(
        err,
        HorizonError::Source(SourceError::EmptySeries { .. })
    ));
}

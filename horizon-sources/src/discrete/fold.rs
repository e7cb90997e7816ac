use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use super::BetEvent;

/// Latest known price of every answer at the end of `day`, keyed by year.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyProbabilities {
    pub day: NaiveDate,
    pub probabilities: BTreeMap<i32, f64>,
}

/// Fold bets into one price map per day, from the first bet's day to the
/// last bet's day.
///
/// Each day's map is the previous day's map with that day's bets applied in
/// time order. Days before every mapped year has been priced at least once
/// are dropped. Cancelled bets and unknown answers are ignored.
pub fn daily_probabilities(
    bets: &[BetEvent],
    answer_years: &BTreeMap<String, i32>,
) -> Vec<DailyProbabilities> {
    let mut priced: Vec<(&BetEvent, i32)> = bets
        .iter()
        .filter_map(|bet| bet.year(answer_years).map(|year| (bet, year)))
        .collect();
    priced.sort_by_key(|(bet, _)| bet.created_time);

    let mut by_day: BTreeMap<NaiveDate, Vec<(i32, f64)>> = BTreeMap::new();
    for (bet, year) in priced {
        by_day
            .entry(bet.created_time.date_naive())
            .or_default()
            .push((year, bet.prob_after));
    }

    let (Some(&first), Some(&last)) = (by_day.keys().next(), by_day.keys().next_back()) else {
        return Vec::new();
    };
    let required = answer_years.values().collect::<BTreeSet<_>>().len();

    first
        .iter_days()
        .take_while(|day| *day <= last)
        .scan(BTreeMap::new(), |state, day| {
            let updates = by_day.get(&day).map(Vec::as_slice).unwrap_or_default();
            *state = apply(state, updates);
            Some(DailyProbabilities {
                day,
                probabilities: state.clone(),
            })
        })
        .filter(|daily| daily.probabilities.len() == required)
        .collect()
}

fn apply(previous: &BTreeMap<i32, f64>, updates: &[(i32, f64)]) -> BTreeMap<i32, f64> {
    let mut next = previous.clone();
    next.extend(updates.iter().copied());
    next
}

use horizon_core::SourceSnapshot;

/// Slot-wise mean of the present sources. `None` when no source is present.
///
/// Sources are expected to share one year axis; slots are summed in source
/// order and divided by the number of sources.
pub fn average(present: &[&SourceSnapshot]) -> Option<Vec<f64>> {
    let first = present.first()?;
    let mut sums = vec![0.0; first.distribution.len()];
    for snapshot in present {
        for (sum, mass) in sums.iter_mut().zip(snapshot.distribution.masses()) {
            *sum += mass;
        }
    }
    let count = present.len() as f64;
    Some(sums.into_iter().map(|sum| sum / count).collect())
}

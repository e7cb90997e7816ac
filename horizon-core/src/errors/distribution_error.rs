/// Errors raised while building a year distribution.
#[derive(Debug, thiserror::Error)]
pub enum DistributionError {
    #[error("distribution has {actual} slots, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("distribution cannot be normalized: slot sum is {sum}")]
    Degenerate { sum: f64 },

    #[error("negative mass {value} at slot {offset}")]
    NegativeMass { offset: usize, value: f64 },
}

/// Seconds in one day.
pub const SECS_PER_DAY: i64 = 86_400;

/// First year of every year distribution.
pub const START_YEAR: i32 = 2024;

/// Last year (inclusive) of every year distribution.
pub const END_YEAR: i32 = 2199;

/// Binary-market cutoff: mass before this year is "yes", mass from it on is "no".
pub const CUTOFF_YEAR: i32 = 2030;

/// Days before this date are dropped from the emitted index.
pub const INDEX_CUTOFF_DATE: &str = "2020-02-02";

/// Weight of the plain cross-source average in the final blend.
pub const OTHER_SOURCES_WEIGHT: f64 = 0.8;

/// Weight of the binary-market reweighted distribution in the final blend.
pub const MARKET_WEIGHT: f64 = 0.2;

/// Number of buckets in a discretized CDF (the CDF has `CDF_BUCKETS + 1` points).
pub const CDF_BUCKETS: usize = 200;

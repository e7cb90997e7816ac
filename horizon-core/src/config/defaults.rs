// Single source of truth for all default values.

use crate::constants;

// --- Index ---
pub const DEFAULT_START_YEAR: i32 = constants::START_YEAR;
pub const DEFAULT_END_YEAR: i32 = constants::END_YEAR;
pub const DEFAULT_CUTOFF_YEAR: i32 = constants::CUTOFF_YEAR;
pub const DEFAULT_INDEX_CUTOFF_DATE: &str = constants::INDEX_CUTOFF_DATE;
pub const DEFAULT_OTHER_WEIGHT: f64 = constants::OTHER_SOURCES_WEIGHT;
pub const DEFAULT_MARKET_WEIGHT: f64 = constants::MARKET_WEIGHT;
pub const DEFAULT_LOWER_QUANTILE: f64 = 0.1;
pub const DEFAULT_MEDIAN_QUANTILE: f64 = 0.5;
pub const DEFAULT_UPPER_QUANTILE: f64 = 0.9;
pub const DEFAULT_PARALLEL: bool = true;

// --- Sources ---
pub const DEFAULT_CDF_BUCKETS: usize = constants::CDF_BUCKETS;
pub const DEFAULT_MAX_NONZERO_YEARS_SCANNED: usize = 10;

/// Answer ids of the yearly betting market, one per target year 2024..=2049.
pub const DEFAULT_ANSWER_YEARS: [(&str, i32); 26] = [
    ("2cdb91507b0d", 2024),
    ("ed73a628dbcc", 2025),
    ("e8aae6520563", 2026),
    ("67ea62c46640", 2027),
    ("1d0fd5249e2c", 2028),
    ("fc63e30d0cd3", 2029),
    ("5d48ed784957", 2030),
    ("da223cf612c4", 2031),
    ("1120df2c949a", 2032),
    ("77f7e579eac6", 2033),
    ("c398134a9e34", 2034),
    ("b586da03d2ec", 2035),
    ("a6051fa037db", 2036),
    ("4271e6a3e455", 2037),
    ("aa017a9cebe3", 2038),
    ("46ff975d1efe", 2039),
    ("cccb4c406baf", 2040),
    ("9ae19221aa18", 2041),
    ("6039886c26fa", 2042),
    ("4322a973f59c", 2043),
    ("1f24b6787f0d", 2044),
    ("0f172ca6223b", 2045),
    ("9b885d17779f", 2046),
    ("9199140a0c5f", 2047),
    ("659fc2df1d1d", 2048),
    ("c43dc66076d5", 2049),
];

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Tolerance used when checking that blend weights sum to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

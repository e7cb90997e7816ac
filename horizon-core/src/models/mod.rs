mod binary_market;
mod chart_point;
mod index_inputs;
mod index_point;
pub mod iso_millis;
mod scaling;
mod snapshot;
mod year_distribution;
mod year_range;

pub use binary_market::{BinaryMarketPoint, BinaryMarketSeries};
pub use chart_point::ChartPoint;
pub use index_inputs::IndexInputs;
pub use index_point::{IndexDataPoint, IndexReport, PercentileTriple, StartDates};
pub use scaling::ScalingSpec;
pub use snapshot::{SourceSeries, SourceSnapshot};
pub use year_distribution::YearDistribution;
pub use year_range::YearRange;

mod config_error;
mod distribution_error;
mod horizon_error;
mod source_error;

pub use config_error::ConfigError;
pub use distribution_error::DistributionError;
pub use horizon_error::{HorizonError, HorizonResult};
pub use source_error::SourceError;

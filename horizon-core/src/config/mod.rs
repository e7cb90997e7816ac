pub mod defaults;
pub mod horizon_config;
pub mod index_config;
pub mod observability_config;
pub mod sources_config;

pub use horizon_config::HorizonConfig;
pub use index_config::{BlendWeights, IndexConfig, Quantiles};
pub use observability_config::ObservabilityConfig;
pub use sources_config::SourcesConfig;

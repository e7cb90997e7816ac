//! Top-level Horizon configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, BlendWeights, IndexConfig, ObservabilityConfig, SourcesConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`HORIZON_*`)
/// 2. Config file passed to [`HorizonConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HorizonConfig {
    pub index: IndexConfig,
    pub sources: SourcesConfig,
    pub observability: ObservabilityConfig,
}

impl HorizonConfig {
    /// Load configuration: defaults, then the optional TOML file, then env overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let index = &self.index;
        if index.start_year >= index.end_year {
            return Err(invalid("index.start_year", "must be before index.end_year"));
        }
        if index.cutoff_year <= index.start_year || index.cutoff_year > index.end_year {
            return Err(invalid(
                "index.cutoff_year",
                "must be after index.start_year and no later than index.end_year",
            ));
        }

        let BlendWeights { other, market } = index.weights;
        if !(0.0..=1.0).contains(&other) || !(0.0..=1.0).contains(&market) {
            return Err(invalid("index.weights", "each weight must be between 0.0 and 1.0"));
        }
        if (other + market - 1.0).abs() > defaults::WEIGHT_SUM_TOLERANCE {
            return Err(invalid("index.weights", "weights must sum to 1.0"));
        }

        let [lower, median, upper] = index.quantiles.as_array();
        if !(0.0 < lower && lower < median && median < upper && upper < 1.0) {
            return Err(invalid(
                "index.quantiles",
                "must satisfy 0 < lower < median < upper < 1",
            ));
        }

        if self.sources.cdf_buckets == 0 {
            return Err(invalid("sources.cdf_buckets", "must be greater than 0"));
        }
        if self.sources.max_nonzero_years_scanned == 0 {
            return Err(invalid(
                "sources.max_nonzero_years_scanned",
                "must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `HORIZON_INDEX_MARKET_WEIGHT`, `HORIZON_LOG_LEVEL`, etc.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup. Unparseable values are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("HORIZON_INDEX_MARKET_WEIGHT").and_then(|v| v.parse::<f64>().ok()) {
            self.index.weights = BlendWeights::with_market(v);
        }
        if let Some(v) = lookup("HORIZON_INDEX_CUTOFF_YEAR").and_then(|v| v.parse::<i32>().ok()) {
            self.index.cutoff_year = v;
        }
        if let Some(v) = lookup("HORIZON_INDEX_PARALLEL").and_then(|v| v.parse::<bool>().ok()) {
            self.index.parallel = v;
        }
        if let Some(v) = lookup("HORIZON_LOG_LEVEL") {
            self.observability.log_level = v;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

//! Analytics configuration types.
//!
//! Each subsystem has its own section with serde defaults and a
//! `validate()` method; [`AnalyticsConfig`] aggregates them.
//!
//! Configuration can be built in code, read from a TOML file, or layered
//! from files and environment variables with [`AnalyticsConfig::load`].

mod cache;
mod insights;
mod trends;


pub use self::cache::CacheConfig;
pub use self::insights::InsightConfig;
pub use self::trends::TrendConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Environment variable selecting the environment-specific config file.
pub const ENV_SELECTOR: &str = "MOODSCAPE_ENV";

/// Prefix for environment variable overrides, e.g. `MOODSCAPE__TRENDS__UTC_OFFSET_MINUTES`.
pub const ENV_PREFIX: &str = "MOODSCAPE";

/// Top-level analytics configuration.
///
/// # Example
///
/// ```
/// use moodscape_analytics::config::AnalyticsConfig;
///
/// let config = AnalyticsConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.trends.default_window_days, 7);
/// assert_eq!(config.insights.min_trend_entries, 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Calendar and window settings.
    #[serde(default)]
    pub trends: TrendConfig,

    /// Insight rule thresholds.
    #[serde(default)]
    pub insights: InsightConfig,

    /// Aggregate cache settings.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Enable debug logging of every aggregation pass.
    #[serde(default)]
    pub debug: bool,
}

impl AnalyticsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from files and environment.
    ///
    /// Sources are layered in order:
    /// 1. `config/default.toml`
    /// 2. `config/{MOODSCAPE_ENV}.toml` (`development` if unset)
    /// 3. Environment variables with the `MOODSCAPE__` prefix
    pub fn load() -> AnalyticsResult<Self> {
        let env = std::env::var(ENV_SELECTOR).unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"));

        let config: AnalyticsConfig = builder.build()?.try_deserialize()?;
        config.validate().map_err(AnalyticsError::ConfigError)?;
        Ok(config)
    }

    /// Load configuration from a TOML file. Missing sections take defaults.
    pub fn from_file(path: &Path) -> AnalyticsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalyticsError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> AnalyticsResult<Self> {
        let config: AnalyticsConfig = toml::from_str(content).map_err(|e| {
            AnalyticsError::ConfigError(format!("Failed to parse config: {}", e))
        })?;
        config.validate().map_err(AnalyticsError::ConfigError)?;
        Ok(config)
    }

    /// Validate the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.trends.validate()?;
        self.insights.validate()?;
        self.cache.validate()?;
        Ok(())
    }
}

//! Aggregate cache settings.

use serde::{Deserialize, Serialize};

fn default_cache_enabled() -> bool {
    true
}

fn default_max_entries() -> usize {
    32
}

/// Settings for the explicit aggregate cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether the processor keeps a cache at all.
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,

    /// Cached aggregates kept before the oldest is evicted.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            max_entries: default_max_entries(),
        }
    }
}

impl CacheConfig {
    /// A configuration with caching turned off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Validate the cache configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.enabled && self.max_entries == 0 {
            return Err("max_entries must be > 0 when the cache is enabled".to_string());
        }
        Ok(())
    }
}

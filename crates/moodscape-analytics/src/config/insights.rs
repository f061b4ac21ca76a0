//! Insight rule thresholds.

use serde::{Deserialize, Serialize};

/// Thresholds for the insight rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    /// Minimum change in mean calmness between the two halves of the window
    /// before a trend is reported. The comparison is strict.
    pub calmness_trend_threshold: f64,

    /// Entries required inside the window before the calmness trend rule runs.
    pub min_trend_entries: usize,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            calmness_trend_threshold: 5.0,
            min_trend_entries: 3,
        }
    }
}

impl InsightConfig {
    /// Validate the insight configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.calmness_trend_threshold.is_finite() || self.calmness_trend_threshold < 0.0 {
            return Err(format!(
                "calmness_trend_threshold must be finite and >= 0, got {}",
                self.calmness_trend_threshold
            ));
        }
        if self.min_trend_entries < 2 {
            return Err(format!(
                "min_trend_entries must be >= 2 to split into halves, got {}",
                self.min_trend_entries
            ));
        }
        Ok(())
    }
}

//! Trend aggregation settings.

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Calendar and window settings for trend aggregation.
///
/// Local dates, hours, and weekdays are computed with a fixed UTC offset so
/// that aggregation stays deterministic regardless of the host time zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Offset of the user's local time from UTC, in minutes.
    /// Range: `[-720, 840]`
    pub utc_offset_minutes: i32,

    /// Window used when the caller does not pass one.
    /// Range: `[1, 3660]`
    pub default_window_days: i64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
            default_window_days: 7,
        }
    }
}

impl TrendConfig {
    pub const MIN_OFFSET_MINUTES: i32 = -12 * 60;
    pub const MAX_OFFSET_MINUTES: i32 = 14 * 60;
    pub const MAX_WINDOW_DAYS: i64 = 3660;

    /// The configured offset as a chrono offset. Falls back to UTC if the
    /// value is out of range.
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60))
            .unwrap_or_else(|| Utc.fix())
    }

    /// Validate the trend configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(Self::MIN_OFFSET_MINUTES..=Self::MAX_OFFSET_MINUTES).contains(&self.utc_offset_minutes)
        {
            return Err(format!(
                "utc_offset_minutes must be in [{}, {}], got {}",
                Self::MIN_OFFSET_MINUTES,
                Self::MAX_OFFSET_MINUTES,
                self.utc_offset_minutes
            ));
        }
        if !(1..=Self::MAX_WINDOW_DAYS).contains(&self.default_window_days) {
            return Err(format!(
                "default_window_days must be in [1, {}], got {}",
                Self::MAX_WINDOW_DAYS,
                self.default_window_days
            ));
        }
        Ok(())
    }
}

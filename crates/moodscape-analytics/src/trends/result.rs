//! Aggregation output types.

use moodscape_core::EmotionMap;
use serde::{Deserialize, Serialize};

use super::buckets::{DayOfWeekCounts, SourceCounts, TimeOfDayCounts};
use super::daily::DailySeries;
use super::weekly::WeeklyComparison;

/// Milliseconds in one day.
pub const DAY_MS: i64 = 86_400_000;

/// The rolling window an aggregate was computed over.
///
/// Both ends are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateWindow {
    pub days: i64,
    pub start_ms: i64,
    pub end_ms: i64,
}

impl AggregateWindow {
    /// Window of `days` ending at `now_ms`. Negative `days` is treated as 0.
    pub fn ending_at(days: i64, now_ms: i64) -> Self {
        let days = days.max(0);
        Self {
            days,
            start_ms: now_ms.saturating_sub(days.saturating_mul(DAY_MS)),
            end_ms: now_ms,
        }
    }

    #[inline]
    pub fn contains(&self, timestamp: i64) -> bool {
        self.start_ms <= timestamp && timestamp <= self.end_ms
    }
}

/// Everything [`TrendAggregator::aggregate`](super::TrendAggregator::aggregate)
/// derives from a history. Recomputed on each call; no state carries over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub window: AggregateWindow,

    /// Entries that fell inside the window.
    pub total_entries: u32,

    /// Count of windowed entries per dominant emotion; all eight keys present.
    pub emotion_frequency: EmotionMap<u32>,

    pub daily_series: DailySeries,

    pub time_of_day_counts: TimeOfDayCounts,

    pub day_of_week_counts: DayOfWeekCounts,

    pub source_counts: SourceCounts,

    /// Fixed 7-day buckets relative to `window.end_ms`, independent of
    /// `window.days`.
    pub weekly_comparison: WeeklyComparison,
}

impl AggregateResult {
    /// An aggregate with zero counts and empty series.
    pub fn empty(window: AggregateWindow) -> Self {
        Self {
            window,
            ..Default::default()
        }
    }

    /// True if no entry fell inside the window.
    pub fn is_empty(&self) -> bool {
        self.total_entries == 0
    }
}

//! Trend aggregator.

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Timelike};
use moodscape_core::MoodEntry;
use tracing::{debug, warn};

use crate::config::TrendConfig;

use super::buckets::TimeOfDay;
use super::daily::DailyAccumulator;
use super::result::{AggregateResult, AggregateWindow, DAY_MS};
use super::weekly::{WeekAccumulator, WeeklyComparison};

/// Length of each weekly comparison bucket, in days.
pub const WEEK_DAYS: i64 = 7;

/// Stateless aggregator from a history of entries to trend statistics.
///
/// # Algorithm
///
/// One pass over the entries:
/// - Entries inside `[now - window_days, now]` feed the frequency table,
///   daily series, time-of-day, weekday, and source counts
/// - Every entry, windowed or not, is checked against the two fixed weekly
///   buckets `[now - 7d, now]` and `[now - 14d, now - 7d)`
///
/// Derived parameters are read through clamping to `[0, 100]`; the caller's
/// entries are never modified. For a fixed input and `now`, the output is identical across
/// calls.
///
/// # Example
///
/// ```
/// use moodscape_analytics::trends::TrendAggregator;
///
/// let aggregator = TrendAggregator::default();
/// let result = aggregator.aggregate(&[], 30, 1_700_000_000_000);
///
/// assert_eq!(result.total_entries, 0);
/// assert!(result.daily_series.is_empty());
/// assert_eq!(result.weekly_comparison.change_percent, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct TrendAggregator {
    offset: FixedOffset,
    default_window_days: i64,
}

impl TrendAggregator {
    pub fn new(config: &TrendConfig) -> Self {
        Self {
            offset: config.offset(),
            default_window_days: config.default_window_days,
        }
    }

    /// The UTC offset used for local dates and hours.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn default_window_days(&self) -> i64 {
        self.default_window_days
    }

    /// Local time of an epoch-millisecond timestamp, if representable.
    pub fn local_time(&self, timestamp: i64) -> Option<DateTime<FixedOffset>> {
        self.offset.timestamp_millis_opt(timestamp).single()
    }

    /// Aggregate over the configured default window.
    pub fn aggregate_default(&self, entries: &[MoodEntry], now_ms: i64) -> AggregateResult {
        self.aggregate(entries, self.default_window_days, now_ms)
    }

    /// Aggregate `entries` over the `window_days` days ending at `now_ms`.
    ///
    /// Never fails. An empty list yields zero counts everywhere and an empty
    /// daily series.
    pub fn aggregate(&self, entries: &[MoodEntry], window_days: i64, now_ms: i64) -> AggregateResult {
        let window = AggregateWindow::ending_at(window_days, now_ms);
        let mut result = AggregateResult::empty(window);

        let this_week_start = now_ms.saturating_sub(WEEK_DAYS * DAY_MS);
        let previous_week_start = now_ms.saturating_sub(2 * WEEK_DAYS * DAY_MS);

        let mut daily = DailyAccumulator::default();
        let mut this_week = WeekAccumulator::default();
        let mut previous_week = WeekAccumulator::default();
        let mut sanitized = 0usize;
        let mut unplaceable = 0usize;

        for entry in entries {
            if !entry.is_sanitized() {
                sanitized += 1;
            }
            let derived = entry.derived.clamped();

            if this_week_start <= entry.timestamp && entry.timestamp <= now_ms {
                this_week.add(entry.dominant_emotion, derived.energy);
            } else if previous_week_start <= entry.timestamp && entry.timestamp < this_week_start {
                previous_week.add(entry.dominant_emotion, derived.energy);
            }

            if !window.contains(entry.timestamp) {
                continue;
            }

            result.total_entries = result.total_entries.saturating_add(1);
            result.emotion_frequency.increment(entry.dominant_emotion);
            result.source_counts.increment(entry.source);

            match self.local_time(entry.timestamp) {
                Some(local) => {
                    daily.add(local.date_naive(), entry.dominant_emotion, &derived);
                    result
                        .time_of_day_counts
                        .increment(TimeOfDay::from_hour(local.hour()));
                    result.day_of_week_counts.increment(local.weekday());
                }
                None => unplaceable += 1,
            }
        }

        if sanitized > 0 {
            warn!(sanitized, "clamped out-of-range values while aggregating");
        }
        if unplaceable > 0 {
            warn!(unplaceable, "timestamps outside the calendar range were not bucketed");
        }

        result.daily_series = daily.into_series();
        result.weekly_comparison =
            WeeklyComparison::new(this_week.summary(), previous_week.summary());

        debug!(
            input = entries.len(),
            windowed = result.total_entries,
            window_days = window.days,
            days = result.daily_series.len(),
            change_percent = result.weekly_comparison.change_percent,
            "aggregated mood entries"
        );

        result
    }
}

impl Default for TrendAggregator {
    fn default() -> Self {
        Self::new(&TrendConfig::default())
    }
}

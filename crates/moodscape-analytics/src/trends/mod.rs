//! Trend aggregation over a history of mood entries.
//!
//! # Components
//!
//! - [`TrendAggregator`]: one-pass aggregation over a rolling window
//! - [`AggregateResult`]: frequency table, daily series, categorical
//!   distributions, and the week-over-week comparison
//! - [`DailySeries`]: sparse per-day means keyed by local date
//! - [`WeeklyComparison`]: fixed 7-day buckets, independent of the window
//!
//! All output is JSON-serializable with camelCase keys; chart layers bind to
//! these names.

mod aggregator;
mod buckets;
mod daily;
mod result;
mod weekly;


pub use self::aggregator::{TrendAggregator, WEEK_DAYS};
pub use self::buckets::{
    weekday_name, DayOfWeekCounts, SourceCounts, TimeOfDay, TimeOfDayCounts,
    WEEKDAYS_SUNDAY_FIRST,
};
pub use self::daily::DailySeries;
pub use self::result::{AggregateResult, AggregateWindow, DAY_MS};
pub use self::weekly::{change_percent, WeekSummary, WeeklyComparison};

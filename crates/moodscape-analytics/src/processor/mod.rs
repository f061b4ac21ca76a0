//! Analytics processor: one owner for the whole classify, aggregate and
//! explain pipeline.
//!
//! [`MoodAnalytics`] wires together:
//! - [`EmotionClassifier`](crate::classifier::EmotionClassifier) for new entries
//! - [`TrendAggregator`](crate::trends::TrendAggregator) over a history
//! - [`InsightGenerator`](crate::insights::InsightGenerator) over the aggregate
//! - an optional [`AggregateCache`](crate::cache::AggregateCache)
//!
//! and exposes a JSON-in, JSON-out entry point for the storage and UI layers.

mod engine;
mod report;


pub use self::engine::MoodAnalytics;
pub use self::report::AnalyticsReport;

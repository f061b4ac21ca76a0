//! Emotion classification and trend analytics engine for Moodscape.
//!
//! Turns slider-style signals into normalized emotion vectors, aggregates a
//! history of mood entries into frequency tables and time series, and derives
//! short polarity-tagged insights from the aggregate.
//!
//! # Modules
//!
//! - [`classifier`]: `(energy, calmness, tension)` to an eight-emotion vector
//! - [`trends`]: windowed aggregation, daily series, weekly comparison
//! - [`insights`]: fixed-order rule engine over an aggregate
//! - [`cache`]: explicit, bounded cache of aggregate results
//! - [`processor`]: orchestrator owning all of the above
//! - [`config`]: configuration for every subsystem
//! - [`error`]: error types and result aliases
//!
//! Every computation is pure and synchronous. Given the same entries and the
//! same `now`, the output is identical.
//!
//! # Example
//!
//! ```
//! use moodscape_analytics::{EmotionClassifier, InsightGenerator, TrendAggregator};
//! use moodscape_core::{DerivedParameters, Emotion, EntrySource, Polarity};
//!
//! let now = 1_710_504_000_000;
//! let entry = EmotionClassifier::new().classify_entry(
//!     &DerivedParameters::new(80.0, 50.0, 10.0),
//!     EntrySource::Sliders,
//!     now - 60_000,
//! );
//! assert_eq!(entry.dominant_emotion, Emotion::Joy);
//!
//! let entries = vec![entry];
//! let aggregate = TrendAggregator::default().aggregate(&entries, 7, now);
//! let insights = InsightGenerator::default().generate_insights(&entries, &aggregate);
//!
//! assert_eq!(insights[0].polarity, Polarity::Positive);
//! assert!(insights[0].text.contains("joy"));
//! ```

pub mod cache;
pub mod classifier;
pub mod config;
pub mod error;
pub mod insights;
pub mod processor;
pub mod trends;

pub use cache::{AggregateCache, AggregateCacheKey, CacheStats};
pub use classifier::{Classification, EmotionClassifier};
pub use config::AnalyticsConfig;
pub use error::{AnalyticsError, AnalyticsResult};
pub use insights::{Insight, InsightGenerator, InsightRule};
pub use processor::{AnalyticsReport, MoodAnalytics};
pub use trends::{AggregateResult, TrendAggregator};

// Domain types from moodscape-core
pub use moodscape_core::{
    DerivedParameters, Emotion, EmotionMap, EmotionVector, EntrySource, MoodEntry, Polarity,
};

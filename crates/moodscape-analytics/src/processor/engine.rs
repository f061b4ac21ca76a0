//! MoodAnalytics - classify, aggregate, and explain mood history.

use chrono::Utc;
use moodscape_core::{DerivedParameters, EntrySource, MoodEntry};
use tracing::debug;

use crate::cache::{AggregateCache, AggregateCacheKey, CacheStats};
use crate::classifier::{Classification, EmotionClassifier};
use crate::config::AnalyticsConfig;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::insights::{Insight, InsightGenerator};
use crate::trends::{AggregateResult, TrendAggregator};

use super::report::AnalyticsReport;

/// Pipeline orchestrator owning the classifier, aggregator, insight
/// generator, and an optional aggregate cache.
///
/// All computation is delegated to the stateless components; the processor
/// only holds the cache and a running count of analyses.
///
/// # Example
/// ```
/// use moodscape_analytics::processor::MoodAnalytics;
/// use moodscape_core::{DerivedParameters, EntrySource};
///
/// let mut analytics = MoodAnalytics::with_defaults();
/// let now = 1_710_504_000_000;
///
/// let entry = analytics.create_entry(
///     &DerivedParameters::new(80.0, 50.0, 10.0),
///     EntrySource::Sliders,
///     now - 3_600_000,
/// );
/// let report = analytics.analyze(&[entry], 7, now);
///
/// assert_eq!(report.aggregate.total_entries, 1);
/// assert!(report.insights[0].text.contains("joy"));
/// ```
#[derive(Debug)]
pub struct MoodAnalytics {
    classifier: EmotionClassifier,
    aggregator: TrendAggregator,
    insight_generator: InsightGenerator,
    cache: Option<AggregateCache>,
    config: AnalyticsConfig,
    analysis_count: u64,
}

impl MoodAnalytics {
    /// Create a processor, returning an error if the config is invalid.
    pub fn try_new(config: AnalyticsConfig) -> AnalyticsResult<Self> {
        config.validate().map_err(AnalyticsError::ConfigError)?;
        Ok(Self::from_config(config))
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Self {
        Self::from_config(AnalyticsConfig::default())
    }

    fn from_config(config: AnalyticsConfig) -> Self {
        let cache = config
            .cache
            .enabled
            .then(|| AggregateCache::new(config.cache.max_entries));
        Self {
            classifier: EmotionClassifier::new(),
            aggregator: TrendAggregator::new(&config.trends),
            insight_generator: InsightGenerator::new(&config.insights),
            cache,
            config,
            analysis_count: 0,
        }
    }

    /// Classify slider parameters.
    pub fn classify(&self, derived: &DerivedParameters) -> Classification {
        self.classifier.classify(derived)
    }

    /// Classify and build a new entry ready to be persisted.
    pub fn create_entry(
        &self,
        derived: &DerivedParameters,
        source: EntrySource,
        timestamp: i64,
    ) -> MoodEntry {
        self.classifier.classify_entry(derived, source, timestamp)
    }

    /// Aggregate `entries`, reusing a cached result when one matches.
    pub fn aggregate(&mut self, entries: &[MoodEntry], window_days: i64, now_ms: i64) -> AggregateResult {
        let aggregator = &self.aggregator;
        match self.cache.as_mut() {
            Some(cache) => {
                let key = AggregateCacheKey::compute(entries, window_days, now_ms);
                cache.get_or_insert_with(key, || aggregator.aggregate(entries, window_days, now_ms))
            }
            None => aggregator.aggregate(entries, window_days, now_ms),
        }
    }

    /// Aggregate over the configured default window.
    pub fn aggregate_default(&mut self, entries: &[MoodEntry], now_ms: i64) -> AggregateResult {
        self.aggregate(entries, self.config.trends.default_window_days, now_ms)
    }

    /// Run the insight rules over an aggregate of `entries`.
    pub fn insights(&self, entries: &[MoodEntry], aggregate: &AggregateResult) -> Vec<Insight> {
        self.insight_generator.generate_insights(entries, aggregate)
    }

    /// Aggregate and generate insights in one call.
    pub fn analyze(&mut self, entries: &[MoodEntry], window_days: i64, now_ms: i64) -> AnalyticsReport {
        let aggregate = self.aggregate(entries, window_days, now_ms);
        let insights = self.insights(entries, &aggregate);
        self.analysis_count += 1;

        if self.config.debug {
            let cache_hit_ratio = self.cache_stats().map(|stats| stats.hit_ratio());
            debug!(
                analysis = self.analysis_count,
                entries = entries.len(),
                windowed = aggregate.total_entries,
                insights = insights.len(),
                ?cache_hit_ratio,
                "analysis complete"
            );
        }

        AnalyticsReport::new(aggregate, insights)
    }

    /// [`analyze`](Self::analyze) relative to the current wall-clock time.
    pub fn analyze_now(&mut self, entries: &[MoodEntry], window_days: i64) -> AnalyticsReport {
        self.analyze(entries, window_days, Utc::now().timestamp_millis())
    }

    /// Parse a JSON array of entries, analyze it, and serialize the report.
    ///
    /// # Errors
    /// - `InvalidParameter` if `window_days` is negative
    /// - `Core` if the entries are not valid JSON
    /// - `SerializationError` if the report cannot be serialized
    pub fn analyze_json(
        &mut self,
        entries_json: &str,
        window_days: i64,
        now_ms: i64,
    ) -> AnalyticsResult<String> {
        if window_days < 0 {
            return Err(AnalyticsError::invalid_param(
                "window_days",
                window_days,
                "window must be zero or more days",
            ));
        }
        let entries = MoodEntry::list_from_json(entries_json)?;
        let report = self.analyze(&entries, window_days, now_ms);
        Ok(report.to_json()?)
    }

    /// Cache counters, or `None` when caching is disabled.
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(AggregateCache::stats)
    }

    /// Drop cached aggregates, e.g. after the history was edited.
    pub fn invalidate_cache(&mut self) {
        if let Some(cache) = self.cache.as_mut() {
            cache.invalidate_all();
        }
    }

    /// Clear the cache, its counters, and the analysis count.
    pub fn reset(&mut self) {
        if let Some(cache) = self.cache.as_mut() {
            cache.reset();
        }
        self.analysis_count = 0;
    }

    #[inline]
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    #[inline]
    pub fn analysis_count(&self) -> u64 {
        self.analysis_count
    }
}

impl Default for MoodAnalytics {
    fn default() -> Self {
        Self::with_defaults()
    }
}

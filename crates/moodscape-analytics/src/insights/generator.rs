//! Insight generator.

use moodscape_core::{clamp_finite, DerivedParameters, Emotion, MoodEntry};
use tracing::{debug, trace};

use crate::config::InsightConfig;
use crate::trends::{weekday_name, AggregateResult};

use super::types::{Insight, InsightRule};

/// Stateless rule engine turning an aggregate into textual insights.
///
/// # Example
///
/// ```
/// use moodscape_analytics::insights::InsightGenerator;
/// use moodscape_analytics::trends::TrendAggregator;
///
/// let aggregate = TrendAggregator::default().aggregate(&[], 7, 0);
/// let insights = InsightGenerator::default().generate_insights(&[], &aggregate);
/// assert!(insights.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct InsightGenerator {
    calmness_trend_threshold: f64,
    min_trend_entries: usize,
}

impl InsightGenerator {
    pub fn new(config: &InsightConfig) -> Self {
        Self {
            calmness_trend_threshold: config.calmness_trend_threshold,
            min_trend_entries: config.min_trend_entries.max(2),
        }
    }

    /// Evaluate every rule in order and collect the insights they produce.
    ///
    /// `entries` is the same history given to the aggregator; the calmness
    /// rule only looks at entries inside `aggregate.window`.
    pub fn generate_insights(
        &self,
        entries: &[MoodEntry],
        aggregate: &AggregateResult,
    ) -> Vec<Insight> {
        let insights: Vec<Insight> = InsightRule::ALL
            .into_iter()
            .filter_map(|rule| {
                let insight = self.evaluate(rule, entries, aggregate);
                trace!(rule = rule.as_str(), fired = insight.is_some(), "evaluated insight rule");
                insight
            })
            .collect();

        debug!(count = insights.len(), "generated insights");
        insights
    }

    /// Evaluate a single rule.
    pub fn evaluate(
        &self,
        rule: InsightRule,
        entries: &[MoodEntry],
        aggregate: &AggregateResult,
    ) -> Option<Insight> {
        match rule {
            InsightRule::MostFrequentEmotion => most_frequent_emotion(aggregate),
            InsightRule::DominantTimeOfDay => dominant_time_of_day(aggregate),
            InsightRule::DominantDayOfWeek => dominant_day_of_week(aggregate),
            InsightRule::CalmnessTrend => self.calmness_trend(entries, aggregate),
        }
    }

    /// Compare mean calmness of the first and second half of the window.
    ///
    /// The first half is the first `n / 2` entries in chronological order;
    /// the second half takes the rest, including the middle entry when `n`
    /// is odd.
    fn calmness_trend(&self, entries: &[MoodEntry], aggregate: &AggregateResult) -> Option<Insight> {
        let mut windowed: Vec<(i64, f64)> = entries
            .iter()
            .filter(|entry| aggregate.window.contains(entry.timestamp))
            .map(|entry| {
                let calmness =
                    clamp_finite(entry.derived.calmness, DerivedParameters::MIN, DerivedParameters::MAX);
                (entry.timestamp, calmness)
            })
            .collect();

        if windowed.len() < self.min_trend_entries {
            return None;
        }

        // Stable: entries sharing a timestamp keep their input order
        windowed.sort_by_key(|(timestamp, _)| *timestamp);

        let half = windowed.len() / 2;
        let first = mean(windowed[..half].iter().map(|(_, c)| *c));
        let second = mean(windowed[half..].iter().map(|(_, c)| *c));
        let change = second - first;

        if change.abs() <= self.calmness_trend_threshold {
            return None;
        }

        let insight = if change > 0.0 {
            Insight::positive(format!(
                "Your calmness has been rising, from an average of {:.1} to {:.1}.",
                first, second
            ))
        } else {
            Insight::negative(format!(
                "Your calmness has been dropping, from an average of {:.1} to {:.1}.",
                first, second
            ))
        };
        Some(insight)
    }
}

impl Default for InsightGenerator {
    fn default() -> Self {
        Self::new(&InsightConfig::default())
    }
}

fn most_frequent_emotion(aggregate: &AggregateResult) -> Option<Insight> {
    let (emotion, count) = aggregate.emotion_frequency.most_frequent(&Emotion::ALL)?;
    let total = aggregate.emotion_frequency.total();
    Some(Insight::new(
        emotion.polarity(),
        format!(
            "Your most frequent emotion was {} ({} of {} entries).",
            emotion, count, total
        ),
    ))
}

fn dominant_time_of_day(aggregate: &AggregateResult) -> Option<Insight> {
    let (band, count) = aggregate.time_of_day_counts.most_frequent()?;
    Some(Insight::neutral(format!(
        "You journal most often {} ({} entries).",
        band.phrase(),
        count
    )))
}

fn dominant_day_of_week(aggregate: &AggregateResult) -> Option<Insight> {
    let (day, count) = aggregate.day_of_week_counts.most_frequent()?;
    Some(Insight::neutral(format!(
        "{} is your most active journaling day ({} entries).",
        weekday_name(day),
        count
    )))
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

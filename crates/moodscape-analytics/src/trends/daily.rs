//! Per-day time series.
//!
//! Days are keyed by local calendar date in an ordered map, so the emitted
//! series is ascending and sparse: a day with no entries is absent, never
//! reported as zero.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use moodscape_core::{DerivedParameters, Emotion, EmotionMap};
use serde::{Deserialize, Serialize};

/// Per-day means, aligned by index with `dates`.
///
/// `dates` holds `YYYY-MM-DD` strings in ascending order. Every other list
/// has the same length. Consumers must not assume consecutive dates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySeries {
    pub dates: Vec<String>,

    /// Share of the day's entries whose dominant emotion is each key, as a
    /// percentage. Agrees with `emotionFrequency` for the same entries.
    pub per_emotion_percent: EmotionMap<Vec<f64>>,

    pub energy: Vec<f64>,
    pub calmness: Vec<f64>,
    pub tension: Vec<f64>,
}

impl DailySeries {
    /// Number of days with at least one entry.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Index of `date` (`YYYY-MM-DD`) in the series, if present.
    pub fn position(&self, date: &str) -> Option<usize> {
        self.dates.iter().position(|d| d == date)
    }
}

#[derive(Debug, Default)]
struct DayBucket {
    count: u32,
    dominant_counts: EmotionMap<u32>,
    energy_sum: f64,
    calmness_sum: f64,
    tension_sum: f64,
}

/// Accumulates entries into date buckets.
#[derive(Debug, Default)]
pub(crate) struct DailyAccumulator {
    days: BTreeMap<NaiveDate, DayBucket>,
}

impl DailyAccumulator {
    /// Add one entry to its local date: its dominant emotion is counted,
    /// its sanitized derived parameters are summed for the daily means.
    pub(crate) fn add(&mut self, date: NaiveDate, dominant: Emotion, derived: &DerivedParameters) {
        let bucket = self.days.entry(date).or_default();
        bucket.count = bucket.count.saturating_add(1);
        bucket.dominant_counts.increment(dominant);
        bucket.energy_sum += derived.energy;
        bucket.calmness_sum += derived.calmness;
        bucket.tension_sum += derived.tension;
    }

    pub(crate) fn into_series(self) -> DailySeries {
        let mut series = DailySeries::default();
        for (date, bucket) in self.days {
            let n = f64::from(bucket.count);
            series.dates.push(date.format("%Y-%m-%d").to_string());
            for (emotion, count) in bucket.dominant_counts.iter() {
                series
                    .per_emotion_percent
                    .get_mut(emotion)
                    .push(f64::from(*count) / n * 100.0);
            }
            series.energy.push(bucket.energy_sum / n);
            series.calmness.push(bucket.calmness_sum / n);
            series.tension.push(bucket.tension_sum / n);
        }
        series
    }
}

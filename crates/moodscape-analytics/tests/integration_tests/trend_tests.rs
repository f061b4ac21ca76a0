//! Trend Aggregation Tests
//!
//! Frequency, window, daily series, and weekly comparison over generated
//! histories.

use moodscape_analytics::trends::{TrendAggregator, DAY_MS};
use moodscape_core::{DerivedParameters, Emotion, EmotionVector, EntrySource, MoodEntry};

use super::helpers::{generate_history, HOUR_MS, NOW};

fn fixed_entry(timestamp: i64, energy: f64) -> MoodEntry {
    MoodEntry::new(
        timestamp,
        EmotionVector::all_neutral(),
        DerivedParameters::new(energy, 50.0, 50.0),
        Emotion::Neutral,
        1.0,
        EntrySource::Face,
    )
}

#[test]
fn test_frequency_sums_to_windowed_count() {
    let aggregator = TrendAggregator::default();
    let entries = generate_history(120, 7, 5 * HOUR_MS, NOW);

    for window in [0, 1, 3, 7, 14, 30, 365] {
        let result = aggregator.aggregate(&entries, window, NOW);
        let expected = entries
            .iter()
            .filter(|e| NOW - window * DAY_MS <= e.timestamp && e.timestamp <= NOW)
            .count() as u32;

        assert_eq!(result.emotion_frequency.total(), expected, "window {window}");
        assert_eq!(result.total_entries, expected);
        assert_eq!(result.time_of_day_counts.total(), expected);
        assert_eq!(result.day_of_week_counts.total(), expected);
    }
}

#[test]
fn test_empty_input_any_window() {
    let aggregator = TrendAggregator::default();

    for window in [-1, 0, 7, 10_000] {
        let result = aggregator.aggregate(&[], window, NOW);
        assert!(result.is_empty());
        assert_eq!(result.emotion_frequency.total(), 0);
        assert!(result.daily_series.is_empty());
        assert!(result.daily_series.calmness.is_empty());
        assert_eq!(result.weekly_comparison.change_percent, 0.0);
    }
}

#[test]
fn test_daily_series_ascending_and_aligned() {
    let entries = generate_history(60, 3, 9 * HOUR_MS, NOW);
    let result = TrendAggregator::default().aggregate(&entries, 30, NOW);
    let series = &result.daily_series;

    assert!(!series.is_empty());
    assert!(series.dates.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(series.energy.len(), series.len());
    assert_eq!(series.calmness.len(), series.len());
    assert_eq!(series.tension.len(), series.len());

    for day in 0..series.len() {
        let total: f64 = Emotion::ALL
            .iter()
            .map(|e| series.per_emotion_percent.get(*e)[day])
            .sum();
        assert!((total - 100.0).abs() < 1e-6, "{} sums to {total}", series.dates[day]);
    }
}

#[test]
fn test_weekly_change_formula() {
    let entries = vec![
        fixed_entry(NOW - HOUR_MS, 90.0),
        fixed_entry(NOW - 2 * DAY_MS, 70.0),
        fixed_entry(NOW - 8 * DAY_MS, 60.0),
        fixed_entry(NOW - 10 * DAY_MS, 60.0),
    ];
    let weekly = TrendAggregator::default()
        .aggregate(&entries, 1, NOW)
        .weekly_comparison;

    assert_eq!(weekly.this_week.mean_energy, 80.0);
    assert_eq!(weekly.previous_week.mean_energy, 60.0);
    assert_eq!(weekly.change_percent, 33.3);
}

#[test]
fn test_weekly_change_zero_without_previous_week() {
    let entries = vec![fixed_entry(NOW - HOUR_MS, 90.0)];
    let weekly = TrendAggregator::default()
        .aggregate(&entries, 7, NOW)
        .weekly_comparison;

    assert_eq!(weekly.this_week.count, 1);
    assert_eq!(weekly.previous_week.count, 0);
    assert_eq!(weekly.change_percent, 0.0);
}

#[test]
fn test_window_boundaries_inclusive() {
    let entries = vec![
        fixed_entry(NOW - 7 * DAY_MS, 50.0),
        fixed_entry(NOW - 7 * DAY_MS - 1, 50.0),
        fixed_entry(NOW, 50.0),
        fixed_entry(NOW + 1, 50.0),
    ];
    let result = TrendAggregator::default().aggregate(&entries, 7, NOW);

    assert_eq!(result.total_entries, 2);
}

#[test]
fn test_source_counts_follow_entries() {
    let entries = generate_history(8, 1, HOUR_MS, NOW);
    let result = TrendAggregator::default().aggregate(&entries, 1, NOW);

    for source in EntrySource::ALL {
        assert_eq!(result.source_counts.get(source), 2, "{source}");
    }
}

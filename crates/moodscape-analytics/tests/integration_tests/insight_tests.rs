//! Insight Tests
//!
//! Rule order, polarity, and the calmness trend over generated histories.

use moodscape_analytics::insights::{InsightGenerator, InsightRule};
use moodscape_analytics::trends::{TrendAggregator, DAY_MS};
use moodscape_core::{DerivedParameters, Emotion, EmotionVector, EntrySource, MoodEntry, Polarity};

use super::helpers::{generate_history, HOUR_MS, NOW};

fn joy_entry(timestamp: i64, calmness: f64) -> MoodEntry {
    MoodEntry::new(
        timestamp,
        EmotionVector {
            joy: 1.0,
            ..Default::default()
        },
        DerivedParameters::new(70.0, calmness, 10.0),
        Emotion::Joy,
        1.0,
        EntrySource::Sliders,
    )
}

#[test]
fn test_single_joy_entry_is_positive_without_trend() {
    let entries = vec![joy_entry(NOW - HOUR_MS, 50.0)];
    let aggregate = TrendAggregator::default().aggregate(&entries, 7, NOW);
    assert_eq!(aggregate.emotion_frequency.joy, 1);
    assert_eq!(aggregate.emotion_frequency.total(), 1);

    let insights = InsightGenerator::default().generate_insights(&entries, &aggregate);

    assert_eq!(insights[0].polarity, Polarity::Positive);
    assert!(insights[0].text.contains("joy"));
    assert!(InsightGenerator::default()
        .evaluate(InsightRule::CalmnessTrend, &entries, &aggregate)
        .is_none());
}

#[test]
fn test_insights_follow_rule_order() {
    let entries: Vec<MoodEntry> = (0..6)
        .map(|i| joy_entry(NOW - i * DAY_MS, 20.0 + 10.0 * (6 - i) as f64))
        .collect();
    let aggregate = TrendAggregator::default().aggregate(&entries, 7, NOW);
    let generator = InsightGenerator::default();

    let insights = generator.generate_insights(&entries, &aggregate);
    let expected: Vec<_> = InsightRule::ALL
        .into_iter()
        .filter_map(|rule| generator.evaluate(rule, &entries, &aggregate))
        .collect();

    assert_eq!(insights.len(), 4);
    assert_eq!(insights, expected);
    // Calmness climbs from 30 to 80 over the week
    assert_eq!(insights[3].polarity, Polarity::Positive);
}

#[test]
fn test_calmness_trend_negative() {
    let entries: Vec<MoodEntry> = (0..4)
        .map(|i| joy_entry(NOW - i * DAY_MS, 30.0 + 15.0 * i as f64))
        .collect();
    let aggregate = TrendAggregator::default().aggregate(&entries, 7, NOW);

    let trend = InsightGenerator::default()
        .evaluate(InsightRule::CalmnessTrend, &entries, &aggregate)
        .unwrap();
    assert_eq!(trend.polarity, Polarity::Negative);
}

#[test]
fn test_generated_history_yields_at_most_one_insight_per_rule() {
    let entries = generate_history(90, 11, 4 * HOUR_MS, NOW);
    let aggregate = TrendAggregator::default().aggregate(&entries, 14, NOW);

    let insights = InsightGenerator::default().generate_insights(&entries, &aggregate);

    assert!(insights.len() >= 3 && insights.len() <= 4);
    let (top, _) = aggregate
        .emotion_frequency
        .most_frequent(&Emotion::ALL)
        .unwrap();
    assert!(insights[0].text.contains(top.as_str()));
    assert_eq!(insights[0].polarity, top.polarity());
    assert_eq!(insights[1].polarity, Polarity::Neutral);
    assert_eq!(insights[2].polarity, Polarity::Neutral);
}

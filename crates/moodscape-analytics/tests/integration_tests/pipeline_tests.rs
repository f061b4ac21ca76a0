//! Pipeline Tests
//!
//! Determinism, caching, and the JSON boundary of the processor.

use moodscape_analytics::processor::MoodAnalytics;
use moodscape_analytics::trends::TrendAggregator;
use moodscape_analytics::AnalyticsError;

use super::helpers::{generate_history, HOUR_MS, NOW};

#[test]
fn test_aggregate_is_byte_identical() {
    let entries = generate_history(200, 5, 3 * HOUR_MS, NOW);
    let aggregator = TrendAggregator::default();

    let first = serde_json::to_vec(&aggregator.aggregate(&entries, 21, NOW)).unwrap();
    let second = serde_json::to_vec(&aggregator.aggregate(&entries, 21, NOW)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_analyze_json_is_deterministic_across_processors() {
    let entries = generate_history(50, 2, 6 * HOUR_MS, NOW);
    let input = serde_json::to_string(&entries).unwrap();

    let first = MoodAnalytics::with_defaults().analyze_json(&input, 7, NOW).unwrap();
    let second = MoodAnalytics::with_defaults().analyze_json(&input, 7, NOW).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_cached_and_fresh_reports_match() {
    let entries = generate_history(40, 9, 5 * HOUR_MS, NOW);
    let mut analytics = MoodAnalytics::with_defaults();

    let fresh = analytics.analyze(&entries, 7, NOW);
    let cached = analytics.analyze(&entries, 7, NOW);
    assert_eq!(fresh, cached);
    assert_eq!(analytics.cache_stats().map(|s| s.hits), Some(1));

    // Any change to the entry set misses
    let shorter = &entries[1..];
    analytics.analyze(shorter, 7, NOW);
    assert_eq!(analytics.cache_stats().map(|s| s.misses), Some(2));
}

#[test]
fn test_json_tolerates_missing_optional_fields_and_clamps() {
    let input = format!(
        r#"[
            {{
                "id": "raw-1",
                "timestamp": {},
                "emotions": {{ "joy": 1.5, "sadness": -0.2 }},
                "derived": {{ "energy": 250.0, "calmness": -10.0 }},
                "dominantEmotion": "joy"
            }}
        ]"#,
        NOW - HOUR_MS
    );

    let output = MoodAnalytics::with_defaults()
        .analyze_json(&input, 7, NOW)
        .unwrap();
    let report: serde_json::Value = serde_json::from_str(&output).unwrap();
    let series = &report["aggregate"]["dailySeries"];

    assert_eq!(report["aggregate"]["totalEntries"], 1);
    assert_eq!(report["aggregate"]["sourceCounts"]["sliders"], 1);
    assert_eq!(series["energy"][0], 100.0);
    assert_eq!(series["calmness"][0], 0.0);
    assert_eq!(series["tension"][0], 0.0);
    assert_eq!(series["perEmotionPercent"]["joy"][0], 100.0);
    assert_eq!(series["perEmotionPercent"]["sadness"][0], 0.0);
    assert_eq!(report["insights"][0]["polarity"], "positive");
}

#[test]
fn test_json_rejects_unknown_emotion() {
    let input = format!(
        r#"[{{ "id": "x", "timestamp": {}, "emotions": {{}}, "dominantEmotion": "bliss" }}]"#,
        NOW
    );

    let err = MoodAnalytics::with_defaults()
        .analyze_json(&input, 7, NOW)
        .unwrap_err();
    assert!(matches!(err, AnalyticsError::Core(_)));
}

//! Helper Functions: Deterministic Data Generation (NO MOCKS)

use moodscape_analytics::EmotionClassifier;
use moodscape_core::{DerivedParameters, EntrySource, MoodEntry};

/// Friday 2024-03-15 12:00:00 UTC.
pub const NOW: i64 = 1_710_504_000_000;

pub const HOUR_MS: i64 = 3_600_000;

/// Deterministic slider parameters in `[0, 100]` from sin curves.
pub fn generate_derived(seed: u64) -> DerivedParameters {
    let x = seed as f64 * 0.37;
    DerivedParameters::new(
        (x.sin() + 1.0) * 50.0,
        ((x * 1.3).cos() + 1.0) * 50.0,
        ((x * 0.7 + 1.0).sin() + 1.0) * 50.0,
    )
}

/// Classified history of `count` entries spaced `spacing_ms` apart, newest
/// first, ending at `end_ms`. Ids are `entry-{i}`.
pub fn generate_history(count: usize, seed: u64, spacing_ms: i64, end_ms: i64) -> Vec<MoodEntry> {
    let classifier = EmotionClassifier::new();
    let sources = EntrySource::ALL;
    (0..count)
        .map(|i| {
            let timestamp = end_ms - i as i64 * spacing_ms;
            classifier
                .classify_entry(
                    &generate_derived(seed + i as u64),
                    sources[i % sources.len()],
                    timestamp,
                )
                .with_id(format!("entry-{i}"))
        })
        .collect()
}

/// Grid of slider values covering corners and interior points.
pub fn derived_grid(step: usize) -> Vec<DerivedParameters> {
    let mut grid = Vec::new();
    for e in (0..=100).step_by(step) {
        for c in (0..=100).step_by(step) {
            for t in (0..=100).step_by(step) {
                grid.push(DerivedParameters::new(e as f64, c as f64, t as f64));
            }
        }
    }
    grid
}

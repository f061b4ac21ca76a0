//! Classifier Tests
//!
//! Normalization, degenerate input, and clamping through the public API.

use moodscape_analytics::classifier::{EmotionClassifier, EMOTION_WEIGHTS};
use moodscape_core::{DerivedParameters, Emotion, EmotionVector};

use super::helpers::{derived_grid, generate_derived};

#[test]
fn test_vector_is_normalized_for_every_input() {
    let classifier = EmotionClassifier::new();

    for derived in derived_grid(10) {
        let result = classifier.classify(&derived);
        let sum = result.emotions.sum();
        assert!(
            (sum - 1.0).abs() <= EmotionVector::NORMALIZATION_TOLERANCE,
            "{derived:?} sums to {sum}"
        );
        for (emotion, score) in result.emotions.iter() {
            assert!((0.0..=1.0).contains(&score), "{emotion} = {score} for {derived:?}");
        }
        assert!((0.0..=1.0).contains(&result.confidence));
        assert!((0.0..=100.0).contains(&result.intensity));
    }
}

#[test]
fn test_all_zero_input_is_neutral() {
    let result = EmotionClassifier::new().classify(&DerivedParameters::new(0.0, 0.0, 0.0));

    assert_eq!(result.dominant_emotion, Emotion::Neutral);
    assert_eq!(result.emotions.neutral, 1.0);
    for (emotion, score) in result.emotions.iter() {
        if emotion != Emotion::Neutral {
            assert_eq!(score, 0.0, "{emotion} should be 0");
        }
    }
}

#[test]
fn test_dominant_is_the_largest_component() {
    let classifier = EmotionClassifier::new();

    for seed in 0..200 {
        let result = classifier.classify(&generate_derived(seed));
        let dominant = result.emotions.get(result.dominant_emotion);
        for (_, score) in result.emotions.iter() {
            assert!(score <= dominant);
        }
    }
}

#[test]
fn test_non_finite_input_is_clamped() {
    let classifier = EmotionClassifier::new();
    let derived = DerivedParameters {
        energy: f64::INFINITY,
        calmness: f64::NAN,
        tension: f64::NEG_INFINITY,
    };

    let result = classifier.classify(&derived);
    assert!(result.emotions.is_normalized());
    assert!(result.intensity.is_finite());
}

#[test]
fn test_weight_table_covers_every_non_neutral_emotion() {
    let covered: Vec<Emotion> = EMOTION_WEIGHTS.iter().map(|(e, _)| *e).collect();
    for emotion in Emotion::ALL {
        assert_eq!(covered.contains(&emotion), emotion != Emotion::Neutral, "{emotion}");
    }
}

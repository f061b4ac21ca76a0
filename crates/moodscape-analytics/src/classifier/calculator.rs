//! Emotion classifier.
//!
//! One routine consumes [`EMOTION_WEIGHTS`] for every emotion, so there is a
//! single place where the score formulas live.

use moodscape_core::{
    clamp_finite, DerivedParameters, Emotion, EmotionVector, EntrySource, MoodEntry,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::weights::weights_for;

/// Output of [`EmotionClassifier::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// Normalized emotion distribution (sums to one).
    pub emotions: EmotionVector,

    /// Highest-scoring emotion, ties broken by [`Emotion::PRIORITY`].
    pub dominant_emotion: Emotion,

    /// Dominant score divided by the vector sum, in `[0, 1]`.
    pub confidence: f64,

    /// Blend of energy and dominant score in `[0, 100]`, used by the UI to
    /// pace animations.
    pub intensity: f64,
}

/// Stateless classifier from slider parameters to emotions.
///
/// # Algorithm
///
/// 1. Clamp `energy`, `calmness`, `tension` to `[0, 100]` (NaN becomes 0)
/// 2. Score each emotion as its weighted sum of the three inputs
/// 3. Score `neutral` as `100 - max(energy, calmness, tension)`
/// 4. Clamp every score to `[0, 100]` and divide by 100
/// 5. Divide by the sum of all eight scores; a zero sum yields all-neutral
/// 6. `dominant` = max score; `confidence` = dominant / sum;
///    `intensity` = `clamp(energy * 0.6 + dominant * 100 * 0.4, 0, 100)`
///
/// # Example
///
/// ```
/// use moodscape_analytics::classifier::EmotionClassifier;
/// use moodscape_core::{DerivedParameters, Emotion};
///
/// let classifier = EmotionClassifier::new();
/// let result = classifier.classify(&DerivedParameters::new(80.0, 50.0, 10.0));
///
/// assert_eq!(result.dominant_emotion, Emotion::Joy);
/// assert!(result.emotions.is_normalized());
/// assert!(result.intensity > 0.0 && result.intensity <= 100.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EmotionClassifier;

impl EmotionClassifier {
    /// Weight of energy in the intensity blend.
    pub const INTENSITY_ENERGY_WEIGHT: f64 = 0.6;

    /// Weight of the dominant score (on a 0-100 scale) in the intensity blend.
    pub const INTENSITY_DOMINANT_WEIGHT: f64 = 0.4;

    pub fn new() -> Self {
        Self
    }

    /// Classify slider parameters. Never fails.
    pub fn classify(&self, derived: &DerivedParameters) -> Classification {
        if !derived.is_in_range() {
            warn!(?derived, "derived parameters out of range, clamping");
        }
        let input = derived.clamped();

        let raw = EmotionVector::from_fn(|emotion| Self::raw_score(emotion, &input));
        let sum = raw.sum();

        let emotions = if sum.is_finite() && sum > 0.0 {
            EmotionVector::from_fn(|emotion| raw.get(emotion) / sum)
        } else {
            debug!(?input, "degenerate emotion scores, falling back to neutral");
            EmotionVector::all_neutral()
        };

        let (dominant_emotion, dominant_score) = emotions.dominant();
        let total = emotions.sum();
        let confidence = if total > 0.0 {
            clamp_finite(dominant_score / total, 0.0, 1.0)
        } else {
            0.0
        };
        let intensity = clamp_finite(
            input.energy * Self::INTENSITY_ENERGY_WEIGHT
                + dominant_score * 100.0 * Self::INTENSITY_DOMINANT_WEIGHT,
            0.0,
            100.0,
        );

        trace!(
            dominant = %dominant_emotion,
            confidence,
            intensity,
            "classified derived parameters"
        );

        Classification {
            emotions,
            dominant_emotion,
            confidence,
            intensity,
        }
    }

    /// Classify and wrap the result in a new [`MoodEntry`] with a UUID id.
    ///
    /// The stored `derived` values are the clamped inputs.
    pub fn classify_entry(
        &self,
        derived: &DerivedParameters,
        source: EntrySource,
        timestamp: i64,
    ) -> MoodEntry {
        let result = self.classify(derived);
        MoodEntry::new(
            timestamp,
            result.emotions,
            derived.clamped(),
            result.dominant_emotion,
            result.confidence,
            source,
        )
    }

    /// Score for one emotion on the `[0, 1]` scale, before normalization.
    fn raw_score(emotion: Emotion, input: &DerivedParameters) -> f64 {
        let score = match weights_for(emotion) {
            Some(weights) => weights.apply(input),
            None => 100.0 - input.max_component(),
        };
        clamp_finite(score, 0.0, 100.0) / 100.0
    }
}

//! Linear weight table mapping slider parameters to emotion scores.

use moodscape_core::{DerivedParameters, Emotion};
use serde::{Deserialize, Serialize};

/// Coefficients applied to `(energy, calmness, tension)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionWeights {
    pub energy: f64,
    pub calmness: f64,
    pub tension: f64,
}

impl EmotionWeights {
    pub const fn new(energy: f64, calmness: f64, tension: f64) -> Self {
        Self {
            energy,
            calmness,
            tension,
        }
    }

    /// Unclamped linear score on the `[0, 100]` input scale.
    #[inline]
    pub fn apply(&self, derived: &DerivedParameters) -> f64 {
        self.energy * derived.energy
            + self.calmness * derived.calmness
            + self.tension * derived.tension
    }
}

/// Weight triples for every emotion except `neutral`, which is scored as
/// `100 - max(energy, calmness, tension)`.
pub const EMOTION_WEIGHTS: [(Emotion, EmotionWeights); 7] = [
    (Emotion::Joy, EmotionWeights::new(0.7, 0.3, -0.5)),
    (Emotion::Sadness, EmotionWeights::new(-0.4, 0.1, 0.7)),
    (Emotion::Anger, EmotionWeights::new(0.5, -0.6, 0.8)),
    (Emotion::Fear, EmotionWeights::new(0.1, -0.6, 0.7)),
    (Emotion::Surprise, EmotionWeights::new(0.8, -0.2, 0.2)),
    (Emotion::Disgust, EmotionWeights::new(0.1, -0.4, 0.6)),
    (Emotion::Contentment, EmotionWeights::new(-0.1, 0.9, -0.5)),
];

/// Look up the weight triple for `emotion`. `None` for `neutral`.
pub fn weights_for(emotion: Emotion) -> Option<EmotionWeights> {
    EMOTION_WEIGHTS
        .iter()
        .find(|(e, _)| *e == emotion)
        .map(|(_, w)| *w)
}

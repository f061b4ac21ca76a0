//! Eight-dimensional emotion distribution.

use serde::{Deserialize, Serialize};

use super::{clamp_finite, Emotion};

/// Scores over the eight emotion categories, each in `[0, 1]`.
///
/// A vector is *normalized* when its components sum to `1.0` within
/// [`EmotionVector::NORMALIZATION_TOLERANCE`]. Raw intermediate vectors need
/// not be; [`EmotionVector::normalized`] produces the normalized form.
///
/// Missing components deserialize as `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionVector {
    pub joy: f64,
    pub sadness: f64,
    pub anger: f64,
    pub fear: f64,
    pub surprise: f64,
    pub disgust: f64,
    pub contentment: f64,
    pub neutral: f64,
}

impl EmotionVector {
    /// Maximum deviation of the component sum from `1.0` for a normalized vector.
    pub const NORMALIZATION_TOLERANCE: f64 = 1e-6;

    /// Build a vector by evaluating `f` for each emotion.
    pub fn from_fn(mut f: impl FnMut(Emotion) -> f64) -> Self {
        Self {
            joy: f(Emotion::Joy),
            sadness: f(Emotion::Sadness),
            anger: f(Emotion::Anger),
            fear: f(Emotion::Fear),
            surprise: f(Emotion::Surprise),
            disgust: f(Emotion::Disgust),
            contentment: f(Emotion::Contentment),
            neutral: f(Emotion::Neutral),
        }
    }

    /// The degenerate-input fallback: `neutral = 1`, everything else `0`.
    pub fn all_neutral() -> Self {
        Self {
            neutral: 1.0,
            ..Default::default()
        }
    }

    pub fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
            Emotion::Anger => self.anger,
            Emotion::Fear => self.fear,
            Emotion::Surprise => self.surprise,
            Emotion::Disgust => self.disgust,
            Emotion::Contentment => self.contentment,
            Emotion::Neutral => self.neutral,
        }
    }

    /// Iterate `(emotion, score)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::ALL.into_iter().map(move |e| (e, self.get(e)))
    }

    /// Sum of all components, accumulated in schema order.
    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }

    /// True when every component is in `[0, 1]` and the sum is `1.0 ± 1e-6`.
    pub fn is_normalized(&self) -> bool {
        self.iter().all(|(_, v)| (0.0..=1.0).contains(&v))
            && (self.sum() - 1.0).abs() <= Self::NORMALIZATION_TOLERANCE
    }

    /// Copy with every component forced into `[0, 1]` (NaN becomes `0`).
    pub fn clamped(&self) -> Self {
        Self::from_fn(|e| clamp_finite(self.get(e), 0.0, 1.0))
    }

    /// Copy rescaled so the components sum to one.
    ///
    /// Components are clamped first. A zero or non-finite sum yields
    /// [`EmotionVector::all_neutral`] instead of dividing by zero.
    pub fn normalized(&self) -> Self {
        let clamped = self.clamped();
        let sum = clamped.sum();
        if !sum.is_finite() || sum <= 0.0 {
            return Self::all_neutral();
        }
        Self::from_fn(|e| clamped.get(e) / sum)
    }

    /// Highest-scoring emotion and its score.
    ///
    /// Ties resolve to the emotion listed first in [`Emotion::PRIORITY`].
    pub fn dominant(&self) -> (Emotion, f64) {
        let mut best = (Emotion::PRIORITY[0], self.get(Emotion::PRIORITY[0]));
        for &emotion in &Emotion::PRIORITY[1..] {
            let score = self.get(emotion);
            if score > best.1 {
                best = (emotion, score);
            }
        }
        best
    }
}

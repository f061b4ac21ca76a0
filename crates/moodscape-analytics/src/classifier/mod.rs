//! Emotion classification from slider parameters.
//!
//! Converts [`DerivedParameters`](moodscape_core::DerivedParameters) into a
//! normalized [`EmotionVector`](moodscape_core::EmotionVector) plus the
//! derived scalars (dominant emotion, confidence, intensity).
//!
//! # Components
//!
//! - [`EmotionClassifier`]: the single classification routine
//! - [`Classification`]: classifier output
//! - [`EMOTION_WEIGHTS`]: per-emotion `(energy, calmness, tension)` weights
//!
//! # Example
//!
//! ```
//! use moodscape_analytics::classifier::EmotionClassifier;
//! use moodscape_core::{DerivedParameters, Emotion};
//!
//! let classifier = EmotionClassifier::new();
//! let result = classifier.classify(&DerivedParameters::new(0.0, 0.0, 0.0));
//!
//! assert_eq!(result.dominant_emotion, Emotion::Neutral);
//! assert_eq!(result.emotions.neutral, 1.0);
//! ```

mod calculator;
mod weights;

pub use calculator::{Classification, EmotionClassifier};
pub use weights::{weights_for, EmotionWeights, EMOTION_WEIGHTS};

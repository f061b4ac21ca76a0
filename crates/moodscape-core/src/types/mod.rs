//! Core domain types for Moodscape.

mod derived;
mod emotion;
mod emotion_map;
mod entry;
mod vector;

pub use derived::DerivedParameters;
pub use emotion::{Emotion, Polarity};
pub use emotion_map::EmotionMap;
pub use entry::{EntrySource, MoodEntry};
pub use vector::EmotionVector;

/// Clamp `value` into `[min, max]`, mapping NaN to `min`.
///
/// `f64::clamp` propagates NaN, which would leak into sums and means.
#[inline]
pub fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

//! Fixed-schema record holding one value per emotion.

use serde::{Deserialize, Serialize};

use super::Emotion;

/// One value per emotion, serialized as an object with keys in schema order.
///
/// Every key is always present, so consumers never have to treat a missing
/// emotion as zero.
///
/// # Example
///
/// ```
/// use moodscape_core::{Emotion, EmotionMap};
///
/// let mut counts = EmotionMap::<u32>::default();
/// counts.increment(Emotion::Joy);
/// counts.increment(Emotion::Joy);
/// counts.increment(Emotion::Fear);
///
/// assert_eq!(counts.total(), 3);
/// assert_eq!(counts.most_frequent(&Emotion::ALL), Some((Emotion::Joy, 2)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionMap<T> {
    pub joy: T,
    pub sadness: T,
    pub anger: T,
    pub fear: T,
    pub surprise: T,
    pub disgust: T,
    pub contentment: T,
    pub neutral: T,
}

impl<T> EmotionMap<T> {
    /// Build a map by evaluating `f` for each emotion in schema order.
    pub fn from_fn(mut f: impl FnMut(Emotion) -> T) -> Self {
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

    pub fn get(&self, emotion: Emotion) -> &T {
        match emotion {
            Emotion::Joy => &self.joy,
            Emotion::Sadness => &self.sadness,
            Emotion::Anger => &self.anger,
            Emotion::Fear => &self.fear,
            Emotion::Surprise => &self.surprise,
            Emotion::Disgust => &self.disgust,
            Emotion::Contentment => &self.contentment,
            Emotion::Neutral => &self.neutral,
        }
    }

    pub fn get_mut(&mut self, emotion: Emotion) -> &mut T {
        match emotion {
            Emotion::Joy => &mut self.joy,
            Emotion::Sadness => &mut self.sadness,
            Emotion::Anger => &mut self.anger,
            Emotion::Fear => &mut self.fear,
            Emotion::Surprise => &mut self.surprise,
            Emotion::Disgust => &mut self.disgust,
            Emotion::Contentment => &mut self.contentment,
            Emotion::Neutral => &mut self.neutral,
        }
    }

    /// Iterate `(emotion, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, &T)> + '_ {
        Emotion::ALL.into_iter().map(move |e| (e, self.get(e)))
    }

    /// Apply `f` to every value, preserving keys.
    pub fn map<U>(&self, mut f: impl FnMut(Emotion, &T) -> U) -> EmotionMap<U> {
        EmotionMap::from_fn(|e| f(e, self.get(e)))
    }
}

impl EmotionMap<u32> {
    /// Increment the count for `emotion`, saturating at `u32::MAX`.
    pub fn increment(&mut self, emotion: Emotion) {
        let slot = self.get_mut(emotion);
        *slot = slot.saturating_add(1);
    }

    /// Sum of all counts, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.iter()
            .fold(0u32, |acc, (_, count)| acc.saturating_add(*count))
    }

    /// Emotion with the highest count, breaking ties by position in `order`.
    ///
    /// Returns `None` when every count is zero.
    pub fn most_frequent(&self, order: &[Emotion]) -> Option<(Emotion, u32)> {
        let mut best: Option<(Emotion, u32)> = None;
        for &emotion in order {
            let count = *self.get(emotion);
            if count == 0 {
                continue;
            }
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((emotion, count)),
            }
        }
        best
    }
}

//! The eight-key emotion schema and its polarity classes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the eight discrete emotion categories.
///
/// Declaration order is the schema order used everywhere a map over emotions
/// is iterated or serialized. Ties between scores are broken by
/// [`Emotion::PRIORITY`], never by declaration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
    Contentment,
    #[default]
    Neutral,
}

impl Emotion {
    /// All emotions in schema order.
    pub const ALL: [Emotion; 8] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Disgust,
        Emotion::Contentment,
        Emotion::Neutral,
    ];

    /// Tie-break order for dominant-emotion decisions. First entry wins.
    pub const PRIORITY: [Emotion; 8] = [
        Emotion::Joy,
        Emotion::Contentment,
        Emotion::Surprise,
        Emotion::Neutral,
        Emotion::Fear,
        Emotion::Disgust,
        Emotion::Sadness,
        Emotion::Anger,
    ];

    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::Sadness => "sadness",
            Self::Anger => "anger",
            Self::Fear => "fear",
            Self::Surprise => "surprise",
            Self::Disgust => "disgust",
            Self::Contentment => "contentment",
            Self::Neutral => "neutral",
        }
    }

    /// Position of this emotion in [`Emotion::ALL`].
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Positive for joy and contentment, negative for sadness, anger, fear
    /// and disgust, neutral for surprise and neutral.
    pub fn polarity(&self) -> Polarity {
        match self {
            Self::Joy | Self::Contentment => Polarity::Positive,
            Self::Sadness | Self::Anger | Self::Fear | Self::Disgust => Polarity::Negative,
            Self::Surprise | Self::Neutral => Polarity::Neutral,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Emotion::ALL
            .into_iter()
            .find(|e| e.as_str() == needle)
            .ok_or_else(|| CoreError::UnknownEmotion(s.to_string()))
    }
}

/// Tone of an emotion or an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Polarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

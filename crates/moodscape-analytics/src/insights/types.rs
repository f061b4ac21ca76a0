//! Insight output types.

use moodscape_core::Polarity;
use serde::{Deserialize, Serialize};

/// A short polarity-tagged observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub polarity: Polarity,
    pub text: String,
}

impl Insight {
    pub fn new(polarity: Polarity, text: impl Into<String>) -> Self {
        Self {
            polarity,
            text: text.into(),
        }
    }

    pub fn positive(text: impl Into<String>) -> Self {
        Self::new(Polarity::Positive, text)
    }

    pub fn neutral(text: impl Into<String>) -> Self {
        Self::new(Polarity::Neutral, text)
    }

    pub fn negative(text: impl Into<String>) -> Self {
        Self::new(Polarity::Negative, text)
    }
}

/// The insight rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightRule {
    MostFrequentEmotion,
    DominantTimeOfDay,
    DominantDayOfWeek,
    CalmnessTrend,
}

impl InsightRule {
    /// All rules in evaluation order.
    pub const ALL: [InsightRule; 4] = [
        InsightRule::MostFrequentEmotion,
        InsightRule::DominantTimeOfDay,
        InsightRule::DominantDayOfWeek,
        InsightRule::CalmnessTrend,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InsightRule::MostFrequentEmotion => "most_frequent_emotion",
            InsightRule::DominantTimeOfDay => "dominant_time_of_day",
            InsightRule::DominantDayOfWeek => "dominant_day_of_week",
            InsightRule::CalmnessTrend => "calmness_trend",
        }
    }
}

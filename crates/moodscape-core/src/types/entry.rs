//! Journal records exchanged with the storage layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{clamp_finite, DerivedParameters, Emotion, EmotionVector};
use crate::error::{CoreError, CoreResult};

/// Capture channel that produced an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySource {
    #[default]
    Sliders,
    Drawing,
    Voice,
    Face,
}

impl EntrySource {
    /// All sources in wire order.
    pub const ALL: [EntrySource; 4] = [
        EntrySource::Sliders,
        EntrySource::Drawing,
        EntrySource::Voice,
        EntrySource::Face,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sliders => "sliders",
            Self::Drawing => "drawing",
            Self::Voice => "voice",
            Self::Face => "face",
        }
    }
}

impl fmt::Display for EntrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntrySource {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        EntrySource::ALL
            .into_iter()
            .find(|src| src.as_str() == needle)
            .ok_or_else(|| CoreError::UnknownSource(s.to_string()))
    }
}

/// A single classified journal entry.
///
/// Entries are built once (by the classifier or directly from slider input)
/// and never mutated afterwards; the storage collaborator owns the list and
/// may only delete. Analytics code reads entries through
/// [`MoodEntry::sanitized`] values and allocates fresh outputs.
///
/// On the wire, keys are camelCase and `timestamp` is epoch milliseconds.
/// `notes` may be absent.
///
/// # Example
///
/// ```
/// use moodscape_core::{DerivedParameters, Emotion, EmotionVector, EntrySource, MoodEntry};
///
/// let entry = MoodEntry::new(
///     1_700_000_000_000,
///     EmotionVector::all_neutral(),
///     DerivedParameters::new(20.0, 30.0, 10.0),
///     Emotion::Neutral,
///     1.0,
///     EntrySource::Sliders,
/// )
/// .with_notes("quiet afternoon");
///
/// assert_eq!(entry.notes.as_deref(), Some("quiet afternoon"));
/// assert!(!entry.id.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    /// Unique identifier, caller-assigned or UUID v4.
    pub id: String,

    /// Capture time in epoch milliseconds.
    pub timestamp: i64,

    /// Emotion distribution, normalized when produced by the classifier.
    pub emotions: EmotionVector,

    /// Slider parameters the entry was classified from.
    #[serde(default)]
    pub derived: DerivedParameters,

    /// Highest-scoring emotion of `emotions`.
    pub dominant_emotion: Emotion,

    /// Share of the dominant emotion, in `[0, 1]`.
    #[serde(default)]
    pub confidence: f64,

    /// Capture channel.
    #[serde(default)]
    pub source: EntrySource,

    /// Free-text note attached by the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MoodEntry {
    /// Create an entry with a freshly generated UUID v4 id.
    pub fn new(
        timestamp: i64,
        emotions: EmotionVector,
        derived: DerivedParameters,
        dominant_emotion: Emotion,
        confidence: f64,
        source: EntrySource,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp,
            emotions,
            derived,
            dominant_emotion,
            confidence,
            source,
            notes: None,
        }
    }

    /// Replace the generated id with a caller-assigned one.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Attach a note.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Copy with out-of-domain numbers clamped.
    ///
    /// Derived parameters go to `[0, 100]`, emotion components and
    /// confidence to `[0, 1]`. NaN becomes the lower bound. The emotion
    /// vector is not renormalized.
    pub fn sanitized(&self) -> Self {
        Self {
            emotions: self.emotions.clamped(),
            derived: self.derived.clamped(),
            confidence: clamp_finite(self.confidence, 0.0, 1.0),
            ..self.clone()
        }
    }

    /// True if [`MoodEntry::sanitized`] would change nothing.
    pub fn is_sanitized(&self) -> bool {
        self.derived.is_in_range()
            && (0.0..=1.0).contains(&self.confidence)
            && self.emotions.iter().all(|(_, v)| (0.0..=1.0).contains(&v))
    }

    /// Decode a single entry from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a JSON array of entries.
    pub fn list_from_json(json: &str) -> CoreResult<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

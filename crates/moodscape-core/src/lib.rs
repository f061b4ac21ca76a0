//! Moodscape Core Library
//!
//! Domain types shared by the Moodscape emotion analytics engine.
//!
//! # Architecture
//!
//! This crate defines:
//! - The eight-key emotion schema ([`Emotion`], [`EmotionMap`], [`EmotionVector`])
//! - Slider-style signal parameters ([`DerivedParameters`])
//! - Journal records as handed over by the storage layer ([`MoodEntry`])
//! - Error types and result aliases
//!
//! Computation lives in `moodscape-analytics`; nothing here performs I/O.
//!
//! # Example
//!
//! ```
//! use moodscape_core::{DerivedParameters, Emotion, EmotionVector};
//!
//! let derived = DerivedParameters::new(140.0, 50.0, -3.0);
//! assert_eq!(derived.energy, 100.0);
//! assert_eq!(derived.tension, 0.0);
//!
//! let vector = EmotionVector::all_neutral();
//! assert!(vector.is_normalized());
//! assert_eq!(vector.dominant().0, Emotion::Neutral);
//! ```

pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::{
    clamp_finite, DerivedParameters, Emotion, EmotionMap, EmotionVector, EntrySource, MoodEntry,
    Polarity,
};

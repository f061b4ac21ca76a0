//! Rule-based insights over aggregate statistics.
//!
//! Four rules run in a fixed order and each contributes at most one
//! [`Insight`]:
//!
//! 1. Most frequent emotion
//! 2. Dominant time of day
//! 3. Dominant day of week
//! 4. Calmness trend across the window
//!
//! The output order is the rule order. It is not a ranking.

mod generator;
mod types;


pub use self::generator::InsightGenerator;
pub use self::types::{Insight, InsightRule};

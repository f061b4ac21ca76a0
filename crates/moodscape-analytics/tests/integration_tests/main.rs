//! Integration tests for the Moodscape analytics engine.
//!
//! These run the public API end to end on deterministic data (NO MOCKS):
//! - Classifier output is a normalized eight-emotion vector
//! - Aggregation counts exactly the windowed entries
//! - Weekly comparison and insight rules follow their fixed formulas
//! - Output is byte-identical for identical input
//! - The JSON boundary tolerates missing optional fields and bad numbers

mod helpers;
mod classifier_tests;
mod trend_tests;
mod insight_tests;
mod pipeline_tests;

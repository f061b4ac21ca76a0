//! Combined analysis output.

use serde::{Deserialize, Serialize};

use crate::insights::Insight;
use crate::trends::AggregateResult;

/// Aggregate plus the insights derived from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub aggregate: AggregateResult,
    pub insights: Vec<Insight>,
}

impl AnalyticsReport {
    pub fn new(aggregate: AggregateResult, insights: Vec<Insight>) -> Self {
        Self {
            aggregate,
            insights,
        }
    }

    /// Serialize to a JSON string with camelCase keys.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

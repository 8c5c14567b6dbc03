use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AnalyticsDomain;

/// Business-facing purpose of the request. Not capability-checked.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnalyticsIntent {
    /// One-sentence description of the analytics request.
    #[schemars(length(min = 1))]
    pub summary: String,
    pub domain: AnalyticsDomain,
}

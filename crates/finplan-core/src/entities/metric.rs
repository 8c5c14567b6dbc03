use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Frequency, MetricName, MetricUnit};

/// A metric the plan wants computed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MetricDefinition {
    pub name: MetricName,
    pub description: String,
    pub frequency: Frequency,
    pub unit: MetricUnit,
}

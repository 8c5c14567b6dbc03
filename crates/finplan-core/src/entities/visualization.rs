use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ChartType;

/// A chart rendered from the plan's outputs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Visualization {
    pub chart_type: ChartType,
    pub x_axis: String,
    pub y_axis: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
}

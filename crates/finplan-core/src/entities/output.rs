use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::OutputType;

/// An output exposed by the analytics API. Accepted as-is by the validator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ApiOutput {
    pub name: String,
    #[serde(rename = "type")]
    pub output_type: OutputType,
    pub fields: Vec<String>,
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ImpactLevel;

/// An assumption the plan relies on.
///
/// Never rejected. Impact levels in the governance review set raise a warning.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Assumption {
    pub description: String,
    pub impact: ImpactLevel,
}

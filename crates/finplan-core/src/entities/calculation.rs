use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One step of the calculation pipeline.
///
/// `depends_on` lists the ids of steps that must run first. Whether those ids
/// exist and form an acyclic graph is checked by [`crate::calculations`], not
/// at construction.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CalculationStep {
    #[schemars(range(min = 1))]
    pub step_id: u32,
    pub description: String,
    pub depends_on: Vec<u32>,
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{DataSourceName, Granularity};

/// A dataset the plan reads from, with the columns it needs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DataSource {
    pub name: DataSourceName,
    pub granularity: Granularity,
    pub required_fields: Vec<String>,
}

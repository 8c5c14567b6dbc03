use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{FilterField, FilterOperator};

/// A filter applied to the source data.
///
/// Support is decided per `(field, operator)` pair, see
/// [`crate::capabilities::is_filter_supported`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FilterDefinition {
    pub field: FilterField,
    pub operator: FilterOperator,
    pub required: bool,
}

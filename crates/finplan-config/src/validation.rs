//! Validation policy configuration.

use finplan_core::{CalculationGraphPolicy, Validator};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// How calculation dependency problems are reported: `ignore`, `warn`,
    /// or `reject`.
    #[serde(default)]
    pub calculation_graph: CalculationGraphPolicy,

    /// Treat governance warnings as a failing exit status in the CLI.
    /// Does not change `is_valid`.
    #[serde(default)]
    pub warnings_as_errors: bool,
}

impl ValidationConfig {
    /// Build the validator this configuration describes.
    #[must_use]
    pub const fn validator(&self) -> Validator {
        Validator::new(self.calculation_graph)
    }
}

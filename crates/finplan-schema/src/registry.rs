//! Central schema registry for finance-analytics plan types.
//!
//! The `SchemaRegistry` builds JSON Schemas from finplan-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;

use finplan_core::capabilities::CapabilitySnapshot;
use finplan_core::entities;
use finplan_core::PlanValidationResult;
use schemars::schema_for;

use crate::conformance::{PLAN_SCHEMA, describe_violation};
use crate::error::SchemaError;
use crate::formats;

/// Central store of every plan-related JSON Schema.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert(
            $name,
            serde_json::to_value(schema_for!($ty)).expect("schemars output is valid JSON"),
        );
    };
}

impl SchemaRegistry {
    /// Build a registry holding the plan, each plan entity, the validation
    /// result, and the capability snapshot.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on a `schemars`-generated
    /// schema, which does not happen for derived schemas.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Aggregate root (1) ---
        register!(schemas, PLAN_SCHEMA, entities::FinanceAnalyticsPlan);

        // --- Plan entities (9) ---
        register!(schemas, "analytics_intent", entities::AnalyticsIntent);
        register!(schemas, "metric_definition", entities::MetricDefinition);
        register!(schemas, "data_source", entities::DataSource);
        register!(schemas, "calculation_step", entities::CalculationStep);
        register!(schemas, "filter_definition", entities::FilterDefinition);
        register!(schemas, "api_output", entities::ApiOutput);
        register!(schemas, "visualization", entities::Visualization);
        register!(schemas, "assumption", entities::Assumption);
        register!(schemas, "risk", entities::Risk);

        // --- Outputs (2) ---
        register!(schemas, "plan_validation_result", PlanValidationResult);
        register!(schemas, "capability_snapshot", CapabilitySnapshot);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` listing every violation.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = formats::compile(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| describe_violation(&e))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//! Structural conformance: turning untrusted JSON into a plan.
//!
//! A plan that fails here is never constructed. Every violation is reported,
//! not just the first, as `"{json_pointer}: {message}"`.

use std::sync::LazyLock;

use finplan_core::entities::FinanceAnalyticsPlan;
use jsonschema::ValidationError;
use schemars::schema_for;
use serde::Deserialize;

use crate::error::SchemaError;
use crate::formats;

/// Registry name of the plan schema.
pub const PLAN_SCHEMA: &str = "finance_analytics_plan";

/// Compiled plan schema, built on first use and shared afterwards.
static PLAN_VALIDATOR: LazyLock<Result<jsonschema::Validator, String>> = LazyLock::new(|| {
    let schema =
        serde_json::to_value(schema_for!(FinanceAnalyticsPlan)).map_err(|e| e.to_string())?;
    formats::compile(&schema).map_err(|e| e.to_string())
});

pub(crate) fn describe_violation(error: &ValidationError<'_>) -> String {
    let path = error.instance_path.to_string();
    if path.is_empty() {
        format!("(root): {error}")
    } else {
        format!("{path}: {error}")
    }
}

/// Construct a plan from an untrusted JSON value.
///
/// # Errors
///
/// Returns `SchemaError::ValidationFailed` listing every missing, mistyped,
/// out-of-range, or non-enum field. Returns `SchemaError::Generation` if the
/// plan schema itself could not be compiled.
pub fn construct_plan(value: &serde_json::Value) -> Result<FinanceAnalyticsPlan, SchemaError> {
    let validator = PLAN_VALIDATOR
        .as_ref()
        .map_err(|e| SchemaError::Generation(e.clone()))?;

    let errors: Vec<String> = validator
        .iter_errors(value)
        .map(|e| describe_violation(&e))
        .collect();
    if !errors.is_empty() {
        tracing::debug!(violations = errors.len(), "plan failed structural conformance");
        return Err(SchemaError::ValidationFailed { errors });
    }

    FinanceAnalyticsPlan::deserialize(value).map_err(SchemaError::Deserialize)
}

/// Parse JSON text and construct a plan from it.
///
/// # Errors
///
/// Returns `SchemaError::InvalidJson` if `text` is not JSON, otherwise the
/// errors of [`construct_plan`].
pub fn parse_plan(text: &str) -> Result<FinanceAnalyticsPlan, SchemaError> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(SchemaError::InvalidJson)?;
    construct_plan(&value)
}

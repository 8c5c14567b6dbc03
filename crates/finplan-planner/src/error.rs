//! Planner error types.

use finplan_schema::SchemaError;
use thiserror::Error;

/// Problems with what the generator returned, or with calling it.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The generator could not produce a completion.
    #[error("Plan generator failed: {0}")]
    Backend(String),

    /// The completion was wrapped in a markdown code fence.
    #[error("Generator returned markdown, not JSON")]
    Markdown { raw: String },

    /// The completion was not parseable JSON.
    #[error("Generator did not return valid JSON: {source}")]
    NotJson {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON did not conform to the plan schema.
    #[error("Generated JSON did not conform to FinanceAnalyticsPlan: {0}")]
    NonConformant(#[source] SchemaError),
}

/// Errors returned by the planning pipeline. All of them are client-side
/// rejections; capability problems are reported in the validation result.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// The request payload was not JSON.
    #[error("Invalid JSON payload")]
    InvalidPayload,

    /// The request text was missing, not a string, or blank.
    #[error("Field 'request' must be a non-empty string")]
    EmptyRequest,

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

//! Schema and structural conformance error types.

use thiserror::Error;

/// Errors from the schema registry and plan construction.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// JSON value did not pass schema validation.
    #[error("Validation failed: {}", errors.join("; "))]
    ValidationFailed {
        /// One message per failing field, prefixed with its JSON pointer.
        errors: Vec<String>,
    },

    /// Schema generation or compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),

    /// Input text was not JSON at all.
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// A schema-conformant value still failed to deserialize.
    #[error("Deserialization failed: {0}")]
    Deserialize(#[source] serde_json::Error),
}

impl SchemaError {
    /// Per-field violation messages, empty for non-validation errors.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        match self {
            Self::ValidationFailed { errors } => errors,
            _ => &[],
        }
    }
}

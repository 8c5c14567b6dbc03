use serde_json::Value;

use crate::error::PlannerError;

/// A checked natural-language analytics request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    text: String,
}

impl PlanRequest {
    /// Wrap request text, rejecting blank input.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::EmptyRequest` if `text` is empty or whitespace.
    pub fn new(text: impl Into<String>) -> Result<Self, PlannerError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(PlannerError::EmptyRequest);
        }
        Ok(Self { text })
    }

    /// Parse a `{"request": "..."}` payload.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidPayload` if `bytes` are not JSON, and
    /// `PlannerError::EmptyRequest` if `request` is missing, not a string, or
    /// blank.
    pub fn from_payload(bytes: &[u8]) -> Result<Self, PlannerError> {
        let payload: Value =
            serde_json::from_slice(bytes).map_err(|_| PlannerError::InvalidPayload)?;
        match payload.get("request") {
            Some(Value::String(text)) => Self::new(text.clone()),
            _ => Err(PlannerError::EmptyRequest),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

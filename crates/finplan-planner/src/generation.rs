//! The generator seam and parsing of its raw output.

use finplan_core::entities::FinanceAnalyticsPlan;

use crate::error::GenerationError;

/// Produces a raw completion for a planning request.
///
/// Implementations wrap whatever text-completion service is in use. They
/// return the text verbatim; parsing and validation happen here, not in the
/// implementation.
pub trait PlanGenerator {
    /// # Errors
    ///
    /// Returns `GenerationError::Backend` if no completion could be produced.
    fn complete(&self, system_prompt: &str, request: &str) -> Result<String, GenerationError>;
}

impl<G: PlanGenerator + ?Sized> PlanGenerator for &G {
    fn complete(&self, system_prompt: &str, request: &str) -> Result<String, GenerationError> {
        (**self).complete(system_prompt, request)
    }
}

/// Generator that always returns the same completion.
///
/// Used for offline runs where the completion was captured earlier.
#[derive(Debug, Clone)]
pub struct StaticGenerator {
    completion: String,
}

impl StaticGenerator {
    #[must_use]
    pub fn new(completion: impl Into<String>) -> Self {
        Self {
            completion: completion.into(),
        }
    }
}

impl PlanGenerator for StaticGenerator {
    fn complete(&self, _system_prompt: &str, _request: &str) -> Result<String, GenerationError> {
        Ok(self.completion.clone())
    }
}

/// Turn raw generator output into a plan.
///
/// # Errors
///
/// - `GenerationError::Markdown` if the output starts with a code fence
/// - `GenerationError::NotJson` if it does not parse as JSON
/// - `GenerationError::NonConformant` if the JSON fails structural conformance
pub fn parse_generated_plan(raw: &str) -> Result<FinanceAnalyticsPlan, GenerationError> {
    let trimmed = raw.trim();
    if trimmed.starts_with("```") {
        tracing::warn!("generator output wrapped in a code fence");
        return Err(GenerationError::Markdown {
            raw: raw.to_string(),
        });
    }

    let value: serde_json::Value =
        serde_json::from_str(trimmed).map_err(|source| GenerationError::NotJson {
            raw: raw.to_string(),
            source,
        })?;

    finplan_schema::construct_plan(&value).map_err(|error| {
        tracing::warn!(violations = error.violations().len(), "generated plan is not conformant");
        GenerationError::NonConformant(error)
    })
}

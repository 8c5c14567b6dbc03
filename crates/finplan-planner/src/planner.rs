use finplan_core::entities::FinanceAnalyticsPlan;
use finplan_core::{PlanValidationResult, Validator};
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::generation::{PlanGenerator, parse_generated_plan};
use crate::prompt::PLANNER_PROMPT;
use crate::request::PlanRequest;

/// A constructed plan together with its capability validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanResponse {
    pub plan: FinanceAnalyticsPlan,
    pub validation: PlanValidationResult,
}

/// Request → generate → construct → validate.
pub struct Planner<G> {
    generator: G,
    validator: Validator,
}

impl<G: PlanGenerator> Planner<G> {
    #[must_use]
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            validator: Validator::default(),
        }
    }

    #[must_use]
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    /// Plan a checked request.
    ///
    /// A plan that asks for unsupported capabilities is still `Ok`; look at
    /// `validation.is_valid()`.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Generation` if the generator fails or its output
    /// is not a structurally valid plan.
    pub fn plan(&self, request: &PlanRequest) -> Result<PlanResponse, PlannerError> {
        let raw = self.generator.complete(PLANNER_PROMPT, request.as_str())?;
        let plan = parse_generated_plan(&raw)?;
        let validation = self.validator.validate(&plan);

        tracing::debug!(
            is_valid = validation.is_valid(),
            errors = validation.errors().len(),
            warnings = validation.warnings().len(),
            "planned analytics request"
        );

        Ok(PlanResponse { plan, validation })
    }

    /// Plan raw request text. Blank text is rejected before the generator is
    /// called.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::EmptyRequest` for blank text, otherwise the
    /// errors of [`Self::plan`].
    pub fn plan_text(&self, text: &str) -> Result<PlanResponse, PlannerError> {
        let request = PlanRequest::new(text)?;
        self.plan(&request)
    }
}

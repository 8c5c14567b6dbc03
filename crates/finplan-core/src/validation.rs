//! Capability validation of a structurally valid plan.
//!
//! The validator is a total function: every plan yields exactly one
//! [`PlanValidationResult`]. All problems are collected in one pass and
//! reported in a fixed order (metrics, data sources, filters, visualizations,
//! then assumption warnings, then calculation graph findings), so validating
//! the same plan twice gives identical output.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::calculations::CalculationGraph;
use crate::capabilities;
use crate::entities::FinanceAnalyticsPlan;
use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// PlanValidationResult
// ---------------------------------------------------------------------------

/// Outcome of validating a plan against the capability registry.
///
/// `is_valid` is derived from `errors` when the result is built and cannot be
/// set independently. Deserializing a result whose flag disagrees with its
/// error list fails.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(try_from = "ResultWire")]
pub struct PlanValidationResult {
    is_valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl PlanValidationResult {
    #[must_use]
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// One entry per unsupported element, in validation order.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Governance flags. These never affect [`Self::is_valid`].
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

#[derive(Deserialize, JsonSchema)]
struct ResultWire {
    is_valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl TryFrom<ResultWire> for PlanValidationResult {
    type Error = CoreError;

    fn try_from(wire: ResultWire) -> Result<Self, Self::Error> {
        if wire.is_valid != wire.errors.is_empty() {
            return Err(CoreError::InconsistentResult {
                is_valid: wire.is_valid,
                error_count: wire.errors.len(),
            });
        }
        Ok(Self::new(wire.errors, wire.warnings))
    }
}

// ---------------------------------------------------------------------------
// CalculationGraphPolicy
// ---------------------------------------------------------------------------

/// How calculation dependency problems (duplicate ids, unknown references,
/// cycles) are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CalculationGraphPolicy {
    /// Calculations pass through unchecked.
    Ignore,
    /// Findings become warnings.
    #[default]
    Warn,
    /// Findings become errors and make the plan invalid.
    Reject,
}

impl CalculationGraphPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for CalculationGraphPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculationGraphPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ignore" => Ok(Self::Ignore),
            "warn" => Ok(Self::Warn),
            "reject" => Ok(Self::Reject),
            other => Err(CoreError::UnknownPolicy(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

/// Plan validator. Holds no mutable state and can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    calculation_policy: CalculationGraphPolicy,
}

impl Validator {
    #[must_use]
    pub const fn new(calculation_policy: CalculationGraphPolicy) -> Self {
        Self { calculation_policy }
    }

    #[must_use]
    pub const fn calculation_policy(&self) -> CalculationGraphPolicy {
        self.calculation_policy
    }

    /// Check every element of `plan` against the capability registry.
    #[must_use]
    pub fn validate(&self, plan: &FinanceAnalyticsPlan) -> PlanValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for metric in &plan.metrics {
            if !capabilities::is_metric_supported(metric.name.as_str()) {
                errors.push(format!("Unsupported metric: {}", metric.name));
            }
        }

        for source in &plan.data_sources {
            if !capabilities::is_data_source_supported(source.name.as_str()) {
                errors.push(format!("Unsupported data source: {}", source.name));
            }
        }

        for filter in &plan.filters {
            if !capabilities::is_filter_supported(filter.field.as_str(), filter.operator.as_str()) {
                errors.push(format!(
                    "Unsupported filter/operator combination: {} {}",
                    filter.field, filter.operator
                ));
            }
        }

        for viz in &plan.visualizations {
            if !capabilities::is_visualization_supported(viz.chart_type.as_str()) {
                errors.push(format!("Unsupported visualization type: {}", viz.chart_type));
            }
        }

        for assumption in &plan.assumptions {
            if capabilities::requires_governance_review(assumption.impact.as_str()) {
                warnings.push(format!(
                    "High-impact assumption requires review: {}",
                    assumption.description
                ));
            }
        }

        let sink = match self.calculation_policy {
            CalculationGraphPolicy::Ignore => None,
            CalculationGraphPolicy::Warn => Some(&mut warnings),
            CalculationGraphPolicy::Reject => Some(&mut errors),
        };
        if let Some(sink) = sink {
            let graph = CalculationGraph::from_steps(&plan.calculations);
            sink.extend(graph.findings().iter().map(ToString::to_string));
        }

        tracing::debug!(
            errors = errors.len(),
            warnings = warnings.len(),
            policy = %self.calculation_policy,
            "validated finance analytics plan"
        );

        PlanValidationResult::new(errors, warnings)
    }
}

/// Validate `plan` with the default calculation graph policy.
#[must_use]
pub fn validate_plan(plan: &FinanceAnalyticsPlan) -> PlanValidationResult {
    Validator::default().validate(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{AnalyticsIntent, Assumption, CalculationStep};
    use crate::enums::{AnalyticsDomain, ImpactLevel};
    use pretty_assertions::assert_eq;

    fn cyclic_plan() -> FinanceAnalyticsPlan {
        let mut plan = FinanceAnalyticsPlan::empty(AnalyticsIntent {
            summary: "Cyclic steps".into(),
            domain: AnalyticsDomain::Risk,
        });
        plan.calculations = vec![
            CalculationStep {
                step_id: 1,
                description: "a".into(),
                depends_on: vec![2],
            },
            CalculationStep {
                step_id: 2,
                description: "b".into(),
                depends_on: vec![1],
            },
        ];
        plan
    }

    #[test]
    fn empty_plan_is_valid() {
        let plan = FinanceAnalyticsPlan::empty(AnalyticsIntent {
            summary: "Nothing requested".into(),
            domain: AnalyticsDomain::Performance,
        });
        let result = validate_plan(&plan);
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn new_derives_is_valid_from_errors() {
        assert!(PlanValidationResult::new(vec![], vec!["w".into()]).is_valid());
        assert!(!PlanValidationResult::new(vec!["e".into()], vec![]).is_valid());
    }

    #[test]
    fn calculation_findings_follow_policy() {
        let plan = cyclic_plan();

        let ignored = Validator::new(CalculationGraphPolicy::Ignore).validate(&plan);
        assert!(ignored.is_valid());
        assert!(ignored.warnings().is_empty());

        let warned = Validator::new(CalculationGraphPolicy::Warn).validate(&plan);
        assert!(warned.is_valid());
        assert_eq!(warned.warnings().len(), 1);

        let rejected = Validator::new(CalculationGraphPolicy::Reject).validate(&plan);
        assert!(!rejected.is_valid());
        assert_eq!(rejected.errors().len(), 1);
        assert!(rejected.warnings().is_empty());
    }

    #[test]
    fn calculation_warnings_follow_assumption_warnings() {
        let mut plan = cyclic_plan();
        plan.assumptions = vec![Assumption {
            description: "Prices are end of day".into(),
            impact: ImpactLevel::High,
        }];
        let result = validate_plan(&plan);
        assert_eq!(
            result.warnings()[0],
            "High-impact assumption requires review: Prices are end of day"
        );
        assert!(result.warnings()[1].starts_with("Cyclic calculation dependency"));
    }

    #[test]
    fn policy_parses_from_str() {
        assert_eq!(
            "reject".parse::<CalculationGraphPolicy>().unwrap(),
            CalculationGraphPolicy::Reject
        );
        assert_eq!(CalculationGraphPolicy::default(), CalculationGraphPolicy::Warn);
        assert!(matches!(
            "strict".parse::<CalculationGraphPolicy>(),
            Err(CoreError::UnknownPolicy(name)) if name == "strict"
        ));
    }

    #[test]
    fn result_serializes_is_valid() {
        let result =
            PlanValidationResult::new(vec!["Unsupported metric: cumulative_pnl".into()], vec![]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["is_valid"], false);
        assert_eq!(json["errors"][0], "Unsupported metric: cumulative_pnl");
    }

    #[test]
    fn inconsistent_result_is_rejected_on_deserialize() {
        let json = serde_json::json!({
            "is_valid": true,
            "errors": ["Unsupported data source: trades"],
            "warnings": []
        });
        assert!(serde_json::from_value::<PlanValidationResult>(json).is_err());

        let json = serde_json::json!({ "is_valid": true, "errors": [], "warnings": ["w"] });
        let result: PlanValidationResult = serde_json::from_value(json).unwrap();
        assert!(result.is_valid());
        assert_eq!(result.warnings(), ["w".to_string()]);
    }
}

//! Capability registry: what the system can currently act on.
//!
//! Every table is a `const` slice of wire literals. Nothing is mutated at
//! runtime, so the tables are safe to read from any number of threads.
//! Predicates take `&str` rather than model enums so the registry can name
//! values the model does not carry yet (for example the `>=` operator) and
//! stays independent of the validator.
//!
//! Unknown inputs are never an error; they are simply unsupported.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metrics the system can compute today.
///
/// `cumulative_pnl` is accepted by the model but not yet listed here.
pub const SUPPORTED_METRICS: &[&str] = &["daily_pnl", "rolling_volatility"];

/// Data sources the system can read today.
pub const SUPPORTED_DATA_SOURCES: &[&str] = &["positions"];

/// Allowed operators per filterable field.
///
/// A field without an entry supports no operators.
pub const SUPPORTED_FILTERS: &[(&str, &[&str])] = &[
    ("portfolio_id", &["="]),
    ("date", &["between", "=", ">=", "<="]),
];

/// Chart types the system can render today.
pub const SUPPORTED_VISUALIZATIONS: &[&str] = &["line"];

/// Assumption impact levels that require governance review.
pub const HIGH_IMPACT_ASSUMPTIONS: &[&str] = &["high"];

#[must_use]
pub fn is_metric_supported(name: &str) -> bool {
    SUPPORTED_METRICS.contains(&name)
}

#[must_use]
pub fn is_data_source_supported(name: &str) -> bool {
    SUPPORTED_DATA_SOURCES.contains(&name)
}

/// Operators allowed for `field`, or an empty slice if the field is unknown.
#[must_use]
pub fn allowed_operators(field: &str) -> &'static [&'static str] {
    SUPPORTED_FILTERS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, operators)| *operators)
        .unwrap_or_default()
}

/// Whether `operator` may be used on `field`.
///
/// The check is relational: `between` is valid for `date` but not for
/// `portfolio_id`.
#[must_use]
pub fn is_filter_supported(field: &str, operator: &str) -> bool {
    allowed_operators(field).contains(&operator)
}

#[must_use]
pub fn is_visualization_supported(chart_type: &str) -> bool {
    SUPPORTED_VISUALIZATIONS.contains(&chart_type)
}

/// Whether an assumption with this impact level must be flagged for review.
#[must_use]
pub fn requires_governance_review(impact: &str) -> bool {
    HIGH_IMPACT_ASSUMPTIONS.contains(&impact)
}

/// Allowed operators for one filterable field.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FilterCapability {
    pub field: String,
    pub operators: Vec<String>,
}

/// Serializable copy of every registry table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CapabilitySnapshot {
    pub metrics: Vec<String>,
    pub data_sources: Vec<String>,
    pub filters: Vec<FilterCapability>,
    pub visualizations: Vec<String>,
    pub high_impact_assumptions: Vec<String>,
}

impl CapabilitySnapshot {
    /// Snapshot the registry as it is compiled into this binary.
    #[must_use]
    pub fn current() -> Self {
        Self {
            metrics: to_owned_list(SUPPORTED_METRICS),
            data_sources: to_owned_list(SUPPORTED_DATA_SOURCES),
            filters: SUPPORTED_FILTERS
                .iter()
                .map(|(field, operators)| FilterCapability {
                    field: (*field).to_string(),
                    operators: to_owned_list(operators),
                })
                .collect(),
            visualizations: to_owned_list(SUPPORTED_VISUALIZATIONS),
            high_impact_assumptions: to_owned_list(HIGH_IMPACT_ASSUMPTIONS),
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{DataSourceName, MetricName};

    #[test]
    fn metric_support_is_a_subset_of_the_model() {
        assert!(is_metric_supported("daily_pnl"));
        assert!(is_metric_supported("rolling_volatility"));
        assert!(!is_metric_supported("cumulative_pnl"));

        let model_names: Vec<&str> = MetricName::ALL.iter().map(|m| m.as_str()).collect();
        for supported in SUPPORTED_METRICS {
            assert!(model_names.contains(supported), "{supported} not in model");
        }
    }

    #[test]
    fn only_positions_is_a_supported_source() {
        let supported: Vec<DataSourceName> = DataSourceName::ALL
            .into_iter()
            .filter(|source| is_data_source_supported(source.as_str()))
            .collect();
        assert_eq!(supported, vec![DataSourceName::Positions]);
    }

    #[test]
    fn filter_support_is_relational() {
        assert!(is_filter_supported("date", "between"));
        assert!(is_filter_supported("date", ">="));
        assert!(is_filter_supported("portfolio_id", "="));
        assert!(!is_filter_supported("portfolio_id", "between"));
    }

    #[test]
    fn unknown_field_supports_nothing() {
        assert!(allowed_operators("account_id").is_empty());
        assert!(!is_filter_supported("account_id", "="));
        assert!(!is_filter_supported("", ""));
    }

    #[test]
    fn unknown_inputs_return_false() {
        assert!(!is_metric_supported("made_up_metric"));
        assert!(!is_data_source_supported(""));
        assert!(!is_visualization_supported("bar"));
        assert!(!requires_governance_review("critical"));
    }

    #[test]
    fn only_high_impact_requires_review() {
        assert!(requires_governance_review("high"));
        assert!(!requires_governance_review("medium"));
        assert!(!requires_governance_review("low"));
    }

    #[test]
    fn snapshot_mirrors_tables() {
        let snapshot = CapabilitySnapshot::current();
        assert_eq!(snapshot.metrics, vec!["daily_pnl", "rolling_volatility"]);
        assert_eq!(snapshot.data_sources, vec!["positions"]);
        assert_eq!(snapshot.filters.len(), 2);
        assert_eq!(snapshot.filters[1].field, "date");
        assert_eq!(snapshot.filters[1].operators, vec!["between", "=", ">=", "<="]);
        assert_eq!(snapshot.visualizations, vec!["line"]);
        assert_eq!(snapshot.high_impact_assumptions, vec!["high"]);
    }
}

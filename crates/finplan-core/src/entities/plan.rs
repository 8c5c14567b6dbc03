use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{
    AnalyticsIntent, ApiOutput, Assumption, CalculationStep, DataSource, FilterDefinition,
    MetricDefinition, Risk, Visualization,
};

/// Aggregate root of a finance-analytics plan.
///
/// A value of this type is always structurally conformant: untrusted JSON
/// goes through schema validation before it is deserialized into one.
/// Collections keep plan order, which the validator relies on for
/// deterministic output.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FinanceAnalyticsPlan {
    pub intent: AnalyticsIntent,
    pub metrics: Vec<MetricDefinition>,
    pub data_sources: Vec<DataSource>,
    pub calculations: Vec<CalculationStep>,
    pub filters: Vec<FilterDefinition>,
    pub api_outputs: Vec<ApiOutput>,
    pub visualizations: Vec<Visualization>,
    pub assumptions: Vec<Assumption>,
    pub risks: Vec<Risk>,
}

impl FinanceAnalyticsPlan {
    /// A plan with the given intent and every collection empty.
    #[must_use]
    pub const fn empty(intent: AnalyticsIntent) -> Self {
        Self {
            intent,
            metrics: Vec::new(),
            data_sources: Vec::new(),
            calculations: Vec::new(),
            filters: Vec::new(),
            api_outputs: Vec::new(),
            visualizations: Vec::new(),
            assumptions: Vec::new(),
            risks: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{AnalyticsDomain, ChartType};

    #[test]
    fn empty_plan_has_no_elements() {
        let plan = FinanceAnalyticsPlan::empty(AnalyticsIntent {
            summary: "Daily PnL for fund A".into(),
            domain: AnalyticsDomain::PortfolioAnalytics,
        });
        assert!(plan.metrics.is_empty());
        assert!(plan.calculations.is_empty());
        assert!(plan.risks.is_empty());
    }

    #[test]
    fn missing_series_deserializes_as_none() {
        let viz: Visualization = serde_json::from_value(serde_json::json!({
            "chart_type": "line",
            "x_axis": "date",
            "y_axis": "pnl"
        }))
        .unwrap();
        assert_eq!(viz.chart_type, ChartType::Line);
        assert_eq!(viz.series, None);

        let json = serde_json::to_value(&viz).unwrap();
        assert!(json.get("series").is_none());
    }

    #[test]
    fn api_output_uses_type_key() {
        let output: ApiOutput = serde_json::from_value(serde_json::json!({
            "name": "pnl_series",
            "type": "time_series",
            "fields": ["date", "pnl"]
        }))
        .unwrap();
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["type"], "time_series");
        assert!(json.get("output_type").is_none());
    }
}

/// System prompt handed to plan generators.
///
/// The skeleton mirrors the plan wire shape key for key. Literal values shown
/// are examples; the model enums are the authority on what is accepted.
pub const PLANNER_PROMPT: &str = r#"You plan finance analytics requests.

Reply with a single JSON object and nothing else: no markdown, no code fences,
no commentary. Keep every key below, do not rename keys, do not add keys.

{
  "intent": { "summary": "", "domain": "portfolio_analytics" },
  "metrics": [
    { "name": "daily_pnl", "description": "", "frequency": "daily", "unit": "currency" }
  ],
  "data_sources": [
    { "name": "positions", "granularity": "daily", "required_fields": [] }
  ],
  "calculations": [
    { "step_id": 1, "description": "", "depends_on": [] }
  ],
  "filters": [
    { "field": "portfolio_id", "operator": "=", "required": true }
  ],
  "api_outputs": [
    { "name": "", "type": "time_series", "fields": [] }
  ],
  "visualizations": [
    { "chart_type": "line", "x_axis": "", "y_axis": "" }
  ],
  "assumptions": [
    { "description": "", "impact": "low" }
  ],
  "risks": [
    { "description": "", "mitigation": "" }
  ]
}

Allowed values:
- intent.domain: portfolio_analytics, risk, performance
- metrics[].name: daily_pnl, cumulative_pnl, rolling_volatility
- metrics[].unit: currency, percentage
- data_sources[].name: positions, prices, trades, market_data
- filters[].field: portfolio_id, date
- filters[].operator: =, between
- assumptions[].impact: low, medium, high
- step_id starts at 1; depends_on lists earlier step ids
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_lists_every_metric_name() {
        for name in finplan_core::enums::MetricName::ALL {
            assert!(PLANNER_PROMPT.contains(name.as_str()), "missing {name}");
        }
    }

    #[test]
    fn prompt_names_every_top_level_key() {
        for key in [
            "\"intent\"",
            "\"metrics\"",
            "\"data_sources\"",
            "\"calculations\"",
            "\"filters\"",
            "\"api_outputs\"",
            "\"visualizations\"",
            "\"assumptions\"",
            "\"risks\"",
        ] {
            assert!(PLANNER_PROMPT.contains(key), "missing {key}");
        }
    }
}

//! Closed literal sets used by the plan model.
//!
//! All enums serialize to the exact wire literals accepted in a plan payload.
//! Most use `snake_case` via `#[serde(rename_all = "snake_case")]`; operators
//! carry explicit renames because their literals are symbols.
//!
//! These sets describe what a plan may *say*. What the system can currently
//! *do* is decided by [`crate::capabilities`], which is intentionally narrower.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// AnalyticsDomain
// ---------------------------------------------------------------------------

/// Business area an analytics request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsDomain {
    PortfolioAnalytics,
    Risk,
    Performance,
}

impl AnalyticsDomain {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PortfolioAnalytics => "portfolio_analytics",
            Self::Risk => "risk",
            Self::Performance => "performance",
        }
    }
}

impl fmt::Display for AnalyticsDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MetricName
// ---------------------------------------------------------------------------

/// Metrics a plan may request.
///
/// `CumulativePnl` is well-formed but not yet supported by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MetricName {
    DailyPnl,
    CumulativePnl,
    RollingVolatility,
}

impl MetricName {
    /// Every metric name the model accepts, in declaration order.
    pub const ALL: [Self; 3] = [Self::DailyPnl, Self::CumulativePnl, Self::RollingVolatility];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DailyPnl => "daily_pnl",
            Self::CumulativePnl => "cumulative_pnl",
            Self::RollingVolatility => "rolling_volatility",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Frequency / Granularity
// ---------------------------------------------------------------------------

/// Sampling frequency of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
}

impl Frequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row granularity of a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Daily,
}

impl Granularity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MetricUnit
// ---------------------------------------------------------------------------

/// Unit a metric is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MetricUnit {
    Currency,
    Percentage,
}

impl MetricUnit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Currency => "currency",
            Self::Percentage => "percentage",
        }
    }
}

impl fmt::Display for MetricUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DataSourceName
// ---------------------------------------------------------------------------

/// Data sources a plan may read from.
///
/// Only `Positions` is currently supported by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DataSourceName {
    Positions,
    Prices,
    Trades,
    MarketData,
}

impl DataSourceName {
    /// Every data source name the model accepts, in declaration order.
    pub const ALL: [Self; 4] = [Self::Positions, Self::Prices, Self::Trades, Self::MarketData];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positions => "positions",
            Self::Prices => "prices",
            Self::Trades => "trades",
            Self::MarketData => "market_data",
        }
    }
}

impl fmt::Display for DataSourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FilterField / FilterOperator
// ---------------------------------------------------------------------------

/// Fields a plan may filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    PortfolioId,
    Date,
}

impl FilterField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PortfolioId => "portfolio_id",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison operator of a filter.
///
/// Whether an operator is usable depends on the field it is paired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum FilterOperator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "between")]
    Between,
}

impl FilterOperator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Between => "between",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OutputType
// ---------------------------------------------------------------------------

/// Shape of an API output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OutputType {
    TimeSeries,
}

impl OutputType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TimeSeries => "time_series",
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ChartType
// ---------------------------------------------------------------------------

/// Chart type of a visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    Line,
}

impl ChartType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ImpactLevel
// ---------------------------------------------------------------------------

/// Declared impact of an assumption on the analytics result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl ImpactLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire<T: Serialize>(value: T) -> String {
        serde_json::to_value(value)
            .unwrap()
            .as_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn serde_literal_matches_as_str() {
        assert_eq!(wire(AnalyticsDomain::PortfolioAnalytics), "portfolio_analytics");
        assert_eq!(wire(MetricName::RollingVolatility), "rolling_volatility");
        assert_eq!(wire(DataSourceName::MarketData), DataSourceName::MarketData.as_str());
        assert_eq!(wire(FilterField::PortfolioId), "portfolio_id");
        assert_eq!(wire(FilterOperator::Eq), "=");
        assert_eq!(wire(FilterOperator::Between), "between");
        assert_eq!(wire(OutputType::TimeSeries), "time_series");
        assert_eq!(wire(ImpactLevel::High), ImpactLevel::High.as_str());
    }

    #[test]
    fn metric_names_roundtrip_through_as_str() {
        for name in MetricName::ALL {
            let parsed: MetricName =
                serde_json::from_value(serde_json::Value::String(name.as_str().into())).unwrap();
            assert_eq!(parsed, name);
        }
    }

    #[test]
    fn unknown_literal_is_rejected() {
        let result: Result<MetricName, _> = serde_json::from_str("\"made_up_metric\"");
        assert!(result.is_err());

        let result: Result<FilterOperator, _> = serde_json::from_str("\">=\"");
        assert!(result.is_err());
    }

    #[test]
    fn display_uses_wire_literal() {
        assert_eq!(FilterOperator::Between.to_string(), "between");
        assert_eq!(DataSourceName::Positions.to_string(), "positions");
        assert_eq!(ChartType::Line.to_string(), "line");
    }
}

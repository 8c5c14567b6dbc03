//! Entity structs for every part of a finance-analytics plan.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the wire
//! shape, the generated JSON Schema, and the Rust types never drift apart.
//! Values are plain data: nothing here is mutated after construction.

mod assumption;
mod calculation;
mod data_source;
mod filter;
mod intent;
mod metric;
mod output;
mod plan;
mod risk;
mod visualization;

pub use assumption::Assumption;
pub use calculation::CalculationStep;
pub use data_source::DataSource;
pub use filter::FilterDefinition;
pub use intent::AnalyticsIntent;
pub use metric::MetricDefinition;
pub use output::ApiOutput;
pub use plan::FinanceAnalyticsPlan;
pub use risk::Risk;
pub use visualization::Visualization;

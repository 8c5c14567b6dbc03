//! # finplan-schema
//!
//! JSON Schema generation and structural conformance for finance-analytics plans.
//!
//! This crate provides:
//! - `SchemaRegistry`: every plan-related JSON Schema, generated from
//!   finplan-core types
//! - `construct_plan` / `parse_plan`: the only way untrusted JSON becomes a
//!   `FinanceAnalyticsPlan`
//!
//! ## Architecture
//!
//! Types are defined in `finplan-core` with `#[derive(JsonSchema)]`. Serde
//! stops at the first bad field, so incoming JSON is first checked against the
//! generated schema to collect every violation, and only a conformant value is
//! deserialized. Integer `format` tags are enforced so that a value passing
//! the schema also fits its Rust integer type.

mod conformance;
mod error;
mod formats;
mod registry;

pub use conformance::{PLAN_SCHEMA, construct_plan, parse_plan};
pub use error::SchemaError;
pub use registry::SchemaRegistry;

//! # finplan-core
//!
//! Plan model, capability registry, and validator for finance-analytics plans.
//!
//! This crate provides:
//! - Entity structs for every part of a plan (intent, metrics, data sources, etc.)
//! - Closed literal enums for every constrained field
//! - The capability registry: static tables of what the system supports today
//! - The validator that cross-checks a plan against the registry
//! - Calculation dependency graph analysis
//! - Cross-cutting error types
//!
//! The model enums are deliberately broader than the registry. A plan naming
//! `cumulative_pnl` is well-formed, but the registry does not support it yet,
//! so validation reports it as an error.

pub mod calculations;
pub mod capabilities;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod validation;

pub use validation::{CalculationGraphPolicy, PlanValidationResult, Validator, validate_plan};

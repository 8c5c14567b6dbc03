//! # finplan-planner
//!
//! Turns a natural-language analytics request into a validated plan.
//!
//! The text-completion call itself is an external collaborator behind the
//! [`PlanGenerator`] trait. This crate owns everything around it: checking
//! the request payload, rejecting malformed generator output, constructing
//! the plan, and validating it against the capability registry.
//!
//! ```text
//! payload ──▶ PlanRequest ──▶ PlanGenerator ──▶ parse_generated_plan ──▶ Validator
//!                                                (structural)            (capability)
//! ```

mod error;
mod generation;
mod planner;
mod prompt;
mod request;

pub use error::{GenerationError, PlannerError};
pub use generation::{PlanGenerator, StaticGenerator, parse_generated_plan};
pub use planner::{PlanResponse, Planner};
pub use prompt::PLANNER_PROMPT;
pub use request::PlanRequest;

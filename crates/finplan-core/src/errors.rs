//! Cross-cutting error types for finplan.
//!
//! Unsupported capabilities are never errors at this level: the validator
//! reports them as data in a [`crate::PlanValidationResult`]. Structural
//! failures of incoming JSON are defined in `finplan-schema`.

use thiserror::Error;

/// Errors raised by finplan-core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A serialized validation result whose `is_valid` flag disagrees with
    /// its error list.
    #[error("Inconsistent validation result: is_valid={is_valid} with {error_count} error(s)")]
    InconsistentResult { is_valid: bool, error_count: usize },

    /// An unrecognised calculation graph policy name.
    #[error("Unknown calculation graph policy: {0} (expected ignore, warn, or reject)")]
    UnknownPolicy(String),
}

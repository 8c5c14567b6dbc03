use finplan_core::PlanValidationResult;

pub mod capabilities;
pub mod plan;
pub mod schema;
pub mod validate;

/// Exit status for a plan that is well-formed but not executable.
pub const EXIT_UNSUPPORTED: u8 = 2;

/// Exit status for a validation result: `0` if valid, [`EXIT_UNSUPPORTED`]
/// if invalid, or if governance warnings are being treated as failures.
pub fn validation_status(result: &PlanValidationResult, warnings_as_errors: bool) -> u8 {
    let failed = !result.is_valid() || (warnings_as_errors && !result.warnings().is_empty());
    if failed { EXIT_UNSUPPORTED } else { 0 }
}

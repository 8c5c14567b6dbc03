use std::process::ExitCode;

use anyhow::Context;
use finplan_config::FinplanConfig;
use finplan_planner::{PlanRequest, Planner, StaticGenerator};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PlanArgs;
use crate::output;

/// Handle `finplan plan`.
///
/// The completion is read from a file captured from the text-completion
/// service, so this command never talks to the network.
pub fn handle(
    args: &PlanArgs,
    flags: &GlobalFlags,
    config: &FinplanConfig,
) -> anyhow::Result<ExitCode> {
    let request = match (&args.payload, &args.request) {
        (Some(path), _) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("failed to read payload '{}'", path.display()))?;
            PlanRequest::from_payload(&bytes)?
        }
        (None, Some(text)) => PlanRequest::new(text.as_str())?,
        (None, None) => anyhow::bail!("either --payload or --request is required"),
    };

    let completion = std::fs::read_to_string(&args.completion).with_context(|| {
        format!(
            "failed to read completion '{}'",
            args.completion.display()
        )
    })?;

    let planner = Planner::new(StaticGenerator::new(completion))
        .with_validator(config.validation.validator());
    let response = planner.plan(&request)?;

    output::output(&response, flags.format, config.general.pretty)?;
    Ok(ExitCode::from(super::validation_status(
        &response.validation,
        config.validation.warnings_as_errors,
    )))
}

use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use finplan_config::FinplanConfig;
use finplan_schema::SchemaError;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::output;

/// Handle `finplan validate`.
pub fn handle(
    args: &ValidateArgs,
    flags: &GlobalFlags,
    config: &FinplanConfig,
) -> anyhow::Result<ExitCode> {
    let text = read_input(&args.input)?;

    let plan = finplan_schema::parse_plan(&text).map_err(|error| match error {
        SchemaError::ValidationFailed { errors } => anyhow::anyhow!(
            "plan is not structurally valid:\n  {}",
            errors.join("\n  ")
        ),
        other => anyhow::Error::new(other).context("failed to construct plan"),
    })?;

    let result = config.validation.validator().validate(&plan);
    tracing::info!(
        input = %args.input,
        is_valid = result.is_valid(),
        "plan validated"
    );

    output::output(&result, flags.format, config.general.pretty)?;
    Ok(ExitCode::from(super::validation_status(
        &result,
        config.validation.warnings_as_errors,
    )))
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read plan from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(input).with_context(|| format!("failed to read plan file '{input}'"))
}

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use finplan_config::FinplanConfig;

mod cli;
mod commands;
mod output;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("finplan error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    init_tracing(cli.log_level())?;

    let flags = cli.global_flags();
    let config = load_config(&flags)?;
    tracing::debug!(
        calculation_graph = %config.validation.calculation_graph,
        warnings_as_errors = config.validation.warnings_as_errors,
        "configuration loaded"
    );

    match &cli.command {
        cli::Commands::Validate(args) => commands::validate::handle(args, &flags, &config),
        cli::Commands::Plan(args) => commands::plan::handle(args, &flags, &config),
        cli::Commands::Schema(args) => {
            commands::schema::handle(args, &flags, config.general.pretty)?;
            Ok(ExitCode::SUCCESS)
        }
        cli::Commands::Capabilities => {
            commands::capabilities::handle(&flags, config.general.pretty)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(flags: &cli::GlobalFlags) -> anyhow::Result<FinplanConfig> {
    let config = match &flags.config {
        Some(path) => FinplanConfig::load_with_file(path),
        None => FinplanConfig::load_with_dotenv(),
    };
    config.context("failed to load finplan configuration")
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("FINPLAN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

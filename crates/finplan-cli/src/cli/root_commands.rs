use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Construct a plan from JSON and validate it against current capabilities.
    Validate(ValidateArgs),
    /// Turn a request plus a captured generator completion into a validated plan.
    Plan(PlanArgs),
    /// Dump JSON schema for a registered type, or list registered names.
    Schema(SchemaArgs),
    /// Show the capability registry.
    Capabilities,
}

/// Arguments for `finplan validate`.
#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Plan JSON file, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: String,
}

/// Arguments for `finplan plan`.
#[derive(Clone, Debug, Args)]
pub struct PlanArgs {
    /// Request payload file of the form `{"request": "..."}`.
    #[arg(long, conflicts_with = "request", required_unless_present = "request")]
    pub payload: Option<PathBuf>,
    /// Request text given inline.
    #[arg(long)]
    pub request: Option<String>,
    /// File holding the raw generator completion.
    #[arg(long)]
    pub completion: PathBuf,
}

/// Arguments for `finplan schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Registered schema name (omit to list all names).
    pub type_name: Option<String>,
}

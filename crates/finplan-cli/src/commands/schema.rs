use finplan_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output;

/// Handle `finplan schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags, pretty: bool) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();

    let Some(name) = args.type_name.as_deref() else {
        return output::output(&registry.list(), flags.format, pretty);
    };

    let schema = registry.get(name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown schema '{name}' (available: {})",
            registry.list().join(", ")
        )
    })?;
    output::output(schema, flags.format, pretty)
}

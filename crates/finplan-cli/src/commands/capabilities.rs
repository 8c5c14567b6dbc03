use finplan_core::capabilities::CapabilitySnapshot;

use crate::cli::GlobalFlags;
use crate::output;

/// Handle `finplan capabilities`.
pub fn handle(flags: &GlobalFlags, pretty: bool) -> anyhow::Result<()> {
    output::output(&CapabilitySnapshot::current(), flags.format, pretty)
}

use roster_store::RosterService;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `roster list`.
pub fn handle(service: &RosterService, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&service.summaries(), flags.format)
}

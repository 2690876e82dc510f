use anyhow::Context;
use roster_store::RosterService;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `roster show <id>`. Prints the record as stored, including values
/// kept verbatim from an older layout.
pub fn handle(id: &str, service: &RosterService, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = service
        .get(id)
        .with_context(|| format!("no employee with id '{id}'"))?;
    output(&record.to_stored()?, flags.format)
}

use anyhow::bail;
use roster_store::RosterService;

use crate::cli::GlobalFlags;
use crate::commands::shared::report;

/// Handle `roster delete <id>`.
pub fn handle(id: &str, service: &mut RosterService, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(event) = service.delete(id) else {
        bail!("no employee with id '{id}'");
    };
    report::event(&event, flags)
}

use anyhow::bail;
use roster_store::RosterService;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::UpdateArgs;
use crate::commands::shared::{form, report};

/// Handle `roster update <id>`: select for edit, overlay the given fields,
/// and submit.
pub fn handle(
    args: &UpdateArgs,
    service: &mut RosterService,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let overrides = form::collect(&args.fields)?;
    let Some(mut submission) = service.select_for_edit(&args.id) else {
        bail!("no employee with id '{}'", args.id);
    };
    submission.merge(overrides);

    let event = service
        .submit(&submission)
        .map_err(|errors| report::rejected(&errors))?;
    report::event(&event, flags)
}

use roster_core::submission::RawSubmission;
use roster_store::RosterService;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::commands::shared::{form, report};

/// Handle `roster add`.
pub fn handle(
    args: &AddArgs,
    service: &mut RosterService,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut submission = RawSubmission::form_defaults();
    submission.merge(form::collect(&args.fields)?);

    let event = service
        .submit(&submission)
        .map_err(|errors| report::rejected(&errors))?;
    report::event(&event, flags)
}

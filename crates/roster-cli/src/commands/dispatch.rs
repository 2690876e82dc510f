use roster_store::RosterService;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: Commands,
    service: &mut RosterService,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Add(args) => commands::add::handle(&args, service, flags),
        Commands::Update(args) => commands::update::handle(&args, service, flags),
        Commands::Delete(args) => commands::delete::handle(&args.id, service, flags),
        Commands::List => commands::list::handle(service, flags),
        Commands::Show(args) => commands::show::handle(&args.id, service, flags),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}

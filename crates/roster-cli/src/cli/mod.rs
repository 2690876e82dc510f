use clap::Parser;
use roster_config::RosterConfig;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `roster` binary.
#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "Roster - validated employee records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to `general.default_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the store (overrides `storage.data_dir`)
    #[arg(short, long, global = true)]
    pub data_dir: Option<String>,
}

impl Cli {
    /// Global flags for command handlers, with config-provided defaults
    /// filled in.
    #[must_use]
    pub fn global_flags(&self, config: &RosterConfig) -> GlobalFlags {
        GlobalFlags {
            format: self
                .format
                .unwrap_or_else(|| OutputFormat::from_config(&config.general.default_format)),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

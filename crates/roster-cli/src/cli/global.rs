use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
    Raw,
}

impl OutputFormat {
    /// Parse a configured format name, falling back to JSON.
    #[must_use]
    pub fn from_config(name: &str) -> Self {
        <Self as ValueEnum>::from_str(name, true).unwrap_or_default()
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
}

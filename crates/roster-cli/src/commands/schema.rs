use anyhow::bail;
use roster_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `roster schema [name]`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let Some(name) = args.name.as_deref() else {
        return output(&registry.list(), flags.format);
    };
    match registry.get(name) {
        Some(schema) => output(schema, flags.format),
        None => bail!(
            "unknown schema '{name}' (available: {})",
            registry.list().join(", ")
        ),
    }
}

use anyhow::Context;
use bp_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::commands::shared::parse::parse_kind;
use crate::output::output;

/// Handle `bp schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = parse_kind(&args.kind)?;
    let registry = SchemaRegistry::new();
    let schema = registry
        .for_kind(kind)
        .with_context(|| format!("no schema registered for {kind}"))?;
    output(schema, flags.format)
}

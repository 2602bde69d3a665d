use crate::cli::GlobalFlags;
use crate::cli::root_commands::EntityRefArgs;
use crate::commands::shared::parse::parse_kind;
use crate::context::AppContext;
use crate::output::output;

/// Handle `bp dependencies`.
pub fn handle_dependencies(
    args: &EntityRefArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let kind = parse_kind(&args.kind)?;
    let dependencies = ctx.store.dependencies_of(kind, &args.id)?;
    output(&dependencies, flags.format)
}

/// Handle `bp dependents`.
pub fn handle_dependents(
    args: &EntityRefArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let kind = parse_kind(&args.kind)?;
    let dependents = ctx.store.dependents_of(kind, &args.id)?;
    output(&dependents, flags.format)
}

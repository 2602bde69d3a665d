use crate::cli::GlobalFlags;
use crate::cli::root_commands::EntityRefArgs;
use crate::commands::shared::parse::parse_kind;
use crate::context::AppContext;
use crate::output::output;

/// Handle `bp get`.
pub fn run(args: &EntityRefArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = parse_kind(&args.kind)?;
    let entity = ctx.store.get(kind, &args.id)?;
    output(entity, flags.format)
}

use crate::cli::GlobalFlags;
use crate::cli::root_commands::UpdateArgs;
use crate::commands::shared::input::read_document;
use crate::commands::shared::parse::parse_kind;
use crate::context::AppContext;
use crate::output::output;

/// Handle `bp update`.
pub fn run(
    args: &UpdateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let kind = parse_kind(&args.kind)?;
    let patch = read_document(&args.patch)?;
    let entity = ctx.store.update(kind, &args.id, &patch)?;
    output(&entity, flags.format)
}

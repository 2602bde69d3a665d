use crate::cli::GlobalFlags;
use crate::cli::root_commands::CreateArgs;
use crate::commands::shared::input::read_document;
use crate::commands::shared::parse::parse_kind;
use crate::context::AppContext;
use crate::output::output;

/// Handle `bp create`.
pub fn run(
    args: &CreateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let kind = parse_kind(&args.kind)?;
    let document = read_document(&args.document)?;
    let entity = ctx.store.create(kind, &document)?;
    output(&entity, flags.format)
}

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LinkArgs;
use crate::commands::shared::parse::{parse_kind, parse_relation};
use crate::context::AppContext;
use crate::output::output;

/// Handle `bp link`.
pub fn handle_link(args: &LinkArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let from_kind = parse_kind(&args.from_kind)?;
    let to_kind = parse_kind(&args.to_kind)?;
    let relation = parse_relation(&args.relation)?;

    let result = ctx
        .store
        .link(from_kind, &args.from_id, to_kind, &args.to_id, relation)?;
    output(&result, flags.format)
}

/// Handle `bp unlink`.
pub fn handle_unlink(
    args: &LinkArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let from_kind = parse_kind(&args.from_kind)?;
    let to_kind = parse_kind(&args.to_kind)?;
    let relation = parse_relation(&args.relation)?;

    let result = ctx
        .store
        .unlink(from_kind, &args.from_id, to_kind, &args.to_id, relation)?;
    output(&result, flags.format)
}

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OrphansArgs;
use crate::commands::shared::parse::parse_kind;
use crate::context::AppContext;
use crate::output::output;

/// Handle `bp orphans`.
pub fn handle_orphans(args: &OrphansArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = args.kind.as_deref().map(parse_kind).transpose()?;
    output(&ctx.store.find_orphans(kind), flags.format)
}

/// Handle `bp gaps`.
pub fn handle_gaps(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.store.find_gaps(), flags.format)
}

/// Handle `bp coverage`.
pub fn handle_coverage(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.store.coverage_report(), flags.format)
}

/// Handle `bp test-coverage`.
pub fn handle_test_coverage(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.store.test_coverage(), flags.format)
}

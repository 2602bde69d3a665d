use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_kind;
use crate::context::AppContext;
use crate::output::output;

/// Handle `bp list`.
pub fn run(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = parse_kind(&args.kind)?;
    let limit = effective_limit(args.limit, ctx.config.general.default_limit);

    let mut summaries = ctx.store.list(kind, |_| true);
    summaries.truncate(limit);
    output(&summaries, flags.format)
}

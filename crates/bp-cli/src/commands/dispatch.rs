use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Create(args) => commands::entity::create::run(&args, ctx, flags),
        Commands::Update(args) => commands::entity::update::run(&args, ctx, flags),
        Commands::Delete(args) => commands::entity::delete::run(&args, ctx, flags),
        Commands::Get(args) => commands::entity::get::run(&args, ctx, flags),
        Commands::List(args) => commands::entity::list::run(&args, ctx, flags),
        Commands::Link(args) => commands::link::handle_link(&args, ctx, flags),
        Commands::Unlink(args) => commands::link::handle_unlink(&args, ctx, flags),
        Commands::Dependencies(args) => commands::graph::handle_dependencies(&args, ctx, flags),
        Commands::Dependents(args) => commands::graph::handle_dependents(&args, ctx, flags),
        Commands::Orphans(args) => commands::analytics::handle_orphans(&args, ctx, flags),
        Commands::Gaps => commands::analytics::handle_gaps(ctx, flags),
        Commands::Coverage => commands::analytics::handle_coverage(ctx, flags),
        Commands::TestCoverage => commands::analytics::handle_test_coverage(ctx, flags),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}

use std::fmt::Write as _;

use bp_core::responses::Dependent;
use bp_store::StoreError;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DeleteArgs;
use crate::commands::shared::parse::parse_kind;
use crate::context::AppContext;
use crate::output::output;

/// Handle `bp delete`.
pub fn run(
    args: &DeleteArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let kind = parse_kind(&args.kind)?;
    match ctx.store.delete(kind, &args.id, args.force) {
        Ok(result) => output(&result, flags.format),
        Err(StoreError::HasDependents { dependents }) => {
            anyhow::bail!("{}", describe_dependents(&dependents))
        }
        Err(error) => Err(error.into()),
    }
}

fn describe_dependents(dependents: &[Dependent]) -> String {
    let mut message = format!(
        "{} entities still reference this entity (use --force to scrub them and remove pinning test results):",
        dependents.len()
    );
    for dependent in dependents {
        let _ = write!(
            message,
            "\n  {} '{}' via {}",
            dependent.kind, dependent.id, dependent.field
        );
    }
    message
}

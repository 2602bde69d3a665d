use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create an entity from JSON (inline or `@path`).
    Create(CreateArgs),
    /// Merge a JSON patch into an entity.
    Update(UpdateArgs),
    /// Delete an entity.
    Delete(DeleteArgs),
    /// Link two entities through a relationship.
    Link(LinkArgs),
    /// Remove a relationship between two entities.
    Unlink(LinkArgs),
    /// Show one entity.
    Get(EntityRefArgs),
    /// List entities of a kind.
    List(ListArgs),
    /// Entities of target kinds that nothing references.
    Orphans(OrphansArgs),
    /// Structural completeness gaps.
    Gaps,
    /// Usage counts and workflow readiness.
    Coverage,
    /// Workflow x persona test coverage.
    TestCoverage,
    /// What an entity references.
    Dependencies(EntityRefArgs),
    /// What references an entity.
    Dependents(EntityRefArgs),
    /// Print the JSON Schema for a kind.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    /// Entity kind (workflow, capability, persona, component, token-set,
    /// view, interaction-pattern, test-result)
    pub kind: String,
    /// JSON document, or `@path` to read it from a file
    pub document: String,
}

#[derive(Clone, Debug, Args)]
pub struct UpdateArgs {
    pub kind: String,
    pub id: String,
    /// JSON patch, or `@path` to read it from a file
    pub patch: String,
}

#[derive(Clone, Debug, Args)]
pub struct DeleteArgs {
    pub kind: String,
    pub id: String,
    /// Delete even when other entities reference this one, scrubbing them
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Debug, Args)]
pub struct LinkArgs {
    pub from_kind: String,
    pub from_id: String,
    pub to_kind: String,
    pub to_id: String,
    /// requires, uses, suggests, implements, depends, styles, composes, applies
    pub relation: String,
}

#[derive(Clone, Debug, Args)]
pub struct EntityRefArgs {
    pub kind: String,
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    pub kind: String,
    /// Max results (defaults to `general.default_limit`)
    #[arg(short, long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct OrphansArgs {
    /// Only check this kind
    #[arg(long)]
    pub kind: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub kind: String,
}

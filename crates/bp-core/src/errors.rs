//! Cross-cutting error types for Blueprint.
//!
//! Errors that can originate from the catalog or entity conversions. Store
//! errors (`StoreError`) live in `bp-store` and wrap these via `From`.

use thiserror::Error;

use crate::enums::{EntityKind, Relation};

/// Errors raised by catalog lookups and entity conversions.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A `(from, to, relation)` triple is not in the relationship table.
    #[error("Unknown relationship: {from_kind} -[{relation}]-> {to_kind}")]
    UnknownRelationship {
        from_kind: EntityKind,
        to_kind: EntityKind,
        relation: Relation,
    },

    /// A JSON value could not be converted into a document of `kind`.
    #[error("Invalid {kind} document: {reason}")]
    InvalidDocument { kind: EntityKind, reason: String },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

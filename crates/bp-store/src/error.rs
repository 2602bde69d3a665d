//! Store error types for bp-store.

use std::path::PathBuf;

use bp_core::enums::{EntityKind, Relation};
use bp_core::errors::CoreError;
use bp_core::responses::Dependent;
use bp_schema::SchemaError;
use thiserror::Error;

/// Errors from store operations.
///
/// Every mutation either succeeds completely or returns one of these before
/// anything is written. Only `Io` can surface after a commit has started.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The structural validator rejected a field.
    #[error("Invalid field '{field}': {reason}")]
    StructuralInvalid { field: String, reason: String },

    /// Create with an ID that is already taken within its kind.
    #[error("{kind} '{id}' already exists")]
    AlreadyExists { kind: EntityKind, id: String },

    /// The operation targets an entity that does not exist.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: EntityKind, id: String },

    /// A reference names an entity that does not exist.
    #[error("Field '{field}' references missing {referenced_kind} '{missing_id}'")]
    MissingReference {
        field: String,
        referenced_kind: EntityKind,
        missing_id: String,
    },

    /// A `(from, to, relation)` triple is not in the relationship table.
    #[error("Unknown relationship: {from_kind} -[{relation}]-> {to_kind}")]
    UnknownRelationship {
        from_kind: EntityKind,
        to_kind: EntityKind,
        relation: Relation,
    },

    /// A non-forced delete found entities still referencing the target.
    #[error("{} entities still reference this entity", dependents.len())]
    HasDependents { dependents: Vec<Dependent> },

    /// Reading or writing a document file failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::StructuralInvalid {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<CoreError> for StoreError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::UnknownRelationship {
                from_kind,
                to_kind,
                relation,
            } => Self::UnknownRelationship {
                from_kind,
                to_kind,
                relation,
            },
            CoreError::InvalidDocument { reason, .. } => Self::invalid("document", reason),
            CoreError::Other(e) => Self::Other(e),
        }
    }
}

impl From<SchemaError> for StoreError {
    fn from(error: SchemaError) -> Self {
        match error {
            SchemaError::Invalid { field, reason } => Self::StructuralInvalid { field, reason },
            other @ (SchemaError::NotFound(_) | SchemaError::Generation(_)) => {
                Self::Other(anyhow::Error::new(other))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_invalid_maps_to_structural() {
        let err = StoreError::from(SchemaError::Invalid {
            field: "name".into(),
            reason: "must not be blank".into(),
        });
        assert!(matches!(err, StoreError::StructuralInvalid { ref field, .. } if field == "name"));
    }

    #[test]
    fn core_unknown_relationship_keeps_triple() {
        let err = StoreError::from(CoreError::UnknownRelationship {
            from_kind: EntityKind::Persona,
            to_kind: EntityKind::View,
            relation: Relation::Uses,
        });
        assert_eq!(
            err.to_string(),
            "Unknown relationship: persona -[uses]-> view"
        );
    }
}

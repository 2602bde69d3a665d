//! Static entity catalog: reference fields and the relationship table.
//!
//! Every relationship is a pair of ID-list fields: a forward field on the
//! source kind and a reverse field on the target kind. Callers set forward
//! fields; the store alone maintains reverse fields.
//!
//! ```text
//! requires    Workflow  → Capability          requires_capabilities   ↔ used_by_workflows
//! uses        Workflow  → Persona             personas                ↔ used_in_workflows
//! suggests    Workflow  → Component           suggested_components    ↔ suggested_by_workflows
//! implements  Component → Capability          implements_capabilities ↔ implemented_by_components
//! depends     Component → Component           depends_on              ↔ dependents
//! styles      Component → TokenSet            token_sets              ↔ used_by_components
//! composes    View      → Component           components              ↔ used_in_views
//! applies     View      → InteractionPattern  interaction_patterns    ↔ used_in_views
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

use crate::enums::{EntityKind, Relation};
use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// RefField
// ---------------------------------------------------------------------------

/// Every reference-list field in the catalog, forward and reverse.
///
/// Two reverse fields share the on-disk name `used_in_views` (on Component and
/// on `InteractionPattern`), so variants are named by owner where needed.
/// Serializes as the document field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RefField {
    // Forward
    RequiresCapabilities,
    Personas,
    SuggestedComponents,
    ImplementsCapabilities,
    DependsOn,
    TokenSets,
    ViewComponents,
    InteractionPatterns,
    // Reverse
    UsedByWorkflows,
    ImplementedByComponents,
    UsedInWorkflows,
    SuggestedByWorkflows,
    Dependents,
    UsedByComponents,
    ComponentUsedInViews,
    PatternUsedInViews,
}

impl RefField {
    /// Field name as it appears in the stored document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RequiresCapabilities => "requires_capabilities",
            Self::Personas => "personas",
            Self::SuggestedComponents => "suggested_components",
            Self::ImplementsCapabilities => "implements_capabilities",
            Self::DependsOn => "depends_on",
            Self::TokenSets => "token_sets",
            Self::ViewComponents => "components",
            Self::InteractionPatterns => "interaction_patterns",
            Self::UsedByWorkflows => "used_by_workflows",
            Self::ImplementedByComponents => "implemented_by_components",
            Self::UsedInWorkflows => "used_in_workflows",
            Self::SuggestedByWorkflows => "suggested_by_workflows",
            Self::Dependents => "dependents",
            Self::UsedByComponents => "used_by_components",
            Self::ComponentUsedInViews | Self::PatternUsedInViews => "used_in_views",
        }
    }

    /// The kind whose documents carry this field.
    #[must_use]
    pub const fn owner(self) -> EntityKind {
        relation_spec(relation_for_field(self)).side_owner(self.is_reverse())
    }

    /// The kind of entity the IDs in this field name.
    #[must_use]
    pub const fn target(self) -> EntityKind {
        relation_spec(relation_for_field(self)).side_owner(!self.is_reverse())
    }

    /// Whether the store (not the caller) maintains this field.
    #[must_use]
    pub const fn is_reverse(self) -> bool {
        matches!(
            self,
            Self::UsedByWorkflows
                | Self::ImplementedByComponents
                | Self::UsedInWorkflows
                | Self::SuggestedByWorkflows
                | Self::Dependents
                | Self::UsedByComponents
                | Self::ComponentUsedInViews
                | Self::PatternUsedInViews
        )
    }

    /// The field on the other side of the same relationship.
    #[must_use]
    pub const fn counterpart(self) -> Self {
        let spec = relation_spec(relation_for_field(self));
        if self.is_reverse() {
            spec.forward
        } else {
            spec.reverse
        }
    }
}

impl fmt::Display for RefField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RefField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PinnedField
// ---------------------------------------------------------------------------

/// Single-ID reference fields. They are checked for existence but have no
/// reverse side, so a `TestResult` cannot outlive what it pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PinnedField {
    TestedWorkflow,
    TestedPersona,
}

impl PinnedField {
    pub const ALL: [Self; 2] = [Self::TestedWorkflow, Self::TestedPersona];

    /// Field name as it appears in the stored document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TestedWorkflow => "workflow_id",
            Self::TestedPersona => "persona_id",
        }
    }

    /// Kind carrying the field.
    #[must_use]
    pub const fn owner(self) -> EntityKind {
        EntityKind::TestResult
    }

    /// Kind the ID names.
    #[must_use]
    pub const fn target(self) -> EntityKind {
        match self {
            Self::TestedWorkflow => EntityKind::Workflow,
            Self::TestedPersona => EntityKind::Persona,
        }
    }
}

impl fmt::Display for PinnedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PinnedField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Relationship table
// ---------------------------------------------------------------------------

/// One row of the relationship table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelationSpec {
    pub relation: Relation,
    pub from: EntityKind,
    pub forward: RefField,
    pub to: EntityKind,
    pub reverse: RefField,
}

impl RelationSpec {
    const fn side_owner(self, reverse: bool) -> EntityKind {
        if reverse { self.to } else { self.from }
    }
}

/// The closed relationship table.
pub const RELATIONSHIPS: [RelationSpec; 8] = [
    relation_spec(Relation::Requires),
    relation_spec(Relation::Uses),
    relation_spec(Relation::Suggests),
    relation_spec(Relation::Implements),
    relation_spec(Relation::Depends),
    relation_spec(Relation::Styles),
    relation_spec(Relation::Composes),
    relation_spec(Relation::Applies),
];

/// The table row for a relation.
#[must_use]
pub const fn relation_spec(relation: Relation) -> RelationSpec {
    use EntityKind as K;
    use RefField as F;

    let (from, forward, to, reverse) = match relation {
        Relation::Requires => (K::Workflow, F::RequiresCapabilities, K::Capability, F::UsedByWorkflows),
        Relation::Uses => (K::Workflow, F::Personas, K::Persona, F::UsedInWorkflows),
        Relation::Suggests => (K::Workflow, F::SuggestedComponents, K::Component, F::SuggestedByWorkflows),
        Relation::Implements => (
            K::Component,
            F::ImplementsCapabilities,
            K::Capability,
            F::ImplementedByComponents,
        ),
        Relation::Depends => (K::Component, F::DependsOn, K::Component, F::Dependents),
        Relation::Styles => (K::Component, F::TokenSets, K::TokenSet, F::UsedByComponents),
        Relation::Composes => (K::View, F::ViewComponents, K::Component, F::ComponentUsedInViews),
        Relation::Applies => (
            K::View,
            F::InteractionPatterns,
            K::InteractionPattern,
            F::PatternUsedInViews,
        ),
    };
    RelationSpec {
        relation,
        from,
        forward,
        to,
        reverse,
    }
}

/// The relation a reference field belongs to.
#[must_use]
pub const fn relation_for_field(field: RefField) -> Relation {
    match field {
        RefField::RequiresCapabilities | RefField::UsedByWorkflows => Relation::Requires,
        RefField::Personas | RefField::UsedInWorkflows => Relation::Uses,
        RefField::SuggestedComponents | RefField::SuggestedByWorkflows => Relation::Suggests,
        RefField::ImplementsCapabilities | RefField::ImplementedByComponents => Relation::Implements,
        RefField::DependsOn | RefField::Dependents => Relation::Depends,
        RefField::TokenSets | RefField::UsedByComponents => Relation::Styles,
        RefField::ViewComponents | RefField::ComponentUsedInViews => Relation::Composes,
        RefField::InteractionPatterns | RefField::PatternUsedInViews => Relation::Applies,
    }
}

/// Resolve a `(from, to, relation)` triple to its forward/reverse field pair.
///
/// # Errors
///
/// Returns `CoreError::UnknownRelationship` if the triple is not in the table.
pub fn relationship_mapping(
    from: EntityKind,
    to: EntityKind,
    relation: Relation,
) -> Result<RelationSpec, CoreError> {
    let spec = relation_spec(relation);
    if spec.from == from && spec.to == to {
        Ok(spec)
    } else {
        Err(CoreError::UnknownRelationship {
            from_kind: from,
            to_kind: to,
            relation,
        })
    }
}

// ---------------------------------------------------------------------------
// Per-kind field sets
// ---------------------------------------------------------------------------

/// The reference fields declared on one entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindFields {
    pub forward: &'static [RefField],
    pub reverse: &'static [RefField],
}

impl KindFields {
    /// Forward then reverse fields.
    pub fn all(self) -> impl Iterator<Item = RefField> {
        self.forward.iter().chain(self.reverse.iter()).copied()
    }
}

/// Reference fields for a kind.
#[must_use]
pub const fn fields_for(kind: EntityKind) -> KindFields {
    use RefField as F;

    match kind {
        EntityKind::Workflow => KindFields {
            forward: &[F::RequiresCapabilities, F::Personas, F::SuggestedComponents],
            reverse: &[],
        },
        EntityKind::Capability => KindFields {
            forward: &[],
            reverse: &[F::UsedByWorkflows, F::ImplementedByComponents],
        },
        EntityKind::Persona => KindFields {
            forward: &[],
            reverse: &[F::UsedInWorkflows],
        },
        EntityKind::Component => KindFields {
            forward: &[F::ImplementsCapabilities, F::DependsOn, F::TokenSets],
            reverse: &[F::SuggestedByWorkflows, F::Dependents, F::ComponentUsedInViews],
        },
        EntityKind::TokenSet => KindFields {
            forward: &[],
            reverse: &[F::UsedByComponents],
        },
        EntityKind::View => KindFields {
            forward: &[F::ViewComponents, F::InteractionPatterns],
            reverse: &[],
        },
        EntityKind::InteractionPattern => KindFields {
            forward: &[],
            reverse: &[F::PatternUsedInViews],
        },
        EntityKind::TestResult => KindFields {
            forward: &[],
            reverse: &[],
        },
    }
}

/// Whether entities of this kind are normally the target of a relationship.
///
/// Kinds without reverse fields are roots and never count as orphans.
#[must_use]
pub const fn has_reverse_fields(kind: EntityKind) -> bool {
    !fields_for(kind).reverse.is_empty()
}

/// Look up a reference field on a kind by its document name.
#[must_use]
pub fn field_by_name(kind: EntityKind, name: &str) -> Option<RefField> {
    fields_for(kind).all().find(|f| f.as_str() == name)
}

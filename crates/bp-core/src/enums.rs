//! Entity kinds, relations, status enums, and journal operations for Blueprint.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `as_str()` returns the same string serde produces, so values read from disk,
//! the CLI, and the journal all agree.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// The closed set of document kinds the store persists.
///
/// Each kind lives in its own directory under the store root (see
/// [`EntityKind::directory`]), one file per entity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Workflow,
    Capability,
    Persona,
    Component,
    TokenSet,
    View,
    InteractionPattern,
    TestResult,
}

impl EntityKind {
    /// Every kind, in load order.
    pub const ALL: [Self; 8] = [
        Self::Workflow,
        Self::Capability,
        Self::Persona,
        Self::Component,
        Self::TokenSet,
        Self::View,
        Self::InteractionPattern,
        Self::TestResult,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Workflow => "workflow",
            Self::Capability => "capability",
            Self::Persona => "persona",
            Self::Component => "component",
            Self::TokenSet => "token_set",
            Self::View => "view",
            Self::InteractionPattern => "interaction_pattern",
            Self::TestResult => "test_result",
        }
    }

    /// Directory name (relative to the store root) holding this kind's files.
    ///
    /// Exhaustive match, so a new kind must name its directory.
    #[must_use]
    pub const fn directory(self) -> &'static str {
        match self {
            Self::Workflow => "workflows",
            Self::Capability => "capabilities",
            Self::Persona => "personas",
            Self::Component => "components",
            Self::TokenSet => "token_sets",
            Self::View => "views",
            Self::InteractionPattern => "interaction_patterns",
            Self::TestResult => "test_results",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Relation
// ---------------------------------------------------------------------------

/// Named edge type between two entity kinds.
///
/// Each relation maps to exactly one forward field and one reverse field; the
/// mapping lives in [`crate::catalog::RELATIONSHIPS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Requires,
    Uses,
    Suggests,
    Implements,
    Depends,
    Styles,
    Composes,
    Applies,
}

impl Relation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Requires => "requires",
            Self::Uses => "uses",
            Self::Suggests => "suggests",
            Self::Implements => "implements",
            Self::Depends => "depends",
            Self::Styles => "styles",
            Self::Composes => "composes",
            Self::Applies => "applies",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WorkflowStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a workflow definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    #[default]
    Draft,
    Active,
    Deprecated,
}

impl WorkflowStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Deprecated => "deprecated",
        }
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CapabilityStatus
// ---------------------------------------------------------------------------

/// Delivery status of a capability.
///
/// Only `Implemented` counts towards a workflow's `capabilities_ready` flag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityStatus {
    #[default]
    Planned,
    InProgress,
    Implemented,
    Deprecated,
}

impl CapabilityStatus {
    pub const ALL: [Self; 4] = [
        Self::Planned,
        Self::InProgress,
        Self::Implemented,
        Self::Deprecated,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in_progress",
            Self::Implemented => "implemented",
            Self::Deprecated => "deprecated",
        }
    }
}

impl fmt::Display for CapabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ComponentStatus
// ---------------------------------------------------------------------------

/// Maturity of a UI component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ComponentStatus {
    #[default]
    Planned,
    InProgress,
    Stable,
    Deprecated,
}

impl ComponentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in_progress",
            Self::Stable => "stable",
            Self::Deprecated => "deprecated",
        }
    }
}

impl fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ComponentType
// ---------------------------------------------------------------------------

/// Atomic-design tier of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    #[default]
    Atom,
    Molecule,
    Organism,
    Template,
}

impl ComponentType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Atom => "atom",
            Self::Molecule => "molecule",
            Self::Organism => "organism",
            Self::Template => "template",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TestOutcome
// ---------------------------------------------------------------------------

/// Result of running a workflow as a persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TestOutcome {
    Passed,
    Failed,
    Partial,
}

impl TestOutcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Partial => "partial",
        }
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// JournalOp
// ---------------------------------------------------------------------------

/// Kind of mutation recorded in the change journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum JournalOp {
    Create,
    Update,
    Delete,
    Link,
    Unlink,
}

impl JournalOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Link => "link",
            Self::Unlink => "unlink",
        }
    }
}

impl fmt::Display for JournalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_kind_as_str_matches_serde() {
        for kind in EntityKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.as_str().to_string()));
        }
    }

    #[test]
    fn entity_kind_directories_are_unique() {
        let mut dirs: Vec<&str> = EntityKind::ALL.iter().map(|k| k.directory()).collect();
        dirs.sort_unstable();
        dirs.dedup();
        assert_eq!(dirs.len(), EntityKind::ALL.len());
    }

    #[test]
    fn relation_roundtrip() {
        for relation in [
            Relation::Requires,
            Relation::Uses,
            Relation::Suggests,
            Relation::Implements,
            Relation::Depends,
            Relation::Styles,
            Relation::Composes,
            Relation::Applies,
        ] {
            let json = serde_json::to_string(&relation).unwrap();
            let recovered: Relation = serde_json::from_str(&json).unwrap();
            assert_eq!(recovered, relation);
            assert_eq!(json, format!("\"{}\"", relation.as_str()));
        }
    }

    #[test]
    fn capability_status_in_progress_is_snake_case() {
        let json = serde_json::to_string(&CapabilityStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn journal_op_display() {
        assert_eq!(JournalOp::Unlink.to_string(), "unlink");
    }
}

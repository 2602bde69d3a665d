//! Response and report types returned by store queries and analytics.
//!
//! These structs define the JSON shape of `bp get`, `bp list`,
//! `bp dependents`, `bp orphans`, `bp gaps`, `bp coverage`, and
//! `bp test-coverage`.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::{PinnedField, RefField};
use crate::enums::{CapabilityStatus, EntityKind, Relation, TestOutcome};

/// Listing view of an entity.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EntitySummary {
    pub kind: EntityKind,
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// The field through which a dependent names the inspected entity.
/// Serializes as the bare document field name.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(untagged)]
pub enum DependentField {
    /// A mirrored reference list, scrubbed on forced delete.
    Ref(RefField),
    /// A single-ID pin; a forced delete removes the pinning entity.
    Pinned(PinnedField),
}

impl DependentField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ref(field) => field.as_str(),
            Self::Pinned(field) => field.as_str(),
        }
    }
}

impl From<RefField> for DependentField {
    fn from(field: RefField) -> Self {
        Self::Ref(field)
    }
}

impl From<PinnedField> for DependentField {
    fn from(field: PinnedField) -> Self {
        Self::Pinned(field)
    }
}

impl fmt::Display for DependentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Another entity whose reference field names the entity being inspected.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Dependent {
    pub kind: EntityKind,
    pub id: String,
    pub field: DependentField,
}

/// An entity the inspected entity references, through a forward field or a
/// pinned reference.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Dependency {
    pub field: String,
    pub kind: EntityKind,
    pub id: String,
}

/// Whether a `link`/`unlink` changed anything. Both are success.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LinkChange {
    Applied,
    Unchanged,
}

/// Response from `link` and `unlink`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LinkResult {
    pub relation: Relation,
    pub from_kind: EntityKind,
    pub from_id: String,
    pub to_kind: EntityKind,
    pub to_id: String,
    pub change: LinkChange,
}

/// Response from `delete`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DeleteResult {
    pub kind: EntityKind,
    pub id: String,
    /// Dependents that were scrubbed of the deleted ID (empty for a plain delete).
    pub scrubbed: Vec<Dependent>,
    /// Test results deleted along with the entity they pinned.
    pub removed_test_results: Vec<String>,
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

/// Entities of target kinds that nothing references.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrphanReport {
    pub checked_kinds: Vec<EntityKind>,
    pub orphans: Vec<EntitySummary>,
}

/// A category whose population is below the low-coverage threshold.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryGap {
    pub kind: EntityKind,
    pub category: String,
    pub count: usize,
}

/// Structural completeness deficiencies across the store.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GapReport {
    pub workflows_without_capabilities: Vec<String>,
    pub workflows_without_personas: Vec<String>,
    pub capabilities_without_components: Vec<String>,
    pub low_coverage_categories: Vec<CategoryGap>,
    pub low_coverage_threshold: usize,
    pub total_gaps: usize,
}

/// How many entities reference one entity through a given relationship.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UsageCount {
    pub id: String,
    pub name: String,
    pub count: usize,
}

/// Readiness of one workflow's required capabilities.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkflowReadiness {
    pub id: String,
    pub name: String,
    pub required: usize,
    pub implemented: usize,
    pub capabilities_ready: bool,
}

/// Store-wide counts.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CoverageSummary {
    pub totals: BTreeMap<EntityKind, usize>,
    pub capability_status: BTreeMap<CapabilityStatus, usize>,
}

/// Usage-count report over the whole graph.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CoverageReport {
    /// Workflows requiring each capability, most used first.
    pub capability_usage: Vec<UsageCount>,
    /// Workflows using each persona, most used first.
    pub persona_usage: Vec<UsageCount>,
    /// Capabilities implemented by each component, most first.
    pub component_implementations: Vec<UsageCount>,
    pub workflows: Vec<WorkflowReadiness>,
    pub summary: CoverageSummary,
}

/// Test history for one (workflow, persona) pair.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CombinationCoverage {
    pub workflow_id: String,
    pub persona_id: String,
    pub tested: bool,
    pub total_tests: usize,
    pub simulated_tests: usize,
    pub real_tests: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_tested_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_outcome: Option<TestOutcome>,
}

/// Workflow × persona test coverage.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TestCoverageReport {
    pub possible_combinations: usize,
    pub tested_combinations: usize,
    pub coverage_percentage: f64,
    pub combinations: Vec<CombinationCoverage>,
    /// Test results naming a workflow or persona that no longer exists.
    pub stale_results: Vec<String>,
}

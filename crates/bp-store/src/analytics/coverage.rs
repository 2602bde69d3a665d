//! Usage-count coverage report.

use std::collections::BTreeMap;

use bp_core::catalog::RefField;
use bp_core::entities::Entity;
use bp_core::enums::{CapabilityStatus, EntityKind};
use bp_core::responses::{CoverageReport, CoverageSummary, UsageCount, WorkflowReadiness};

use crate::index::{EntityLookup, Index};

#[must_use]
pub fn coverage_report(index: &Index) -> CoverageReport {
    CoverageReport {
        capability_usage: usage(index, EntityKind::Capability, EntityKind::Workflow, RefField::RequiresCapabilities),
        persona_usage: usage(index, EntityKind::Persona, EntityKind::Workflow, RefField::Personas),
        component_implementations: ranked(
            index
                .iter_kind(EntityKind::Component)
                .map(|c| count_of(c, c.refs(RefField::ImplementsCapabilities).len()))
                .collect(),
        ),
        workflows: index
            .iter_kind(EntityKind::Workflow)
            .map(|wf| readiness(index, wf))
            .collect(),
        summary: summary(index),
    }
}

/// For each `target` entity, how many `source` entities name it in `field`.
fn usage(index: &Index, target: EntityKind, source: EntityKind, field: RefField) -> Vec<UsageCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for entity in index.iter_kind(source) {
        for id in entity.refs(field) {
            *counts.entry(id.as_str()).or_insert(0) += 1;
        }
    }

    ranked(
        index
            .iter_kind(target)
            .map(|e| count_of(e, counts.get(e.id()).copied().unwrap_or(0)))
            .collect(),
    )
}

fn count_of(entity: &Entity, count: usize) -> UsageCount {
    UsageCount {
        id: entity.id().to_string(),
        name: entity.name().to_string(),
        count,
    }
}

/// Most used first, ties by ID.
fn ranked(mut counts: Vec<UsageCount>) -> Vec<UsageCount> {
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.id.cmp(&b.id)));
    counts
}

fn readiness(index: &Index, workflow: &Entity) -> WorkflowReadiness {
    let required = workflow.refs(RefField::RequiresCapabilities);
    let implemented = required
        .iter()
        .filter(|id| {
            matches!(
                index.get(EntityKind::Capability, id),
                Some(Entity::Capability(cap)) if cap.status == CapabilityStatus::Implemented
            )
        })
        .count();

    WorkflowReadiness {
        id: workflow.id().to_string(),
        name: workflow.name().to_string(),
        required: required.len(),
        implemented,
        capabilities_ready: implemented == required.len(),
    }
}

fn summary(index: &Index) -> CoverageSummary {
    let totals = EntityKind::ALL
        .into_iter()
        .map(|kind| (kind, index.count(kind)))
        .collect();

    let mut capability_status: BTreeMap<CapabilityStatus, usize> =
        CapabilityStatus::ALL.into_iter().map(|s| (s, 0)).collect();
    for entity in index.iter_kind(EntityKind::Capability) {
        if let Entity::Capability(cap) = entity {
            *capability_status.entry(cap.status).or_insert(0) += 1;
        }
    }

    CoverageSummary {
        totals,
        capability_status,
    }
}

//! Structural completeness gaps.

use std::collections::BTreeMap;

use bp_core::catalog::RefField;
use bp_core::entities::Entity;
use bp_core::enums::EntityKind;
use bp_core::responses::{CategoryGap, GapReport};

use crate::index::Index;

/// Kinds whose `category` populations are checked against the threshold.
const CATEGORISED_KINDS: [EntityKind; 2] = [EntityKind::Workflow, EntityKind::Capability];

#[must_use]
pub fn find_gaps(index: &Index, low_coverage_threshold: usize) -> GapReport {
    let workflows_without_capabilities = ids_with_empty(index, EntityKind::Workflow, RefField::RequiresCapabilities);
    let workflows_without_personas = ids_with_empty(index, EntityKind::Workflow, RefField::Personas);
    let capabilities_without_components =
        ids_with_empty(index, EntityKind::Capability, RefField::ImplementedByComponents);

    let low_coverage_categories: Vec<CategoryGap> = CATEGORISED_KINDS
        .iter()
        .flat_map(|&kind| {
            category_counts(index, kind)
                .into_iter()
                .filter(|(_, count)| *count < low_coverage_threshold)
                .map(move |(category, count)| CategoryGap {
                    kind,
                    category,
                    count,
                })
        })
        .collect();

    let total_gaps = workflows_without_capabilities.len()
        + workflows_without_personas.len()
        + capabilities_without_components.len()
        + low_coverage_categories.len();

    GapReport {
        workflows_without_capabilities,
        workflows_without_personas,
        capabilities_without_components,
        low_coverage_categories,
        low_coverage_threshold,
        total_gaps,
    }
}

fn ids_with_empty(index: &Index, kind: EntityKind, field: RefField) -> Vec<String> {
    index
        .iter_kind(kind)
        .filter(|e| e.refs(field).is_empty())
        .map(|e| e.id().to_string())
        .collect()
}

/// Entity count per category. Uncategorised entities are not counted.
fn category_counts(index: &Index, kind: EntityKind) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for category in index.iter_kind(kind).filter_map(Entity::category) {
        *counts.entry(category.to_string()).or_insert(0) += 1;
    }
    counts
}

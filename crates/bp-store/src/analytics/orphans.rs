//! Orphan detection.

use bp_core::catalog::{fields_for, has_reverse_fields};
use bp_core::entities::Entity;
use bp_core::enums::EntityKind;
use bp_core::responses::OrphanReport;

use crate::index::Index;

/// An entity is orphaned when every one of its reverse fields is empty.
///
/// Kinds without reverse fields (workflows, views, test results) are roots and
/// are never checked, even when asked for explicitly.
#[must_use]
pub fn find_orphans(index: &Index, kind: Option<EntityKind>) -> OrphanReport {
    let checked_kinds: Vec<EntityKind> = match kind {
        Some(kind) => vec![kind],
        None => EntityKind::ALL.to_vec(),
    }
    .into_iter()
    .filter(|k| has_reverse_fields(*k))
    .collect();

    let orphans = checked_kinds
        .iter()
        .flat_map(|&k| index.iter_kind(k))
        .filter(|e| is_orphan(e))
        .map(Entity::summary)
        .collect();

    OrphanReport {
        checked_kinds,
        orphans,
    }
}

fn is_orphan(entity: &Entity) -> bool {
    fields_for(entity.kind())
        .reverse
        .iter()
        .all(|&field| entity.refs(field).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bp_core::entities::{Persona, View};
    use pretty_assertions::assert_eq;

    #[test]
    fn roots_are_never_checked() {
        let mut index = Index::default();
        index.upsert(Entity::from(View {
            id: "board".into(),
            name: "Board".into(),
            description: None,
            route: None,
            components: vec![],
            interaction_patterns: vec![],
        }));

        let report = find_orphans(&index, Some(EntityKind::View));
        assert!(report.checked_kinds.is_empty());
        assert!(report.orphans.is_empty());
    }

    #[test]
    fn unreferenced_persona_is_orphan() {
        let mut index = Index::default();
        for (id, used) in [("admin", vec!["W1".to_string()]), ("guest", vec![])] {
            index.upsert(Entity::from(Persona {
                id: id.into(),
                name: id.into(),
                description: None,
                role: None,
                goals: vec![],
                used_in_workflows: used,
            }));
        }

        let report = find_orphans(&index, None);
        let ids: Vec<&str> = report.orphans.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["guest"]);
        assert_eq!(
            report.checked_kinds,
            vec![
                EntityKind::Capability,
                EntityKind::Persona,
                EntityKind::Component,
                EntityKind::TokenSet,
                EntityKind::InteractionPattern,
            ]
        );
    }
}

//! Graph invariants checked end to end against a real store directory.

use bp_core::catalog::{RefField, fields_for};
use bp_core::enums::{EntityKind, Relation};
use bp_core::responses::{Dependent, LinkChange};
use bp_store::{Store, StoreError};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

fn open() -> (TempDir, Store) {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path()).unwrap();
    (dir, store)
}

/// Referential integrity and bidirectionality over the whole index.
fn assert_consistent(store: &Store) {
    for entity in store.index().iter() {
        for field in fields_for(entity.kind()).all() {
            for id in entity.refs(field) {
                let other = store.get(field.target(), id).unwrap_or_else(|_| {
                    panic!("{}/{} {field} names missing {id}", entity.kind(), entity.id())
                });
                assert!(
                    other.refs(field.counterpart()).iter().any(|back| back == entity.id()),
                    "{}/{} {field} -> {id} has no back-reference",
                    entity.kind(),
                    entity.id()
                );
            }
        }
        for pinned in entity.pinned_refs() {
            assert!(
                store.exists(pinned.kind, pinned.id),
                "{}/{} {} names missing {}",
                entity.kind(),
                entity.id(),
                pinned.field,
                pinned.id
            );
        }
    }
}

fn seed_cap_and_workflow(store: &mut Store) {
    store
        .create(EntityKind::Capability, &json!({"id": "cap-a", "name": "Search"}))
        .unwrap();
    store
        .create(
            EntityKind::Workflow,
            &json!({"id": "W1", "name": "Find things", "requires_capabilities": ["cap-a"]}),
        )
        .unwrap();
}

#[test]
fn create_fills_reverse_field() {
    let (_dir, mut store) = open();
    seed_cap_and_workflow(&mut store);

    let cap = store.get(EntityKind::Capability, "cap-a").unwrap();
    assert_eq!(cap.refs(RefField::UsedByWorkflows), ["W1"]);
    assert_consistent(&store);
}

#[test]
fn link_twice_is_idempotent() {
    let (_dir, mut store) = open();
    store
        .create(EntityKind::Workflow, &json!({"id": "W1", "name": "Checkout"}))
        .unwrap();
    store
        .create(EntityKind::Component, &json!({"id": "comp-x", "name": "Button"}))
        .unwrap();

    let first = store
        .link(EntityKind::Workflow, "W1", EntityKind::Component, "comp-x", Relation::Suggests)
        .unwrap();
    let second = store
        .link(EntityKind::Workflow, "W1", EntityKind::Component, "comp-x", Relation::Suggests)
        .unwrap();
    assert_eq!(first.change, LinkChange::Applied);
    assert_eq!(second.change, LinkChange::Unchanged);

    let wf = store.get(EntityKind::Workflow, "W1").unwrap();
    assert_eq!(wf.refs(RefField::SuggestedComponents), ["comp-x"]);
    let comp = store.get(EntityKind::Component, "comp-x").unwrap();
    assert_eq!(comp.refs(RefField::SuggestedByWorkflows), ["W1"]);
    assert_consistent(&store);
}

#[test]
fn unforced_delete_is_non_destructive() {
    let (dir, mut store) = open();
    seed_cap_and_workflow(&mut store);
    let before = std::fs::read_to_string(dir.path().join("workflows/W1.json")).unwrap();

    let err = store.delete(EntityKind::Capability, "cap-a", false).unwrap_err();
    match err {
        StoreError::HasDependents { dependents } => assert_eq!(
            dependents,
            vec![Dependent {
                kind: EntityKind::Workflow,
                id: "W1".into(),
                field: RefField::RequiresCapabilities.into(),
            }]
        ),
        other => panic!("expected HasDependents, got {other:?}"),
    }

    assert!(store.exists(EntityKind::Capability, "cap-a"));
    assert!(dir.path().join("capabilities/cap-a.json").exists());
    let after = std::fs::read_to_string(dir.path().join("workflows/W1.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn forced_delete_scrubs_every_reference() {
    let (dir, mut store) = open();
    seed_cap_and_workflow(&mut store);
    store
        .create(
            EntityKind::Component,
            &json!({"id": "comp-x", "name": "Search box", "implements_capabilities": ["cap-a"]}),
        )
        .unwrap();

    let result = store.delete(EntityKind::Capability, "cap-a", true).unwrap();
    assert_eq!(result.scrubbed.len(), 2);

    assert!(!store.exists(EntityKind::Capability, "cap-a"));
    assert!(!dir.path().join("capabilities/cap-a.json").exists());
    let wf = store.get(EntityKind::Workflow, "W1").unwrap();
    assert!(wf.refs(RefField::RequiresCapabilities).is_empty());
    for entity in store.index().iter() {
        assert!(
            entity.all_refs().all(|(_, id)| id != "cap-a"),
            "{}/{} still names cap-a",
            entity.kind(),
            entity.id()
        );
    }
    assert_consistent(&store);

    // Disk agrees with the index.
    store.refresh().unwrap();
    assert!(
        store
            .get(EntityKind::Workflow, "W1")
            .unwrap()
            .refs(RefField::RequiresCapabilities)
            .is_empty()
    );
}

#[test]
fn forced_delete_of_tested_workflow_leaves_no_pin_behind() {
    let (dir, mut store) = open();
    store
        .create(EntityKind::Persona, &json!({"id": "admin", "name": "Admin"}))
        .unwrap();
    store
        .create(EntityKind::Workflow, &json!({"id": "W1", "name": "Checkout", "personas": ["admin"]}))
        .unwrap();
    store
        .create(
            EntityKind::TestResult,
            &json!({"id": "run-1", "workflow_id": "W1", "persona_id": "admin", "tested_at": "2026-02-01T10:00:00Z", "outcome": "passed"}),
        )
        .unwrap();

    let dependents = store.dependents_of(EntityKind::Workflow, "W1").unwrap();
    assert!(dependents.iter().any(|d| d.kind == EntityKind::TestResult && d.id == "run-1"));

    store.delete(EntityKind::Workflow, "W1", true).unwrap();

    let pinning: Vec<&str> = store
        .index()
        .iter()
        .filter(|e| e.pinned_refs().iter().any(|p| p.id == "W1"))
        .map(|e| e.id())
        .collect();
    assert!(pinning.is_empty(), "forced delete left W1 in {pinning:?}");
    assert!(!dir.path().join("test_results/run-1.json").exists());
    assert_consistent(&store);
}

#[test]
fn deleting_a_referencing_root_needs_force_too() {
    let (_dir, mut store) = open();
    seed_cap_and_workflow(&mut store);

    let err = store.delete(EntityKind::Workflow, "W1", false).unwrap_err();
    assert!(matches!(err, StoreError::HasDependents { .. }));

    store.delete(EntityKind::Workflow, "W1", true).unwrap();
    let cap = store.get(EntityKind::Capability, "cap-a").unwrap();
    assert!(cap.refs(RefField::UsedByWorkflows).is_empty());
    assert_consistent(&store);
}

#[test]
fn delete_without_dependents_needs_no_force() {
    let (_dir, mut store) = open();
    store
        .create(EntityKind::Persona, &json!({"id": "admin", "name": "Admin"}))
        .unwrap();
    let result = store.delete(EntityKind::Persona, "admin", false).unwrap();
    assert!(result.scrubbed.is_empty());
    assert!(!store.exists(EntityKind::Persona, "admin"));
}

#[test]
fn missing_reference_creates_nothing() {
    let (dir, mut store) = open();
    let err = store
        .create(
            EntityKind::Workflow,
            &json!({"id": "W1", "name": "Broken", "requires_capabilities": ["missing-cap"]}),
        )
        .unwrap_err();

    match err {
        StoreError::MissingReference {
            field,
            referenced_kind,
            missing_id,
        } => {
            assert_eq!(field, "requires_capabilities");
            assert_eq!(referenced_kind, EntityKind::Capability);
            assert_eq!(missing_id, "missing-cap");
        }
        other => panic!("expected MissingReference, got {other:?}"),
    }
    assert!(!store.exists(EntityKind::Workflow, "W1"));
    assert!(!dir.path().join("workflows/W1.json").exists());
}

#[test]
fn coverage_ranks_usage_and_orphans_follow() {
    let (_dir, mut store) = open();
    for id in ["cap-popular", "cap-unused"] {
        store
            .create(EntityKind::Capability, &json!({"id": id, "name": id}))
            .unwrap();
    }
    for id in ["W1", "W2"] {
        store
            .create(
                EntityKind::Workflow,
                &json!({"id": id, "name": id, "requires_capabilities": ["cap-popular"]}),
            )
            .unwrap();
    }

    let report = store.coverage_report();
    let usage: Vec<(&str, usize)> = report
        .capability_usage
        .iter()
        .map(|u| (u.id.as_str(), u.count))
        .collect();
    assert_eq!(usage, vec![("cap-popular", 2), ("cap-unused", 0)]);

    let orphans = store.find_orphans(None);
    let ids: Vec<&str> = orphans.orphans.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["cap-unused"]);
}

#[test]
fn save_and_reload_keep_relationship_fields() {
    let (dir, mut store) = open();
    seed_cap_and_workflow(&mut store);
    store
        .create(EntityKind::Persona, &json!({"id": "admin", "name": "Admin", "goals": ["ship"]}))
        .unwrap();
    store
        .link(EntityKind::Workflow, "W1", EntityKind::Persona, "admin", Relation::Uses)
        .unwrap();

    let reopened = Store::open(dir.path()).unwrap();
    for entity in store.index().iter() {
        let loaded = reopened.get(entity.kind(), entity.id()).unwrap();
        assert_eq!(loaded, entity);
    }
    assert_eq!(reopened.index().len(), store.index().len());
    assert_consistent(&reopened);
}

#[test]
fn unlink_removes_both_sides_and_is_repeatable() {
    let (_dir, mut store) = open();
    seed_cap_and_workflow(&mut store);

    let first = store
        .unlink(EntityKind::Workflow, "W1", EntityKind::Capability, "cap-a", Relation::Requires)
        .unwrap();
    let second = store
        .unlink(EntityKind::Workflow, "W1", EntityKind::Capability, "cap-a", Relation::Requires)
        .unwrap();
    assert_eq!(first.change, LinkChange::Applied);
    assert_eq!(second.change, LinkChange::Unchanged);

    assert!(
        store
            .get(EntityKind::Capability, "cap-a")
            .unwrap()
            .refs(RefField::UsedByWorkflows)
            .is_empty()
    );
    assert_consistent(&store);
}

#[test]
fn unknown_relationship_is_rejected() {
    let (_dir, mut store) = open();
    seed_cap_and_workflow(&mut store);
    let err = store
        .link(EntityKind::Capability, "cap-a", EntityKind::Workflow, "W1", Relation::Requires)
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::UnknownRelationship {
            from_kind: EntityKind::Capability,
            to_kind: EntityKind::Workflow,
            relation: Relation::Requires,
        }
    ));
}

#[test]
fn dependency_chain_stays_consistent() {
    let (_dir, mut store) = open();
    store
        .create(EntityKind::TokenSet, &json!({"id": "core", "name": "Core", "tokens": {"space-1": "4px"}}))
        .unwrap();
    store
        .create(EntityKind::Component, &json!({"id": "icon", "name": "Icon", "token_sets": ["core"]}))
        .unwrap();
    store
        .create(EntityKind::Component, &json!({"id": "button", "name": "Button", "depends_on": ["icon"]}))
        .unwrap();
    store
        .create(EntityKind::InteractionPattern, &json!({"id": "press", "name": "Press"}))
        .unwrap();
    store
        .create(
            EntityKind::View,
            &json!({"id": "home", "name": "Home", "components": ["button", "icon"], "interaction_patterns": ["press"]}),
        )
        .unwrap();

    let icon = store.get(EntityKind::Component, "icon").unwrap();
    assert_eq!(icon.refs(RefField::Dependents), ["button"]);
    assert_eq!(icon.refs(RefField::ComponentUsedInViews), ["home"]);
    let press = store.get(EntityKind::InteractionPattern, "press").unwrap();
    assert_eq!(press.refs(RefField::PatternUsedInViews), ["home"]);
    assert_consistent(&store);

    store.delete(EntityKind::Component, "icon", true).unwrap();
    assert_consistent(&store);
    assert!(
        store
            .get(EntityKind::TokenSet, "core")
            .unwrap()
            .refs(RefField::UsedByComponents)
            .is_empty()
    );
}

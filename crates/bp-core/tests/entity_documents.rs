//! Document shape tests: defaults, schema validation, and strictness.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use schemars::schema_for;
use serde_json::json;

use bp_core::entities::*;
use bp_core::enums::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

#[test]
fn minimal_capability_fills_defaults() {
    let cap: Capability = serde_json::from_value(json!({"id": "cap-a", "name": "Search"})).unwrap();
    assert_eq!(cap.status, CapabilityStatus::Planned);
    assert!(cap.used_by_workflows.is_empty());
    assert!(cap.implemented_by_components.is_empty());
    assert_eq!(cap.category, None);
}

#[test]
fn workflow_serializes_reference_lists_even_when_empty() {
    let wf: Workflow = serde_json::from_value(json!({"id": "W1", "name": "Checkout"})).unwrap();
    let value = serde_json::to_value(&wf).unwrap();
    assert_eq!(value["requires_capabilities"], json!([]));
    assert_eq!(value["personas"], json!([]));
    assert!(value.get("description").is_none());
}

#[test]
fn unknown_fields_are_rejected() {
    let result: Result<Persona, _> =
        serde_json::from_value(json!({"id": "admin", "name": "Admin", "favourite": "tea"}));
    assert!(result.is_err());

    let schema = serde_json::to_value(schema_for!(Persona)).unwrap();
    let errors = validate_against_schema(
        &schema,
        &json!({"id": "admin", "name": "Admin", "favourite": "tea"}),
    );
    assert!(!errors.is_empty());
}

#[test]
fn component_document_passes_its_schema() {
    let component = Component {
        id: "comp-x".into(),
        name: "Data table".into(),
        description: Some("Sortable grid".into()),
        component_type: ComponentType::Organism,
        status: ComponentStatus::Stable,
        implements_capabilities: vec!["cap-a".into()],
        depends_on: vec!["comp-y".into()],
        token_sets: vec!["tokens-core".into()],
        suggested_by_workflows: vec!["W1".into()],
        dependents: vec![],
        used_in_views: vec!["dashboard".into()],
    };
    let schema = serde_json::to_value(schema_for!(Component)).unwrap();
    let instance = serde_json::to_value(&component).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "schema errors: {errors:?}");

    let recovered: Component = serde_json::from_value(instance).unwrap();
    assert_eq!(recovered, component);
}

#[test]
fn test_result_requires_outcome_and_timestamp() {
    let schema = serde_json::to_value(schema_for!(TestResult)).unwrap();
    let errors = validate_against_schema(
        &schema,
        &json!({"id": "tr-1", "workflow_id": "W1", "persona_id": "admin"}),
    );
    assert!(!errors.is_empty());

    let result = TestResult {
        id: "tr-1".into(),
        workflow_id: "W1".into(),
        persona_id: "admin".into(),
        tested_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
        outcome: TestOutcome::Passed,
        simulated: true,
        notes: None,
    };
    let instance = serde_json::to_value(&result).unwrap();
    assert!(validate_against_schema(&schema, &instance).is_empty());
}

#[test]
fn token_set_tokens_are_ordered() {
    let set: TokenSet = serde_json::from_value(json!({
        "id": "tokens-core",
        "name": "Core",
        "tokens": {"spacing.md": "16px", "color.primary": "#0055ff"}
    }))
    .unwrap();
    let keys: Vec<&String> = set.tokens.keys().collect();
    assert_eq!(keys, vec!["color.primary", "spacing.md"]);
}

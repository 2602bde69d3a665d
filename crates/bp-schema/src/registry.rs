//! Central schema registry for all Blueprint document kinds.
//!
//! The `SchemaRegistry` builds JSON Schemas from bp-core types at construction
//! time using [`schemars::schema_for!`] and validates incoming documents via
//! `jsonschema` before they are converted into typed entities.

use std::collections::HashMap;

use bp_core::entities::Entity;
use bp_core::enums::EntityKind;
use schemars::schema_for;

use crate::error::SchemaError;
use crate::ids::check_id;

/// Central store of all JSON Schemas in the Blueprint system.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing every entity schema and the journal
    /// entry schema.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        use bp_core::entities as e;

        let mut schemas = HashMap::new();

        // Keyed by `EntityKind::as_str()` so kind lookups need no extra table.
        register!(schemas, EntityKind::Workflow.as_str(), e::Workflow);
        register!(schemas, EntityKind::Capability.as_str(), e::Capability);
        register!(schemas, EntityKind::Persona.as_str(), e::Persona);
        register!(schemas, EntityKind::Component.as_str(), e::Component);
        register!(schemas, EntityKind::TokenSet.as_str(), e::TokenSet);
        register!(schemas, EntityKind::View.as_str(), e::View);
        register!(
            schemas,
            EntityKind::InteractionPattern.as_str(),
            e::InteractionPattern
        );
        register!(schemas, EntityKind::TestResult.as_str(), e::TestResult);

        register!(schemas, "journal_entry", bp_core::journal::JournalEntry);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Schema for one entity kind.
    #[must_use]
    pub fn for_kind(&self, kind: EntityKind) -> Option<&serde_json::Value> {
        self.get(kind.as_str())
    }

    /// Validate a JSON value against a named schema.
    ///
    /// Only the first failure is reported, pinned to the top-level field it
    /// concerns.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::Invalid` naming the failing field.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        match validator.iter_errors(instance).next() {
            None => Ok(()),
            Some(error) => {
                let message = error.to_string();
                let path = error.instance_path.to_string();
                Err(SchemaError::invalid(field_from_error(&path, &message), message))
            }
        }
    }

    /// Structurally validate raw input for `kind` and convert it into an entity.
    ///
    /// Checks, in order: JSON Schema shape, typed conversion, ID syntax, and a
    /// non-blank `name`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Invalid` describing the first failing field.
    pub fn validate_entity(
        &self,
        kind: EntityKind,
        raw: &serde_json::Value,
    ) -> Result<Entity, SchemaError> {
        self.validate(kind.as_str(), raw)?;

        let entity = Entity::from_value(kind, raw.clone())
            .map_err(|e| SchemaError::invalid("document", e.to_string()))?;

        check_id(kind, entity.id()).map_err(|reason| SchemaError::invalid("id", reason))?;

        if kind != EntityKind::TestResult && entity.name().trim().is_empty() {
            return Err(SchemaError::invalid("name", "must not be blank"));
        }

        Ok(entity)
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level field a validation error concerns.
///
/// Nested errors carry a JSON pointer (`/requires_capabilities/0`); root-level
/// errors (missing or unexpected properties) only name the field inside the
/// message, in single or double quotes.
fn field_from_error(instance_path: &str, message: &str) -> String {
    if let Some(first) = instance_path
        .trim_start_matches('/')
        .split('/')
        .next()
        .filter(|s| !s.is_empty())
    {
        return first.to_string();
    }

    for quote in ['"', '\''] {
        let mut parts = message.split(quote);
        if let (Some(_), Some(inner)) = (parts.next(), parts.next()) {
            if !inner.is_empty() {
                return inner.to_string();
            }
        }
    }
    "document".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn registry_has_every_kind() {
        let reg = registry();
        for kind in EntityKind::ALL {
            assert!(reg.for_kind(kind).is_some(), "missing schema for {kind}");
        }
        assert_eq!(reg.schema_count(), EntityKind::ALL.len() + 1);
    }

    #[test]
    fn registry_list_is_sorted() {
        let reg = registry();
        let names = reg.list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn validate_nonexistent_schema_returns_not_found() {
        let reg = registry();
        let result = reg.validate("bogus", &json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }

    #[test]
    fn validate_entity_accepts_minimal_capability() {
        let entity = registry()
            .validate_entity(EntityKind::Capability, &json!({"id": "cap-a", "name": "Search"}))
            .unwrap();
        assert_eq!(entity.kind(), EntityKind::Capability);
        assert_eq!(entity.id(), "cap-a");
    }

    #[test]
    fn missing_required_field_names_the_field() {
        let err = registry()
            .validate_entity(EntityKind::Capability, &json!({"id": "cap-a"}))
            .unwrap_err();
        match err {
            SchemaError::Invalid { field, .. } => assert_eq!(field, "name"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn wrong_type_in_reference_list_names_the_list() {
        let err = registry()
            .validate_entity(
                EntityKind::Workflow,
                &json!({"id": "W1", "name": "Checkout", "requires_capabilities": [7]}),
            )
            .unwrap_err();
        match err {
            SchemaError::Invalid { field, .. } => assert_eq!(field, "requires_capabilities"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn invalid_enum_value_is_rejected() {
        let err = registry()
            .validate_entity(
                EntityKind::Capability,
                &json!({"id": "cap-a", "name": "Search", "status": "shipped"}),
            )
            .unwrap_err();
        assert!(matches!(err, SchemaError::Invalid { ref field, .. } if field == "status"));
    }

    #[test]
    fn bad_id_syntax_is_reported_on_id() {
        let err = registry()
            .validate_entity(EntityKind::Capability, &json!({"id": "Cap A", "name": "Search"}))
            .unwrap_err();
        assert!(matches!(err, SchemaError::Invalid { ref field, .. } if field == "id"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = registry()
            .validate_entity(EntityKind::Persona, &json!({"id": "admin", "name": "   "}))
            .unwrap_err();
        assert!(matches!(err, SchemaError::Invalid { ref field, .. } if field == "name"));
    }

    #[test]
    fn field_from_error_prefers_pointer() {
        assert_eq!(
            field_from_error("/personas/2", "7 is not of type \"string\""),
            "personas"
        );
        assert_eq!(
            field_from_error("", "\"name\" is a required property"),
            "name"
        );
        assert_eq!(
            field_from_error("", "Additional properties are not allowed ('colour' was unexpected)"),
            "colour"
        );
        assert_eq!(field_from_error("", "no quotes here"), "document");
    }
}

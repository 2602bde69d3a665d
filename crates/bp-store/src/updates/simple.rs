//! Updates for kinds that only carry scalar fields and reverse lists.

use std::collections::BTreeMap;

use bp_core::enums::EntityKind;
use serde::Serialize;

use super::EntityUpdate;

#[derive(Debug, Clone, Default, Serialize)]
pub struct PersonaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<String>>,
}

impl EntityUpdate for PersonaUpdate {
    const KIND: EntityKind = EntityKind::Persona;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TokenSetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    /// Replaces the whole token map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<BTreeMap<String, String>>,
}

impl EntityUpdate for TokenSetUpdate {
    const KIND: EntityKind = EntityKind::TokenSet;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct InteractionPatternUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

impl EntityUpdate for InteractionPatternUpdate {
    const KIND: EntityKind = EntityKind::InteractionPattern;
}

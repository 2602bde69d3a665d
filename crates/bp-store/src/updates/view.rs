//! View update.

use bp_core::enums::EntityKind;
use serde::Serialize;

use super::EntityUpdate;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ViewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction_patterns: Option<Vec<String>>,
}

impl EntityUpdate for ViewUpdate {
    const KIND: EntityKind = EntityKind::View;
}

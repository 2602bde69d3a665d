use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::RefField;

/// A screen or page composed of components and interaction patterns.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct View {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default)]
    pub interaction_patterns: Vec<String>,
}

impl View {
    pub(crate) const fn ref_list(&self, field: RefField) -> Option<&Vec<String>> {
        match field {
            RefField::ViewComponents => Some(&self.components),
            RefField::InteractionPatterns => Some(&self.interaction_patterns),
            _ => None,
        }
    }

    pub(crate) fn ref_list_mut(&mut self, field: RefField) -> Option<&mut Vec<String>> {
        match field {
            RefField::ViewComponents => Some(&mut self.components),
            RefField::InteractionPatterns => Some(&mut self.interaction_patterns),
            _ => None,
        }
    }
}

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::RefField;

/// A named group of design tokens (colors, spacing, type scale).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TokenSet {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tokens: BTreeMap<String, String>,
    /// Reverse of `Component.token_sets`.
    #[serde(default)]
    pub used_by_components: Vec<String>,
}

impl TokenSet {
    pub(crate) const fn ref_list(&self, field: RefField) -> Option<&Vec<String>> {
        match field {
            RefField::UsedByComponents => Some(&self.used_by_components),
            _ => None,
        }
    }

    pub(crate) fn ref_list_mut(&mut self, field: RefField) -> Option<&mut Vec<String>> {
        match field {
            RefField::UsedByComponents => Some(&mut self.used_by_components),
            _ => None,
        }
    }
}

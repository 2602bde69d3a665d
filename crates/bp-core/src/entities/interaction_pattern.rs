use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::RefField;

/// A reusable interaction (inline edit, optimistic save, undo toast, ...).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InteractionPattern {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Reverse of `View.interaction_patterns`.
    #[serde(default)]
    pub used_in_views: Vec<String>,
}

impl InteractionPattern {
    pub(crate) const fn ref_list(&self, field: RefField) -> Option<&Vec<String>> {
        match field {
            RefField::PatternUsedInViews => Some(&self.used_in_views),
            _ => None,
        }
    }

    pub(crate) fn ref_list_mut(&mut self, field: RefField) -> Option<&mut Vec<String>> {
        match field {
            RefField::PatternUsedInViews => Some(&mut self.used_in_views),
            _ => None,
        }
    }
}

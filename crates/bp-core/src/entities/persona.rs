use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::RefField;

/// A user archetype that workflows are designed for.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Persona {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    /// Reverse of `Workflow.personas`.
    #[serde(default)]
    pub used_in_workflows: Vec<String>,
}

impl Persona {
    pub(crate) const fn ref_list(&self, field: RefField) -> Option<&Vec<String>> {
        match field {
            RefField::UsedInWorkflows => Some(&self.used_in_workflows),
            _ => None,
        }
    }

    pub(crate) fn ref_list_mut(&mut self, field: RefField) -> Option<&mut Vec<String>> {
        match field {
            RefField::UsedInWorkflows => Some(&mut self.used_in_workflows),
            _ => None,
        }
    }
}

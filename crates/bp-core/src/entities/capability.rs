use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::RefField;
use crate::enums::CapabilityStatus;

/// Something the product can do, required by workflows and implemented by components.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Capability {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub status: CapabilityStatus,
    /// Reverse of `Workflow.requires_capabilities`.
    #[serde(default)]
    pub used_by_workflows: Vec<String>,
    /// Reverse of `Component.implements_capabilities`.
    #[serde(default)]
    pub implemented_by_components: Vec<String>,
}

impl Capability {
    pub(crate) const fn ref_list(&self, field: RefField) -> Option<&Vec<String>> {
        match field {
            RefField::UsedByWorkflows => Some(&self.used_by_workflows),
            RefField::ImplementedByComponents => Some(&self.implemented_by_components),
            _ => None,
        }
    }

    pub(crate) fn ref_list_mut(&mut self, field: RefField) -> Option<&mut Vec<String>> {
        match field {
            RefField::UsedByWorkflows => Some(&mut self.used_by_workflows),
            RefField::ImplementedByComponents => Some(&mut self.implemented_by_components),
            _ => None,
        }
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::RefField;
use crate::enums::WorkflowStatus;

/// An end-to-end user journey. Root of the graph: nothing references a workflow.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Workflow {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub status: WorkflowStatus,
    #[serde(default)]
    pub requires_capabilities: Vec<String>,
    #[serde(default)]
    pub personas: Vec<String>,
    #[serde(default)]
    pub suggested_components: Vec<String>,
}

impl Workflow {
    pub(crate) const fn ref_list(&self, field: RefField) -> Option<&Vec<String>> {
        match field {
            RefField::RequiresCapabilities => Some(&self.requires_capabilities),
            RefField::Personas => Some(&self.personas),
            RefField::SuggestedComponents => Some(&self.suggested_components),
            _ => None,
        }
    }

    pub(crate) fn ref_list_mut(&mut self, field: RefField) -> Option<&mut Vec<String>> {
        match field {
            RefField::RequiresCapabilities => Some(&mut self.requires_capabilities),
            RefField::Personas => Some(&mut self.personas),
            RefField::SuggestedComponents => Some(&mut self.suggested_components),
            _ => None,
        }
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::RefField;
use crate::enums::{ComponentStatus, ComponentType};

/// A reusable UI building block.
///
/// Components are both sources (`implements`, `depends`, `styles`) and targets
/// (`suggests`, `depends`, `composes`) of relationships.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Component {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub component_type: ComponentType,
    #[serde(default)]
    pub status: ComponentStatus,
    #[serde(default)]
    pub implements_capabilities: Vec<String>,
    #[serde(default)]
    pub depends_on: Vec<String>,
    #[serde(default)]
    pub token_sets: Vec<String>,
    /// Reverse of `Workflow.suggested_components`.
    #[serde(default)]
    pub suggested_by_workflows: Vec<String>,
    /// Reverse of `Component.depends_on`.
    #[serde(default)]
    pub dependents: Vec<String>,
    /// Reverse of `View.components`.
    #[serde(default)]
    pub used_in_views: Vec<String>,
}

impl Component {
    pub(crate) const fn ref_list(&self, field: RefField) -> Option<&Vec<String>> {
        match field {
            RefField::ImplementsCapabilities => Some(&self.implements_capabilities),
            RefField::DependsOn => Some(&self.depends_on),
            RefField::TokenSets => Some(&self.token_sets),
            RefField::SuggestedByWorkflows => Some(&self.suggested_by_workflows),
            RefField::Dependents => Some(&self.dependents),
            RefField::ComponentUsedInViews => Some(&self.used_in_views),
            _ => None,
        }
    }

    pub(crate) fn ref_list_mut(&mut self, field: RefField) -> Option<&mut Vec<String>> {
        match field {
            RefField::ImplementsCapabilities => Some(&mut self.implements_capabilities),
            RefField::DependsOn => Some(&mut self.depends_on),
            RefField::TokenSets => Some(&mut self.token_sets),
            RefField::SuggestedByWorkflows => Some(&mut self.suggested_by_workflows),
            RefField::Dependents => Some(&mut self.dependents),
            RefField::ComponentUsedInViews => Some(&mut self.used_in_views),
            _ => None,
        }
    }
}

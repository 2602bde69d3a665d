//! Workflow update builder.

use bp_core::enums::{EntityKind, WorkflowStatus};
use serde::Serialize;

use super::EntityUpdate;

#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkflowUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkflowStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_capabilities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personas: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_components: Option<Vec<String>>,
}

impl EntityUpdate for WorkflowUpdate {
    const KIND: EntityKind = EntityKind::Workflow;
}

#[derive(Default)]
pub struct WorkflowUpdateBuilder(WorkflowUpdate);

impl WorkflowUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    #[must_use]
    pub fn description(mut self, val: Option<String>) -> Self {
        self.0.description = Some(val);
        self
    }

    #[must_use]
    pub fn category(mut self, val: Option<String>) -> Self {
        self.0.category = Some(val);
        self
    }

    #[must_use]
    pub const fn status(mut self, val: WorkflowStatus) -> Self {
        self.0.status = Some(val);
        self
    }

    #[must_use]
    pub fn requires_capabilities<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.requires_capabilities = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn personas<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.personas = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn suggested_components<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.suggested_components = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn build(self) -> WorkflowUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_set_fields_are_serialized() {
        let update = WorkflowUpdateBuilder::new()
            .status(WorkflowStatus::Active)
            .description(None)
            .personas(["admin"])
            .build();
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"status": "active", "description": null, "personas": ["admin"]})
        );
    }
}

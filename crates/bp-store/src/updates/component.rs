//! Component update builder.

use bp_core::enums::{ComponentStatus, ComponentType, EntityKind};
use serde::Serialize;

use super::EntityUpdate;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ComponentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_type: Option<ComponentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ComponentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implements_capabilities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_sets: Option<Vec<String>>,
}

impl EntityUpdate for ComponentUpdate {
    const KIND: EntityKind = EntityKind::Component;
}

#[derive(Default)]
pub struct ComponentUpdateBuilder(ComponentUpdate);

impl ComponentUpdateBuilder {
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
    pub const fn component_type(mut self, val: ComponentType) -> Self {
        self.0.component_type = Some(val);
        self
    }

    #[must_use]
    pub const fn status(mut self, val: ComponentStatus) -> Self {
        self.0.status = Some(val);
        self
    }

    #[must_use]
    pub fn implements_capabilities<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.implements_capabilities = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn depends_on<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.depends_on = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn token_sets<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.token_sets = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn build(self) -> ComponentUpdate {
        self.0
    }
}

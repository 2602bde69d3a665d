//! Capability update builder.

use bp_core::enums::{CapabilityStatus, EntityKind};
use serde::Serialize;

use super::EntityUpdate;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CapabilityUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CapabilityStatus>,
}

impl EntityUpdate for CapabilityUpdate {
    const KIND: EntityKind = EntityKind::Capability;
}

#[derive(Default)]
pub struct CapabilityUpdateBuilder(CapabilityUpdate);

impl CapabilityUpdateBuilder {
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
    pub const fn status(mut self, val: CapabilityStatus) -> Self {
        self.0.status = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> CapabilityUpdate {
        self.0
    }
}

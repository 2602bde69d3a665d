//! Document structs for all Blueprint entity kinds.
//!
//! Each struct maps to one JSON file under its kind's directory. All structs
//! derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and
//! structural validation. [`Entity`] is the closed sum over every kind.

mod capability;
mod component;
mod interaction_pattern;
mod persona;
mod test_result;
mod token_set;
mod view;
mod workflow;

pub use capability::Capability;
pub use component::Component;
pub use interaction_pattern::InteractionPattern;
pub use persona::Persona;
pub use test_result::TestResult;
pub use token_set::TokenSet;
pub use view::View;
pub use workflow::Workflow;

use serde::Serialize;

use crate::catalog::{PinnedField, RefField, fields_for};
use crate::enums::EntityKind;
use crate::errors::CoreError;
use crate::responses::EntitySummary;

/// A single-ID reference that is checked for existence but not mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinnedRef<'a> {
    pub field: PinnedField,
    pub kind: EntityKind,
    pub id: &'a str,
}

/// Any stored document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Entity {
    Workflow(Workflow),
    Capability(Capability),
    Persona(Persona),
    Component(Component),
    TokenSet(TokenSet),
    View(View),
    InteractionPattern(InteractionPattern),
    TestResult(TestResult),
}

impl Entity {
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Workflow(_) => EntityKind::Workflow,
            Self::Capability(_) => EntityKind::Capability,
            Self::Persona(_) => EntityKind::Persona,
            Self::Component(_) => EntityKind::Component,
            Self::TokenSet(_) => EntityKind::TokenSet,
            Self::View(_) => EntityKind::View,
            Self::InteractionPattern(_) => EntityKind::InteractionPattern,
            Self::TestResult(_) => EntityKind::TestResult,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Workflow(e) => &e.id,
            Self::Capability(e) => &e.id,
            Self::Persona(e) => &e.id,
            Self::Component(e) => &e.id,
            Self::TokenSet(e) => &e.id,
            Self::View(e) => &e.id,
            Self::InteractionPattern(e) => &e.id,
            Self::TestResult(e) => &e.id,
        }
    }

    /// Display name. Test results have none and fall back to their outcome.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Workflow(e) => &e.name,
            Self::Capability(e) => &e.name,
            Self::Persona(e) => &e.name,
            Self::Component(e) => &e.name,
            Self::TokenSet(e) => &e.name,
            Self::View(e) => &e.name,
            Self::InteractionPattern(e) => &e.name,
            Self::TestResult(e) => e.outcome.as_str(),
        }
    }

    /// Status label for kinds that carry one.
    #[must_use]
    pub const fn status(&self) -> Option<&'static str> {
        match self {
            Self::Workflow(e) => Some(e.status.as_str()),
            Self::Capability(e) => Some(e.status.as_str()),
            Self::Component(e) => Some(e.status.as_str()),
            Self::TestResult(e) => Some(e.outcome.as_str()),
            Self::Persona(_) | Self::TokenSet(_) | Self::View(_) | Self::InteractionPattern(_) => {
                None
            }
        }
    }

    /// Category for kinds that carry one.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Workflow(e) => e.category.as_deref(),
            Self::Capability(e) => e.category.as_deref(),
            _ => None,
        }
    }

    /// IDs in a reference field. Empty when the field is not declared on this kind.
    #[must_use]
    pub fn refs(&self, field: RefField) -> &[String] {
        let list = match self {
            Self::Workflow(e) => e.ref_list(field),
            Self::Capability(e) => e.ref_list(field),
            Self::Persona(e) => e.ref_list(field),
            Self::Component(e) => e.ref_list(field),
            Self::TokenSet(e) => e.ref_list(field),
            Self::View(e) => e.ref_list(field),
            Self::InteractionPattern(e) => e.ref_list(field),
            Self::TestResult(_) => None,
        };
        match list {
            Some(ids) => ids,
            None => &[],
        }
    }

    /// Mutable access to a reference field, `None` when not declared on this kind.
    ///
    /// Reverse fields are only written through the store's relationship engine;
    /// this accessor exists for that engine.
    pub fn refs_mut(&mut self, field: RefField) -> Option<&mut Vec<String>> {
        match self {
            Self::Workflow(e) => e.ref_list_mut(field),
            Self::Capability(e) => e.ref_list_mut(field),
            Self::Persona(e) => e.ref_list_mut(field),
            Self::Component(e) => e.ref_list_mut(field),
            Self::TokenSet(e) => e.ref_list_mut(field),
            Self::View(e) => e.ref_list_mut(field),
            Self::InteractionPattern(e) => e.ref_list_mut(field),
            Self::TestResult(_) => None,
        }
    }

    /// Every `(field, id)` pair across this entity's forward and reverse fields.
    pub fn all_refs(&self) -> impl Iterator<Item = (RefField, &str)> {
        fields_for(self.kind())
            .all()
            .flat_map(move |field| self.refs(field).iter().map(move |id| (field, id.as_str())))
    }

    /// Single-ID references that must exist but are not mirrored.
    #[must_use]
    pub fn pinned_refs(&self) -> Vec<PinnedRef<'_>> {
        match self {
            Self::TestResult(e) => vec![
                PinnedRef {
                    field: PinnedField::TestedWorkflow,
                    kind: EntityKind::Workflow,
                    id: &e.workflow_id,
                },
                PinnedRef {
                    field: PinnedField::TestedPersona,
                    kind: EntityKind::Persona,
                    id: &e.persona_id,
                },
            ],
            _ => Vec::new(),
        }
    }

    /// Lightweight listing view of this entity.
    #[must_use]
    pub fn summary(&self) -> EntitySummary {
        EntitySummary {
            kind: self.kind(),
            id: self.id().to_string(),
            name: self.name().to_string(),
            status: self.status().map(String::from),
            category: self.category().map(String::from),
        }
    }

    /// Serialize to the JSON stored on disk.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Other` if serialization fails.
    pub fn to_value(&self) -> Result<serde_json::Value, CoreError> {
        serde_json::to_value(self).map_err(|e| CoreError::Other(e.into()))
    }

    /// Deserialize a document of a known kind.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDocument` if the value does not match the
    /// kind's document shape.
    pub fn from_value(kind: EntityKind, value: serde_json::Value) -> Result<Self, CoreError> {
        let invalid = |e: serde_json::Error| CoreError::InvalidDocument {
            kind,
            reason: e.to_string(),
        };
        Ok(match kind {
            EntityKind::Workflow => Self::Workflow(serde_json::from_value(value).map_err(invalid)?),
            EntityKind::Capability => {
                Self::Capability(serde_json::from_value(value).map_err(invalid)?)
            }
            EntityKind::Persona => Self::Persona(serde_json::from_value(value).map_err(invalid)?),
            EntityKind::Component => {
                Self::Component(serde_json::from_value(value).map_err(invalid)?)
            }
            EntityKind::TokenSet => Self::TokenSet(serde_json::from_value(value).map_err(invalid)?),
            EntityKind::View => Self::View(serde_json::from_value(value).map_err(invalid)?),
            EntityKind::InteractionPattern => {
                Self::InteractionPattern(serde_json::from_value(value).map_err(invalid)?)
            }
            EntityKind::TestResult => {
                Self::TestResult(serde_json::from_value(value).map_err(invalid)?)
            }
        })
    }
}

macro_rules! impl_from_document {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Entity {
                fn from(doc: $ty) -> Self {
                    Self::$ty(doc)
                }
            }
        )*
    };
}

impl_from_document!(
    Workflow,
    Capability,
    Persona,
    Component,
    TokenSet,
    View,
    InteractionPattern,
    TestResult,
);

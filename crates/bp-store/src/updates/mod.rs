//! Typed update structs for entity patches.
//!
//! Each struct has `Option` fields; only `Some` fields are serialized, so the
//! result is exactly the patch `Store::update` merges. `Option<Option<_>>`
//! fields clear an optional value when set to `Some(None)`. Reverse fields
//! have no counterpart here because only the store writes them.

pub mod capability;
pub mod component;
pub mod simple;
pub mod test_result;
pub mod view;
pub mod workflow;

use bp_core::enums::EntityKind;
use serde::Serialize;

pub use capability::{CapabilityUpdate, CapabilityUpdateBuilder};
pub use component::{ComponentUpdate, ComponentUpdateBuilder};
pub use simple::{InteractionPatternUpdate, PersonaUpdate, TokenSetUpdate};
pub use test_result::TestResultUpdate;
pub use view::ViewUpdate;
pub use workflow::{WorkflowUpdate, WorkflowUpdateBuilder};

/// A patch for one entity kind.
pub trait EntityUpdate: Serialize {
    const KIND: EntityKind;
}

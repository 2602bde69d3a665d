//! Entity updates with reference-field diffing.

use bp_core::catalog::{field_by_name, fields_for};
use bp_core::entities::Entity;
use bp_core::enums::{EntityKind, JournalOp};
use tracing::info;

use crate::error::StoreError;
use crate::index::EntityLookup;
use crate::journal;
use crate::relations::{self, dedupe_refs, link_field, reject_self_dependency, unlink_field};
use crate::service::Store;
use crate::staging::Staging;
use crate::updates::EntityUpdate;

impl Store {
    /// Merge `patch` into an existing entity.
    ///
    /// Top-level fields in the patch replace the stored ones. For each forward
    /// field the old and new ID lists are diffed and only the removed and
    /// added IDs are unlinked and linked, so reverse links contributed by
    /// other entities are never clobbered.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the entity does not exist
    /// - `StructuralInvalid` if the patch changes `id`, sets a reverse field,
    ///   or the merged document is malformed
    /// - `MissingReference` if an added reference does not resolve
    /// - `Io` if a write fails
    pub fn update(
        &mut self,
        kind: EntityKind,
        id: &str,
        patch: &serde_json::Value,
    ) -> Result<Entity, StoreError> {
        let current = self
            .index()
            .get(kind, id)
            .ok_or_else(|| StoreError::not_found(kind, id))?;

        let fields = patch
            .as_object()
            .ok_or_else(|| StoreError::invalid("document", "patch must be a JSON object"))?;

        let mut merged = current.to_value()?;
        let target = merged
            .as_object_mut()
            .ok_or_else(|| StoreError::invalid("document", "stored document is not an object"))?;
        for (name, value) in fields {
            if name == "id" {
                if value.as_str() != Some(id) {
                    return Err(StoreError::invalid("id", "cannot be changed"));
                }
                continue;
            }
            if field_by_name(kind, name).is_some_and(|f| f.is_reverse()) {
                return Err(StoreError::invalid(name.as_str(), "maintained by the store"));
            }
            target.insert(name.clone(), value.clone());
        }

        let mut updated = self.schema().validate_entity(kind, &merged)?;
        dedupe_refs(&mut updated);
        reject_self_dependency(&updated)?;

        for &field in fields_for(kind).forward {
            let old = current.refs(field);
            let added = updated.refs(field).iter().filter(|r| !old.contains(r));
            relations::check_ids(self.index(), field, added)?;
        }
        if updated.pinned_refs() != current.pinned_refs() {
            relations::validate_pinned(self.index(), &updated)?;
        }

        let mut staging = Staging::new(self.index());
        let mut staged = updated.clone();
        for &field in fields_for(kind).forward {
            if let Some(ids) = staged.refs_mut(field) {
                *ids = current.refs(field).to_vec();
            }
        }
        staging.put(staged);

        for &field in fields_for(kind).forward {
            let old = current.refs(field);
            let new = updated.refs(field);
            for removed in old.iter().filter(|r| !new.contains(r)) {
                // A dangling ID left by an out-of-band edit has no other side.
                if !staging.exists(field.target(), removed) {
                    continue;
                }
                unlink_field(&mut staging, field, id, removed)?;
            }
            for added in new.iter().filter(|r| !old.contains(r)) {
                link_field(&mut staging, field, id, added)?;
            }
            // Keep the caller's ordering once membership matches.
            if let Some(ids) = staging.get_mut(kind, id).and_then(|e| e.refs_mut(field)) {
                *ids = new.to_vec();
            }
        }
        let writes = staging.into_write_set();

        self.commit(&writes, journal::entry(JournalOp::Update, kind, id, patch.clone()))?;
        info!(%kind, %id, writes = writes.len(), "updated");

        self.index()
            .get(kind, id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(kind, id))
    }

    /// Apply a typed update struct.
    ///
    /// # Errors
    ///
    /// Same as [`Store::update`].
    pub fn update_with<U: EntityUpdate>(&mut self, id: &str, update: &U) -> Result<Entity, StoreError> {
        let patch = serde_json::to_value(update)?;
        self.update(U::KIND, id, &patch)
    }
}

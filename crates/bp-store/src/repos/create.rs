//! Entity creation.

use bp_core::catalog::fields_for;
use bp_core::entities::Entity;
use bp_core::enums::{EntityKind, JournalOp};
use tracing::info;

use crate::error::StoreError;
use crate::index::EntityLookup;
use crate::journal;
use crate::relations::{self, dedupe_refs, link_field, reject_self_dependency};
use crate::service::Store;
use crate::staging::Staging;

impl Store {
    /// Create an entity of `kind` from raw JSON.
    ///
    /// The entity is staged with empty reference lists, then every forward
    /// reference and reverse seed is applied through the relationship engine
    /// so both sides agree from the start.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if the ID is taken
    /// - `StructuralInvalid` if the document is malformed
    /// - `MissingReference` if any reference does not resolve
    /// - `Io` if a write fails
    pub fn create(&mut self, kind: EntityKind, raw: &serde_json::Value) -> Result<Entity, StoreError> {
        if let Some(id) = raw.get("id").and_then(serde_json::Value::as_str) {
            if self.index().exists(kind, id) {
                return Err(StoreError::AlreadyExists {
                    kind,
                    id: id.to_string(),
                });
            }
        }

        let mut entity = self.schema().validate_entity(kind, raw)?;
        dedupe_refs(&mut entity);
        reject_self_dependency(&entity)?;
        relations::validate_references(self.index(), &entity)?;
        relations::validate_seeds(self.index(), &entity)?;

        let id = entity.id().to_string();
        let mut bare = entity.clone();
        for field in fields_for(kind).all() {
            if let Some(ids) = bare.refs_mut(field) {
                ids.clear();
            }
        }

        let mut staging = Staging::new(self.index());
        staging.put(bare);
        for field in fields_for(kind).all() {
            for other in entity.refs(field) {
                link_field(&mut staging, field, &id, other)?;
            }
        }
        let writes = staging.into_write_set();

        let data = entity.to_value()?;
        self.commit(&writes, journal::entry(JournalOp::Create, kind, &id, data))?;
        info!(%kind, %id, "created");

        self.index()
            .get(kind, &id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(kind, id))
    }

    /// Create from a typed document.
    ///
    /// # Errors
    ///
    /// Same as [`Store::create`].
    pub fn create_entity(&mut self, entity: impl Into<Entity>) -> Result<Entity, StoreError> {
        let entity = entity.into();
        let raw = entity.to_value()?;
        self.create(entity.kind(), &raw)
    }
}

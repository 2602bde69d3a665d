//! In-memory index of every known entity.
//!
//! Entities are held per kind in `BTreeMap`s keyed by ID, so every listing and
//! report comes out ordered. The index is only changed through
//! [`Index::apply`] once a full write-set has been persisted, or rebuilt
//! wholesale by [`Index::load_all`].

use std::collections::BTreeMap;

use bp_core::entities::Entity;
use bp_core::enums::EntityKind;
use bp_core::responses::EntitySummary;
use tracing::info;

use crate::error::StoreError;
use crate::persistence::Persistence;
use crate::staging::WriteSet;

/// Read access to entities by `(kind, id)`.
///
/// Implemented by the committed [`Index`] and by the [`crate::staging::Staging`]
/// overlay, so reference checks run against whichever view a mutation needs.
pub trait EntityLookup {
    fn get(&self, kind: EntityKind, id: &str) -> Option<&Entity>;

    fn exists(&self, kind: EntityKind, id: &str) -> bool {
        self.get(kind, id).is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Index {
    kinds: BTreeMap<EntityKind, BTreeMap<String, Entity>>,
}

impl Index {
    /// Build an index from every kind's documents.
    ///
    /// # Errors
    ///
    /// Returns the first error the persistence layer reports for a kind.
    pub fn load_all(persistence: &dyn Persistence) -> Result<Self, StoreError> {
        let mut index = Self::default();
        for kind in EntityKind::ALL {
            for entity in persistence.load(kind)? {
                index.upsert(entity);
            }
        }
        info!(entities = index.len(), "index loaded");
        Ok(index)
    }

    /// Summaries of every entity of `kind` matching `predicate`, ordered by ID.
    pub fn list(&self, kind: EntityKind, predicate: impl Fn(&Entity) -> bool) -> Vec<EntitySummary> {
        self.iter_kind(kind)
            .filter(|e| predicate(e))
            .map(Entity::summary)
            .collect()
    }

    /// Entities of one kind, ordered by ID.
    pub fn iter_kind(&self, kind: EntityKind) -> impl Iterator<Item = &Entity> {
        self.kinds.get(&kind).into_iter().flat_map(BTreeMap::values)
    }

    /// Every entity, grouped by kind.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.kinds.values().flat_map(BTreeMap::values)
    }

    /// Insert or replace an entity.
    pub fn upsert(&mut self, entity: Entity) {
        self.kinds
            .entry(entity.kind())
            .or_default()
            .insert(entity.id().to_string(), entity);
    }

    pub fn remove(&mut self, kind: EntityKind, id: &str) -> Option<Entity> {
        self.kinds.get_mut(&kind)?.remove(id)
    }

    /// Apply a committed write-set.
    pub fn apply(&mut self, writes: &WriteSet) {
        for entity in &writes.saves {
            self.upsert(entity.clone());
        }
        for (kind, id) in &writes.deletes {
            self.remove(*kind, id);
        }
    }

    #[must_use]
    pub fn count(&self, kind: EntityKind) -> usize {
        self.kinds.get(&kind).map_or(0, BTreeMap::len)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EntityLookup for Index {
    fn get(&self, kind: EntityKind, id: &str) -> Option<&Entity> {
        self.kinds.get(&kind)?.get(id)
    }
}

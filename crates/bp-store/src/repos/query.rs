//! Read-only lookups against the index.

use bp_core::entities::Entity;
use bp_core::enums::EntityKind;
use bp_core::responses::{Dependency, Dependent, EntitySummary};

use crate::error::StoreError;
use crate::index::EntityLookup;
use crate::relations;
use crate::service::Store;

impl Store {
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the entity does not exist.
    pub fn get(&self, kind: EntityKind, id: &str) -> Result<&Entity, StoreError> {
        self.index()
            .get(kind, id)
            .ok_or_else(|| StoreError::not_found(kind, id))
    }

    #[must_use]
    pub fn exists(&self, kind: EntityKind, id: &str) -> bool {
        self.index().exists(kind, id)
    }

    /// Summaries of `kind` matching `predicate`, ordered by ID.
    pub fn list(&self, kind: EntityKind, predicate: impl Fn(&Entity) -> bool) -> Vec<EntitySummary> {
        self.index().list(kind, predicate)
    }

    /// Entities that reference `(kind, id)` through any field.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the entity does not exist.
    pub fn dependents_of(&self, kind: EntityKind, id: &str) -> Result<Vec<Dependent>, StoreError> {
        relations::dependents_of(self.index(), kind, id)
    }

    /// Entities `(kind, id)` references.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the entity does not exist.
    pub fn dependencies_of(&self, kind: EntityKind, id: &str) -> Result<Vec<Dependency>, StoreError> {
        relations::dependencies_of(self.index(), kind, id)
    }
}

//! Copy-on-write overlay used to compute a mutation's write-set.
//!
//! A mutation reads through the overlay, clones an entity into it on first
//! modification, and finally turns the overlay into a [`WriteSet`]. Nothing
//! reaches disk or the committed [`Index`] until that write-set is committed.

use std::collections::BTreeMap;

use bp_core::entities::Entity;
use bp_core::enums::EntityKind;

use crate::index::{EntityLookup, Index};

/// Saves and deletes produced by one mutation, in commit order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSet {
    pub saves: Vec<Entity>,
    pub deletes: Vec<(EntityKind, String)>,
}

impl WriteSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.saves.is_empty() && self.deletes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.saves.len() + self.deletes.len()
    }

    /// `kind/id` labels for every write, for logging.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.saves
            .iter()
            .map(|e| format!("save {}/{}", e.kind(), e.id()))
            .chain(
                self.deletes
                    .iter()
                    .map(|(kind, id)| format!("delete {kind}/{id}")),
            )
            .collect()
    }
}

/// Pending changes layered over the committed index.
///
/// `None` marks a staged removal.
pub struct Staging<'a> {
    base: &'a Index,
    touched: BTreeMap<(EntityKind, String), Option<Entity>>,
}

impl<'a> Staging<'a> {
    #[must_use]
    pub const fn new(base: &'a Index) -> Self {
        Self {
            base,
            touched: BTreeMap::new(),
        }
    }

    /// Mutable handle on an entity, cloned from the index on first touch.
    pub fn get_mut(&mut self, kind: EntityKind, id: &str) -> Option<&mut Entity> {
        let key = (kind, id.to_string());
        if !self.touched.contains_key(&key) {
            let current = self.base.get(kind, id)?.clone();
            self.touched.insert(key.clone(), Some(current));
        }
        self.touched.get_mut(&key)?.as_mut()
    }

    /// Stage a new or replaced entity.
    pub fn put(&mut self, entity: Entity) {
        self.touched
            .insert((entity.kind(), entity.id().to_string()), Some(entity));
    }

    /// Stage a removal.
    pub fn remove(&mut self, kind: EntityKind, id: &str) {
        self.touched.insert((kind, id.to_string()), None);
    }

    /// Everything that differs from the index: changed entities are saved,
    /// removed ones that the index holds are deleted.
    #[must_use]
    pub fn into_write_set(self) -> WriteSet {
        let mut writes = WriteSet::default();
        for ((kind, id), staged) in self.touched {
            match staged {
                Some(entity) => {
                    if self.base.get(kind, &id) != Some(&entity) {
                        writes.saves.push(entity);
                    }
                }
                None => {
                    if self.base.exists(kind, &id) {
                        writes.deletes.push((kind, id));
                    }
                }
            }
        }
        writes
    }
}

impl EntityLookup for Staging<'_> {
    fn get(&self, kind: EntityKind, id: &str) -> Option<&Entity> {
        match self.touched.get(&(kind, id.to_string())) {
            Some(staged) => staged.as_ref(),
            None => self.base.get(kind, id),
        }
    }
}

//! Service layer: the owned store value every operation goes through.
//!
//! `Store` wraps the [`Index`], a [`Persistence`] backend, the
//! [`SchemaRegistry`], and the [`Journal`]. Repo and analytics methods are
//! implemented as `impl Store` blocks in their own modules.

use std::path::PathBuf;

use bp_config::{AnalyticsConfig, BlueprintConfig};
use bp_core::journal::JournalEntry;
use bp_schema::SchemaRegistry;
use tracing::{debug, error, info, warn};

use crate::error::StoreError;
use crate::index::Index;
use crate::journal::Journal;
use crate::persistence::{FsPersistence, Persistence};
use crate::staging::WriteSet;

/// Every mutation follows the same protocol:
/// 1. Stage changes over the index and collect the write-set
/// 2. Persist every save, then every delete
/// 3. Apply the write-set to the index
/// 4. Append a journal entry
pub struct Store {
    index: Index,
    persistence: Box<dyn Persistence>,
    schema: SchemaRegistry,
    journal: Journal,
    low_coverage_threshold: usize,
}

impl Store {
    /// Open a store rooted at `root` with journaling off.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if loading the documents fails.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::with_persistence(Box::new(FsPersistence::new(root)), Journal::disabled())
    }

    /// Open a store as described by the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the journal directory cannot be created or
    /// loading the documents fails.
    pub fn from_config(config: &BlueprintConfig) -> Result<Self, StoreError> {
        let journal = match config.store.journal_dir_if_enabled() {
            Some(dir) => Journal::new(dir)?,
            None => Journal::disabled(),
        };
        let mut store =
            Self::with_persistence(Box::new(FsPersistence::new(&config.store.root)), journal)?;
        store.set_low_coverage_threshold(config.analytics.low_coverage_threshold);
        Ok(store)
    }

    /// Build a store over any persistence backend and load it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if loading the documents fails.
    pub fn with_persistence(
        persistence: Box<dyn Persistence>,
        journal: Journal,
    ) -> Result<Self, StoreError> {
        let index = Index::load_all(persistence.as_ref())?;
        Ok(Self {
            index,
            persistence,
            schema: SchemaRegistry::new(),
            journal,
            low_coverage_threshold: AnalyticsConfig::default().low_coverage_threshold,
        })
    }

    /// Discard the index and reload it from disk.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if loading fails; the previous index is kept.
    pub fn refresh(&mut self) -> Result<(), StoreError> {
        self.index = Index::load_all(self.persistence.as_ref())?;
        info!(entities = self.index.len(), "store refreshed");
        Ok(())
    }

    #[must_use]
    pub const fn index(&self) -> &Index {
        &self.index
    }

    #[must_use]
    pub const fn schema(&self) -> &SchemaRegistry {
        &self.schema
    }

    #[must_use]
    pub const fn journal(&self) -> &Journal {
        &self.journal
    }

    #[must_use]
    pub const fn low_coverage_threshold(&self) -> usize {
        self.low_coverage_threshold
    }

    pub const fn set_low_coverage_threshold(&mut self, threshold: usize) {
        self.low_coverage_threshold = threshold;
    }

    /// Persist a write-set, then make it visible in the index.
    ///
    /// The index is only touched once every write has succeeded. A failure
    /// part way through leaves the files written so far on disk; they are
    /// logged so the torn state can be found and `refresh` will surface it.
    pub(crate) fn commit(&mut self, writes: &WriteSet, entry: JournalEntry) -> Result<(), StoreError> {
        if writes.is_empty() {
            debug!(op = %entry.op, kind = %entry.kind, id = %entry.id, "nothing to commit");
            return Ok(());
        }

        for (done, result) in self.persist(writes).enumerate() {
            if let Err(e) = result {
                let unapplied = &writes.labels()[done..];
                error!(
                    error = %e,
                    written = done,
                    ?unapplied,
                    "commit failed part way; disk may be inconsistent until repaired"
                );
                return Err(e);
            }
        }

        self.index.apply(writes);
        debug!(op = %entry.op, kind = %entry.kind, id = %entry.id, writes = writes.len(), "committed");

        if let Err(e) = self.journal.append_validated(&entry, &self.schema) {
            warn!(error = %e, "failed to append journal entry");
        }
        Ok(())
    }

    fn persist<'w>(
        &'w self,
        writes: &'w WriteSet,
    ) -> impl Iterator<Item = Result<(), StoreError>> + 'w {
        let saves = writes.saves.iter().map(|e| self.persistence.save(e));
        let deletes = writes
            .deletes
            .iter()
            .map(|(kind, id)| self.persistence.delete(*kind, id));
        saves.chain(deletes)
    }
}

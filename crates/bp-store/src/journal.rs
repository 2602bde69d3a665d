//! JSONL change journal.
//!
//! Appends one `JournalEntry` per committed mutation to per-day
//! `{journal_dir}/{yyyy-mm-dd}.jsonl` files using
//! `serde_jsonlines::append_json_lines`. The journal is history only; nothing
//! reads it back into the store.

use std::path::{Path, PathBuf};

use bp_core::enums::{EntityKind, JournalOp};
use bp_core::journal::JournalEntry;
use bp_schema::SchemaRegistry;
use chrono::{DateTime, Utc};

use crate::error::StoreError;

pub struct Journal {
    dir: PathBuf,
    enabled: bool,
}

impl Journal {
    /// Journal writing into `dir`, created if missing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn new(dir: PathBuf) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;
        Ok(Self { dir, enabled: true })
    }

    /// A journal that records nothing.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            dir: PathBuf::new(),
            enabled: false,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that entries stamped at `at` land in.
    #[must_use]
    pub fn file_for(&self, at: DateTime<Utc>) -> PathBuf {
        self.dir.join(format!("{}.jsonl", at.format("%Y-%m-%d")))
    }

    /// Append an entry to the file for its day.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file write fails.
    pub fn append(&self, entry: &JournalEntry) -> Result<(), StoreError> {
        if !self.enabled {
            return Ok(());
        }

        let at = DateTime::parse_from_rfc3339(&entry.ts)
            .map_or_else(|_| Utc::now(), |ts| ts.with_timezone(&Utc));
        let path = self.file_for(at);
        serde_jsonlines::append_json_lines(&path, [entry]).map_err(|e| StoreError::io(&path, e))?;
        Ok(())
    }

    /// Append, first checking a `create` payload against its kind's schema.
    ///
    /// Schema failures are logged, never fatal: the document was already
    /// accepted by the store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file write fails.
    pub fn append_validated(
        &self,
        entry: &JournalEntry,
        schema: &SchemaRegistry,
    ) -> Result<(), StoreError> {
        if !self.enabled {
            return Ok(());
        }

        if entry.op == JournalOp::Create {
            if let Err(e) = schema.validate(entry.kind.as_str(), &entry.data) {
                tracing::warn!(kind = %entry.kind, id = %entry.id, error = %e, "journal payload failed validation");
            }
        }

        self.append(entry)
    }
}

/// Build an entry stamped now.
#[must_use]
pub fn entry(op: JournalOp, kind: EntityKind, id: &str, data: serde_json::Value) -> JournalEntry {
    JournalEntry {
        v: 1,
        ts: Utc::now().to_rfc3339(),
        op,
        kind,
        id: id.to_string(),
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn disabled_journal_writes_nothing() {
        let journal = Journal::disabled();
        assert!(!journal.is_enabled());
        journal
            .append(&entry(JournalOp::Delete, EntityKind::View, "board", json!(null)))
            .unwrap();
    }

    #[test]
    fn entries_land_in_daily_file() {
        let dir = TempDir::new().unwrap();
        let journal = Journal::new(dir.path().join("journal")).unwrap();

        let mut first = entry(JournalOp::Create, EntityKind::Persona, "admin", json!({"id": "admin", "name": "Admin"}));
        first.ts = "2026-03-01T09:00:00+00:00".into();
        let mut second = entry(JournalOp::Delete, EntityKind::Persona, "admin", json!({"force": false}));
        second.ts = "2026-03-01T17:30:00+00:00".into();

        journal.append_validated(&first, &SchemaRegistry::new()).unwrap();
        journal.append(&second).unwrap();

        let path = dir.path().join("journal/2026-03-01.jsonl");
        let read: Vec<JournalEntry> = serde_jsonlines::json_lines(&path)
            .unwrap()
            .collect::<std::io::Result<_>>()
            .unwrap();
        assert_eq!(read, vec![first, second]);
    }
}

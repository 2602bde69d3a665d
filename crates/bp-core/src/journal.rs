//! JSONL change-journal envelope.
//!
//! When journaling is enabled every committed mutation is recorded as a
//! `JournalEntry` in a per-day `{journal_dir}/{yyyy-mm-dd}.jsonl` file. The
//! journal is history only; the store never replays it.
//!
//! The `v` field supports format versioning: entries without a `v` field
//! deserialize with `v == 1` via `#[serde(default)]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, JournalOp};

/// Default journal version for entries written before versioning.
const fn default_journal_version() -> u32 {
    1
}

/// A single committed mutation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct JournalEntry {
    /// Format version. Defaults to 1 when absent.
    #[serde(default = "default_journal_version")]
    pub v: u32,

    /// ISO 8601 timestamp of the commit.
    pub ts: String,

    /// What kind of mutation this represents.
    pub op: JournalOp,

    /// Kind of the primary entity.
    pub kind: EntityKind,

    /// ID of the primary entity.
    pub id: String,

    /// Operation payload: the created document, the update patch, the link
    /// endpoints, or what a delete scrubbed and removed.
    pub data: serde_json::Value,
}

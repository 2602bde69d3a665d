//! Document store location and journaling.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_root() -> PathBuf {
    PathBuf::from("design")
}

fn default_journal_dir() -> PathBuf {
    PathBuf::from(".blueprint/journal")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Directory holding one sub-directory per entity kind.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Whether committed mutations are appended to the JSONL change journal.
    #[serde(default)]
    pub journal: bool,

    /// Directory for journal files.
    #[serde(default = "default_journal_dir")]
    pub journal_dir: PathBuf,
}

impl StoreConfig {
    /// Journal directory when journaling is enabled.
    #[must_use]
    pub fn journal_dir_if_enabled(&self) -> Option<PathBuf> {
        self.journal.then(|| self.journal_dir.clone())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            journal: false,
            journal_dir: default_journal_dir(),
        }
    }
}

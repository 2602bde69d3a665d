//! Persistence adapter: one pretty-printed JSON file per entity.
//!
//! Layout is `{root}/{kind.directory()}/{id}.json`. The store only ever talks
//! to the [`Persistence`] trait, so tests can swap in an in-memory or failing
//! backend.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bp_core::entities::Entity;
use bp_core::enums::EntityKind;
use tracing::{debug, warn};

use crate::error::StoreError;

/// Load, save, and delete documents for one store root.
pub trait Persistence {
    /// Every readable document of `kind`. A missing directory yields an empty
    /// list.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory exists but cannot be read.
    fn load(&self, kind: EntityKind) -> Result<Vec<Entity>, StoreError>;

    /// Fully overwrite the document for `entity`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` or `StoreError::Serialization` on failure.
    fn save(&self, entity: &Entity) -> Result<(), StoreError>;

    /// Remove a document. Succeeds when the document is already absent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file exists but cannot be removed.
    fn delete(&self, kind: EntityKind, id: &str) -> Result<(), StoreError>;
}

/// Filesystem-backed persistence.
#[derive(Debug, Clone)]
pub struct FsPersistence {
    root: PathBuf,
}

impl FsPersistence {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding every document of `kind`.
    #[must_use]
    pub fn kind_dir(&self, kind: EntityKind) -> PathBuf {
        self.root.join(kind.directory())
    }

    /// File path for one document.
    #[must_use]
    pub fn document_path(&self, kind: EntityKind, id: &str) -> PathBuf {
        self.kind_dir(kind).join(format!("{id}.json"))
    }

    fn read_document(kind: EntityKind, path: &Path) -> Option<Entity> {
        let stem = path.file_stem().and_then(|s| s.to_str())?;

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable document");
                return None;
            }
        };

        let entity = serde_json::from_str(&text)
            .map_err(|e| e.to_string())
            .and_then(|value| Entity::from_value(kind, value).map_err(|e| e.to_string()));

        match entity {
            Ok(entity) if entity.id() == stem => Some(entity),
            Ok(entity) => {
                warn!(
                    path = %path.display(),
                    id = entity.id(),
                    "skipping document whose id does not match its file name"
                );
                None
            }
            Err(reason) => {
                warn!(path = %path.display(), %reason, "skipping malformed document");
                None
            }
        }
    }
}

impl Persistence for FsPersistence {
    fn load(&self, kind: EntityKind) -> Result<Vec<Entity>, StoreError> {
        let dir = self.kind_dir(kind);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(dir, e)),
        };

        let mut entities = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| StoreError::io(&dir, e))?.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            if let Some(entity) = Self::read_document(kind, &path) {
                entities.push(entity);
            }
        }

        debug!(%kind, count = entities.len(), "loaded documents");
        Ok(entities)
    }

    fn save(&self, entity: &Entity) -> Result<(), StoreError> {
        let dir = self.kind_dir(entity.kind());
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;

        let mut text = serde_json::to_string_pretty(entity)?;
        text.push('\n');

        // Write beside the target and rename so a reader never sees half a file.
        let path = self.document_path(entity.kind(), entity.id());
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, text).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| StoreError::io(&path, e))?;
        Ok(())
    }

    fn delete(&self, kind: EntityKind, id: &str) -> Result<(), StoreError> {
        let path = self.document_path(kind, id);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bp_core::entities::{Capability, Workflow};
    use bp_core::enums::{CapabilityStatus, WorkflowStatus};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn capability(id: &str) -> Entity {
        Entity::from(Capability {
            id: id.into(),
            name: "Search".into(),
            description: None,
            category: Some("discovery".into()),
            status: CapabilityStatus::Planned,
            used_by_workflows: vec!["W1".into()],
            implemented_by_components: vec![],
        })
    }

    #[test]
    fn missing_directory_loads_empty() {
        let dir = TempDir::new().unwrap();
        let fs = FsPersistence::new(dir.path());
        assert!(fs.load(EntityKind::Persona).unwrap().is_empty());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = TempDir::new().unwrap();
        let fs = FsPersistence::new(dir.path());
        let cap = capability("cap-a");

        fs.save(&cap).unwrap();
        assert!(dir.path().join("capabilities/cap-a.json").exists());

        let loaded = fs.load(EntityKind::Capability).unwrap();
        assert_eq!(loaded, vec![cap]);
    }

    #[test]
    fn save_overwrites() {
        let dir = TempDir::new().unwrap();
        let fs = FsPersistence::new(dir.path());
        fs.save(&capability("cap-a")).unwrap();

        let mut updated = capability("cap-a");
        updated.refs_mut(bp_core::catalog::RefField::UsedByWorkflows).unwrap().clear();
        fs.save(&updated).unwrap();

        assert_eq!(fs.load(EntityKind::Capability).unwrap(), vec![updated]);
    }

    #[test]
    fn delete_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let fs = FsPersistence::new(dir.path());
        fs.save(&capability("cap-a")).unwrap();

        fs.delete(EntityKind::Capability, "cap-a").unwrap();
        fs.delete(EntityKind::Capability, "cap-a").unwrap();
        assert!(fs.load(EntityKind::Capability).unwrap().is_empty());
    }

    #[test]
    fn malformed_and_mismatched_documents_are_skipped() {
        let dir = TempDir::new().unwrap();
        let fs = FsPersistence::new(dir.path());
        fs.save(&capability("cap-a")).unwrap();

        let caps = dir.path().join("capabilities");
        std::fs::write(caps.join("broken.json"), "{ not json").unwrap();
        std::fs::write(caps.join("notes.txt"), "ignored").unwrap();
        std::fs::write(
            caps.join("cap-b.json"),
            r#"{"id": "cap-c", "name": "Mismatched"}"#,
        )
        .unwrap();

        let loaded = fs.load(EntityKind::Capability).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id(), "cap-a");
    }

    #[test]
    fn documents_are_pretty_printed_without_empty_optionals() {
        let dir = TempDir::new().unwrap();
        let fs = FsPersistence::new(dir.path());
        let wf = Entity::from(Workflow {
            id: "W1".into(),
            name: "Checkout".into(),
            description: None,
            category: None,
            status: WorkflowStatus::Draft,
            requires_capabilities: vec![],
            personas: vec![],
            suggested_components: vec![],
        });
        fs.save(&wf).unwrap();

        let text = std::fs::read_to_string(fs.document_path(EntityKind::Workflow, "W1")).unwrap();
        assert!(text.contains("\n  \"name\": \"Checkout\""));
        assert!(!text.contains("description"));
    }
}

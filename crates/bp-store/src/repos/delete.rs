//! Entity deletion with dependent scrubbing.

use bp_core::enums::{EntityKind, JournalOp};
use bp_core::responses::{DeleteResult, Dependent, DependentField};
use serde_json::json;
use tracing::info;

use crate::error::StoreError;
use crate::journal;
use crate::relations::dependents_of;
use crate::service::Store;
use crate::staging::Staging;

impl Store {
    /// Delete an entity.
    ///
    /// Without `force`, any dependent blocks the delete and nothing changes.
    /// With `force`, every dependent list is scrubbed of the ID and every
    /// test result pinning the entity is removed, all in the same commit.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the entity does not exist
    /// - `HasDependents` listing every dependent when `force` is false
    /// - `Io` if a write fails
    pub fn delete(&mut self, kind: EntityKind, id: &str, force: bool) -> Result<DeleteResult, StoreError> {
        let dependents = dependents_of(self.index(), kind, id)?;
        if !dependents.is_empty() && !force {
            return Err(StoreError::HasDependents { dependents });
        }

        let (scrubbed, pinning): (Vec<Dependent>, Vec<Dependent>) = dependents
            .into_iter()
            .partition(|d| matches!(d.field, DependentField::Ref(_)));

        let mut staging = Staging::new(self.index());
        for dependent in &scrubbed {
            if let DependentField::Ref(field) = dependent.field {
                if let Some(ids) = staging
                    .get_mut(dependent.kind, &dependent.id)
                    .and_then(|e| e.refs_mut(field))
                {
                    ids.retain(|existing| existing != id);
                }
            }
        }
        // A pinned ID cannot be emptied, so the pinning entity goes too.
        let mut removed_test_results: Vec<String> =
            pinning.into_iter().map(|d| d.id).collect();
        removed_test_results.dedup();
        for result_id in &removed_test_results {
            staging.remove(EntityKind::TestResult, result_id);
        }
        staging.remove(kind, id);
        let writes = staging.into_write_set();

        let data = json!({
            "force": force,
            "scrubbed": &scrubbed,
            "removed_test_results": &removed_test_results,
        });
        self.commit(&writes, journal::entry(JournalOp::Delete, kind, id, data))?;
        info!(
            %kind,
            %id,
            scrubbed = scrubbed.len(),
            removed = removed_test_results.len(),
            "deleted"
        );

        Ok(DeleteResult {
            kind,
            id: id.to_string(),
            scrubbed,
            removed_test_results,
        })
    }
}

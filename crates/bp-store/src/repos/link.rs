//! Explicit link and unlink between two entities.

use bp_core::catalog::{RelationSpec, relationship_mapping};
use bp_core::enums::{EntityKind, JournalOp, Relation};
use bp_core::responses::{LinkChange, LinkResult};
use serde_json::json;

use crate::error::StoreError;
use crate::journal;
use crate::relations;
use crate::service::Store;
use crate::staging::Staging;

impl Store {
    /// Record `from -[relation]-> to` on both sides.
    ///
    /// # Errors
    ///
    /// - `UnknownRelationship` if the triple is not in the table
    /// - `NotFound` naming whichever side is missing
    /// - `StructuralInvalid` for a component depending on itself
    /// - `Io` if a write fails
    pub fn link(
        &mut self,
        from_kind: EntityKind,
        from_id: &str,
        to_kind: EntityKind,
        to_id: &str,
        relation: Relation,
    ) -> Result<LinkResult, StoreError> {
        let spec = relationship_mapping(from_kind, to_kind, relation)?;
        self.apply_link(spec, from_id, to_id, JournalOp::Link, relations::link)
    }

    /// Remove `from -[relation]-> to` from both sides. Removing a link that
    /// does not exist succeeds with `LinkChange::Unchanged`.
    ///
    /// # Errors
    ///
    /// - `UnknownRelationship` if the triple is not in the table
    /// - `NotFound` naming whichever side is missing
    /// - `Io` if a write fails
    pub fn unlink(
        &mut self,
        from_kind: EntityKind,
        from_id: &str,
        to_kind: EntityKind,
        to_id: &str,
        relation: Relation,
    ) -> Result<LinkResult, StoreError> {
        let spec = relationship_mapping(from_kind, to_kind, relation)?;
        self.apply_link(spec, from_id, to_id, JournalOp::Unlink, relations::unlink)
    }

    fn apply_link(
        &mut self,
        spec: RelationSpec,
        from_id: &str,
        to_id: &str,
        op: JournalOp,
        step: fn(&mut Staging<'_>, RelationSpec, &str, &str) -> Result<LinkChange, StoreError>,
    ) -> Result<LinkResult, StoreError> {
        let mut staging = Staging::new(self.index());
        let change = step(&mut staging, spec, from_id, to_id)?;
        let writes = staging.into_write_set();

        let data = json!({
            "relation": spec.relation,
            "to_kind": spec.to,
            "to_id": to_id,
        });
        self.commit(&writes, journal::entry(op, spec.from, from_id, data))?;

        Ok(LinkResult {
            relation: spec.relation,
            from_kind: spec.from,
            from_id: from_id.to_string(),
            to_kind: spec.to,
            to_id: to_id.to_string(),
            change,
        })
    }
}

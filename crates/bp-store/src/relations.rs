//! Relationship engine.
//!
//! `link` and `unlink` are the only code paths that touch reverse fields.
//! Both operate on a [`Staging`] overlay; the caller commits the resulting
//! write-set.

use bp_core::catalog::{RefField, RelationSpec, fields_for, relation_for_field, relation_spec};
use bp_core::entities::Entity;
use bp_core::enums::{EntityKind, Relation};
use bp_core::responses::{Dependency, Dependent, LinkChange};

use crate::error::StoreError;
use crate::index::{EntityLookup, Index};
use crate::staging::Staging;

/// Check that every forward reference and pinned reference resolves.
///
/// # Errors
///
/// Returns `StoreError::MissingReference` naming the first unresolved ID.
pub fn validate_references(lookup: &impl EntityLookup, entity: &Entity) -> Result<(), StoreError> {
    check_fields(lookup, entity, fields_for(entity.kind()).forward)?;
    validate_pinned(lookup, entity)
}

/// Check that every reverse-field seed on a new entity resolves.
///
/// # Errors
///
/// Returns `StoreError::MissingReference` naming the first unresolved ID.
pub fn validate_seeds(lookup: &impl EntityLookup, entity: &Entity) -> Result<(), StoreError> {
    check_fields(lookup, entity, fields_for(entity.kind()).reverse)
}

/// Check single-ID pinned references.
///
/// # Errors
///
/// Returns `StoreError::MissingReference` for the first missing target.
pub fn validate_pinned(lookup: &impl EntityLookup, entity: &Entity) -> Result<(), StoreError> {
    for pinned in entity.pinned_refs() {
        if !lookup.exists(pinned.kind, pinned.id) {
            return Err(missing(pinned.field.as_str(), pinned.kind, pinned.id));
        }
    }
    Ok(())
}

fn check_fields(
    lookup: &impl EntityLookup,
    entity: &Entity,
    fields: &[RefField],
) -> Result<(), StoreError> {
    for &field in fields {
        check_ids(lookup, field, entity.refs(field))?;
    }
    Ok(())
}

/// Check that each of `ids` names an existing entity of `field`'s target kind.
pub(crate) fn check_ids<'i>(
    lookup: &impl EntityLookup,
    field: RefField,
    ids: impl IntoIterator<Item = &'i String>,
) -> Result<(), StoreError> {
    let target = field.target();
    for id in ids {
        if !lookup.exists(target, id) {
            return Err(missing(field.as_str(), target, id));
        }
    }
    Ok(())
}

fn missing(field: &str, kind: EntityKind, id: &str) -> StoreError {
    StoreError::MissingReference {
        field: field.to_string(),
        referenced_kind: kind,
        missing_id: id.to_string(),
    }
}

/// Collapse duplicate IDs in every reference list, keeping first occurrences.
pub(crate) fn dedupe_refs(entity: &mut Entity) {
    for field in fields_for(entity.kind()).all() {
        if let Some(ids) = entity.refs_mut(field) {
            let mut seen = std::collections::HashSet::new();
            ids.retain(|id| seen.insert(id.clone()));
        }
    }
}

/// A component may not depend on itself.
pub(crate) fn reject_self_dependency(entity: &Entity) -> Result<(), StoreError> {
    let id = entity.id();
    if entity.refs(RefField::DependsOn).iter().any(|d| d == id)
        || entity.refs(RefField::Dependents).iter().any(|d| d == id)
    {
        return Err(StoreError::invalid(
            RefField::DependsOn.as_str(),
            "a component cannot depend on itself",
        ));
    }
    Ok(())
}

/// Add `to_id` to the source's forward field and `from_id` to the target's
/// reverse field. Idempotent.
///
/// # Errors
///
/// Returns `StoreError::NotFound` naming the missing side, or
/// `StoreError::StructuralInvalid` for a self-dependency.
pub fn link(
    staging: &mut Staging<'_>,
    spec: RelationSpec,
    from_id: &str,
    to_id: &str,
) -> Result<LinkChange, StoreError> {
    let (forward_has, reverse_has) = sides(staging, spec, from_id, to_id)?;
    if spec.relation == Relation::Depends && from_id == to_id {
        return Err(StoreError::invalid(
            spec.forward.as_str(),
            "a component cannot depend on itself",
        ));
    }
    if forward_has && reverse_has {
        return Ok(LinkChange::Unchanged);
    }

    if !forward_has {
        push_ref(staging, spec.from, from_id, spec.forward, to_id);
    }
    if !reverse_has {
        push_ref(staging, spec.to, to_id, spec.reverse, from_id);
    }
    Ok(LinkChange::Applied)
}

/// Remove the link from both sides. Unlinking an absent link is
/// `LinkChange::Unchanged`, not an error.
///
/// # Errors
///
/// Returns `StoreError::NotFound` naming the missing side.
pub fn unlink(
    staging: &mut Staging<'_>,
    spec: RelationSpec,
    from_id: &str,
    to_id: &str,
) -> Result<LinkChange, StoreError> {
    let (forward_has, reverse_has) = sides(staging, spec, from_id, to_id)?;
    if !forward_has && !reverse_has {
        return Ok(LinkChange::Unchanged);
    }

    if forward_has {
        strip_ref(staging, spec.from, from_id, spec.forward, to_id);
    }
    if reverse_has {
        strip_ref(staging, spec.to, to_id, spec.reverse, from_id);
    }
    Ok(LinkChange::Applied)
}

/// Whether each side already records the link.
fn sides(
    staging: &Staging<'_>,
    spec: RelationSpec,
    from_id: &str,
    to_id: &str,
) -> Result<(bool, bool), StoreError> {
    let from = staging
        .get(spec.from, from_id)
        .ok_or_else(|| StoreError::not_found(spec.from, from_id))?;
    let to = staging
        .get(spec.to, to_id)
        .ok_or_else(|| StoreError::not_found(spec.to, to_id))?;
    Ok((
        from.refs(spec.forward).iter().any(|id| id == to_id),
        to.refs(spec.reverse).iter().any(|id| id == from_id),
    ))
}

fn push_ref(staging: &mut Staging<'_>, kind: EntityKind, id: &str, field: RefField, value: &str) {
    if let Some(ids) = staging.get_mut(kind, id).and_then(|e| e.refs_mut(field)) {
        ids.push(value.to_string());
    }
}

fn strip_ref(staging: &mut Staging<'_>, kind: EntityKind, id: &str, field: RefField, value: &str) {
    if let Some(ids) = staging.get_mut(kind, id).and_then(|e| e.refs_mut(field)) {
        ids.retain(|existing| existing != value);
    }
}

/// Link through whichever side `field` sits on, with `owner_id` owning `field`.
pub(crate) fn link_field(
    staging: &mut Staging<'_>,
    field: RefField,
    owner_id: &str,
    other_id: &str,
) -> Result<LinkChange, StoreError> {
    let spec = relation_spec(relation_for_field(field));
    if field.is_reverse() {
        link(staging, spec, other_id, owner_id)
    } else {
        link(staging, spec, owner_id, other_id)
    }
}

/// Inverse of [`link_field`].
pub(crate) fn unlink_field(
    staging: &mut Staging<'_>,
    field: RefField,
    owner_id: &str,
    other_id: &str,
) -> Result<LinkChange, StoreError> {
    let spec = relation_spec(relation_for_field(field));
    if field.is_reverse() {
        unlink(staging, spec, other_id, owner_id)
    } else {
        unlink(staging, spec, owner_id, other_id)
    }
}

/// Every other entity whose forward, reverse, or pinned field names
/// `(kind, id)`.
///
/// This is both the delete warning and the exact work list for a forced
/// delete: list fields are scrubbed, pinning entities are removed.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if the entity does not exist.
pub fn dependents_of(index: &Index, kind: EntityKind, id: &str) -> Result<Vec<Dependent>, StoreError> {
    if !index.exists(kind, id) {
        return Err(StoreError::not_found(kind, id));
    }

    let mut dependents: Vec<Dependent> = index
        .iter()
        .filter(|other| !(other.kind() == kind && other.id() == id))
        .flat_map(|other| {
            other
                .all_refs()
                .filter(|(field, ref_id)| field.target() == kind && *ref_id == id)
                .map(|(field, _)| Dependent {
                    kind: other.kind(),
                    id: other.id().to_string(),
                    field: field.into(),
                })
                .chain(
                    other
                        .pinned_refs()
                        .into_iter()
                        .filter(|pinned| pinned.kind == kind && pinned.id == id)
                        .map(|pinned| Dependent {
                            kind: other.kind(),
                            id: other.id().to_string(),
                            field: pinned.field.into(),
                        }),
                )
                .collect::<Vec<_>>()
        })
        .collect();
    dependents.sort();
    dependents.dedup();
    Ok(dependents)
}

/// What `(kind, id)` itself references: forward fields then pinned references.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if the entity does not exist.
pub fn dependencies_of(
    index: &Index,
    kind: EntityKind,
    id: &str,
) -> Result<Vec<Dependency>, StoreError> {
    let entity = index
        .get(kind, id)
        .ok_or_else(|| StoreError::not_found(kind, id))?;

    let forward = fields_for(kind).forward.iter().flat_map(|&field| {
        entity.refs(field).iter().map(move |ref_id| Dependency {
            field: field.as_str().to_string(),
            kind: field.target(),
            id: ref_id.clone(),
        })
    });
    let pinned = entity.pinned_refs().into_iter().map(|p| Dependency {
        field: p.field.to_string(),
        kind: p.kind,
        id: p.id.to_string(),
    });
    Ok(forward.chain(pinned).collect())
}

//! ID syntax rules.
//!
//! Workflow IDs are upper-case alphanumeric segments joined by `-` (`W1`,
//! `ONB-01`). Every other kind uses lower-case kebab-case (`cap-a`,
//! `tokens-core`). IDs double as file names, so the alphabet is kept to
//! `[A-Za-z0-9-]`.

use bp_core::enums::EntityKind;

/// Longest accepted ID.
pub const MAX_ID_LEN: usize = 64;

/// Check that `id` is well formed for `kind`.
///
/// # Errors
///
/// Returns a human-readable reason when the ID is rejected.
pub fn check_id(kind: EntityKind, id: &str) -> Result<(), String> {
    if id.is_empty() {
        return Err("must not be empty".into());
    }
    if id.len() > MAX_ID_LEN {
        return Err(format!("must be at most {MAX_ID_LEN} characters"));
    }

    let upper = matches!(kind, EntityKind::Workflow);
    let segment_char = |c: char| {
        c.is_ascii_digit()
            || if upper {
                c.is_ascii_uppercase()
            } else {
                c.is_ascii_lowercase()
            }
    };

    let first_ok = id.chars().next().is_some_and(|c| {
        if upper {
            c.is_ascii_uppercase()
        } else {
            c.is_ascii_lowercase()
        }
    });
    let segments_ok = id
        .split('-')
        .all(|segment| !segment.is_empty() && segment.chars().all(segment_char));

    if first_ok && segments_ok {
        Ok(())
    } else if upper {
        Err(format!(
            "'{id}' is not a valid {kind} ID (expected upper-case segments like 'W1' or 'ONB-01')"
        ))
    } else {
        Err(format!(
            "'{id}' is not a valid {kind} ID (expected kebab-case like 'cap-a')"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(EntityKind::Workflow, "W1")]
    #[case(EntityKind::Workflow, "ONB-01")]
    #[case(EntityKind::Capability, "cap-a")]
    #[case(EntityKind::Component, "comp-x")]
    #[case(EntityKind::TestResult, "tr-2026-03-01")]
    fn accepts(#[case] kind: EntityKind, #[case] id: &str) {
        assert!(check_id(kind, id).is_ok(), "{id} should be valid for {kind}");
    }

    #[rstest]
    #[case(EntityKind::Workflow, "w1")]
    #[case(EntityKind::Workflow, "1W")]
    #[case(EntityKind::Capability, "Cap-A")]
    #[case(EntityKind::Capability, "cap--a")]
    #[case(EntityKind::Capability, "cap-a-")]
    #[case(EntityKind::Persona, "-admin")]
    #[case(EntityKind::Persona, "admin/../etc")]
    #[case(EntityKind::View, "")]
    fn rejects(#[case] kind: EntityKind, #[case] id: &str) {
        assert!(check_id(kind, id).is_err(), "{id:?} should be rejected for {kind}");
    }

    #[test]
    fn rejects_overlong_ids() {
        let id = "a".repeat(MAX_ID_LEN + 1);
        assert!(check_id(EntityKind::Capability, &id).is_err());
    }
}

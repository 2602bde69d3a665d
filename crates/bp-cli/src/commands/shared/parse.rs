use bp_core::enums::{EntityKind, Relation};
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

pub fn parse_kind(raw: &str) -> anyhow::Result<EntityKind> {
    parse_enum(raw, "kind")
}

pub fn parse_relation(raw: &str) -> anyhow::Result<Relation> {
    parse_enum(raw, "relation")
}

#[cfg(test)]
mod tests {
    use bp_core::enums::{EntityKind, Relation};

    use super::{parse_enum, parse_kind, parse_relation};

    #[test]
    fn parses_snake_case_enum() {
        let kind: EntityKind = parse_enum("token_set", "kind").expect("kind should parse");
        assert_eq!(kind, EntityKind::TokenSet);
    }

    #[test]
    fn parses_hyphenated_alias() {
        assert_eq!(
            parse_kind("interaction-pattern").expect("kind should parse"),
            EntityKind::InteractionPattern
        );
        assert_eq!(parse_kind("test-result").expect("kind should parse"), EntityKind::TestResult);
    }

    #[test]
    fn parses_relation() {
        assert_eq!(parse_relation("implements").expect("relation should parse"), Relation::Implements);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_kind("widget").expect_err("should fail");
        assert!(err.to_string().contains("invalid kind 'widget'"));
    }
}

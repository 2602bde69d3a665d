//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed working directories and env vars.

use std::path::PathBuf;

use bp_config::{BlueprintConfig, ConfigError};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_store_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[store]
root = "docs/design"
journal = true
journal_dir = "history"
"#,
        )?;

        let config: BlueprintConfig =
            Figment::from(Serialized::defaults(BlueprintConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract()?;

        assert_eq!(config.store.root, PathBuf::from("docs/design"));
        assert!(config.store.journal);
        assert_eq!(config.store.journal_dir, PathBuf::from("history"));
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[analytics]
low_coverage_threshold = 5
",
        )?;

        let config: BlueprintConfig =
            Figment::from(Serialized::defaults(BlueprintConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract()?;

        assert_eq!(config.analytics.low_coverage_threshold, 5);
        assert_eq!(config.general.default_limit, 50);
        assert_eq!(config.store.root, PathBuf::from("design"));
        assert!(!config.store.journal);
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".blueprint")?;
        jail.create_file(
            ".blueprint/config.toml",
            r#"
[store]
root = "design-docs"
"#,
        )?;

        let config = BlueprintConfig::load().expect("config loads");
        assert_eq!(config.store.root, PathBuf::from("design-docs"));
        Ok(())
    });
}

#[test]
fn invalid_limit_in_project_config_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_dir(".blueprint")?;
        jail.create_file(
            ".blueprint/config.toml",
            r"
[general]
default_limit = 0
",
        )?;

        let err = BlueprintConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".blueprint")?;
        jail.create_file(".blueprint/config.toml", "[store\nroot = ")?;

        let err = BlueprintConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}

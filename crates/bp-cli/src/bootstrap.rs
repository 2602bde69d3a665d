use anyhow::Context;
use bp_config::BlueprintConfig;
use figment::providers::Serialized;

use crate::cli::GlobalFlags;

/// Load layered configuration, applying `.env` and the `--root` override.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<BlueprintConfig> {
    if let Err(error) = dotenvy::dotenv() {
        if !error.not_found() {
            tracing::warn!(%error, "failed to read .env");
        }
    }

    let mut figment = BlueprintConfig::figment();
    if let Some(root) = &flags.root {
        figment = figment.merge(Serialized::default("store.root", root));
    }

    let config = BlueprintConfig::from_figment(&figment).context("failed to load configuration")?;
    tracing::debug!(root = %config.store.root.display(), journal = config.store.journal, "config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::load_config;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(root: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            root: root.map(PathBuf::from),
        }
    }

    #[test]
    fn root_flag_overrides_config_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".blueprint")?;
            jail.create_file(".blueprint/config.toml", "[store]\nroot = \"from-file\"\n")?;

            let config = load_config(&flags(Some("from-flag"))).expect("config should load");
            assert_eq!(config.store.root, PathBuf::from("from-flag"));
            Ok(())
        });
    }

    #[test]
    fn config_file_used_without_flag() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".blueprint")?;
            jail.create_file(".blueprint/config.toml", "[store]\nroot = \"from-file\"\n")?;

            let config = load_config(&flags(None)).expect("config should load");
            assert_eq!(config.store.root, PathBuf::from("from-file"));
            Ok(())
        });
    }
}

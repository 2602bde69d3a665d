//! # bp-config
//!
//! Layered configuration loading for Blueprint using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`BLUEPRINT_*` prefix, `__` as separator)
//! 2. Project-level `.blueprint/config.toml`
//! 3. User-level `~/.config/blueprint/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `BLUEPRINT_STORE__ROOT` -> `store.root`,
//! `BLUEPRINT_ANALYTICS__LOW_COVERAGE_THRESHOLD` ->
//! `analytics.low_coverage_threshold`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use bp_config::BlueprintConfig;
//!
//! let config = BlueprintConfig::load_with_dotenv().expect("config");
//! println!("documents live under {}", config.store.root.display());
//! ```

mod analytics;
mod error;
mod general;
mod store;

pub use analytics::AnalyticsConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".blueprint/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BlueprintConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl BlueprintConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or merged,
    /// or `ConfigError::InvalidValue` if a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and check a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so callers can layer extra providers (CLI flags) on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("BLUEPRINT_").split("__"))
    }

    /// Reject values that parse but make no sense.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.root.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.root".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.store.journal && self.store.journal_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.journal_dir".into(),
                reason: "must not be empty when journaling is enabled".into(),
            });
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("blueprint").join("config.toml"))
    }
}

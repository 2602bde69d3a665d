use bp_config::BlueprintConfig;
use bp_store::Store;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub store: Store,
    pub config: BlueprintConfig,
}

impl AppContext {
    /// Open the store described by `config`.
    pub fn init(config: BlueprintConfig) -> anyhow::Result<Self> {
        let store = Store::from_config(&config)?;
        tracing::debug!(entities = store.index().len(), "store opened");
        Ok(Self { store, config })
    }
}

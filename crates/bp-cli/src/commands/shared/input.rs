use std::path::Path;

use anyhow::Context;
use serde_json::Value;

/// Read a JSON document given inline or as `@path`.
pub fn read_document(raw: &str) -> anyhow::Result<Value> {
    match raw.strip_prefix('@') {
        Some(path) => {
            let path = Path::new(path);
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("{} is not valid JSON", path.display()))
        }
        None => serde_json::from_str(raw).context("document is not valid JSON"),
    }
}

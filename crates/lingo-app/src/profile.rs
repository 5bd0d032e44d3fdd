use std::fs;
use std::path::Path;

use anyhow::Context;
use lingo_config::Config;
use lingo_core::WordformRecord;

/// Defaults, then the optional file, then environment overrides.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    config.apply_env();
    Ok(config)
}

/// Read a JSON array of wordform records
pub fn load_wordforms(path: &Path) -> anyhow::Result<Vec<WordformRecord>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read wordforms {}", path.display()))?;
    let records: Vec<WordformRecord> = serde_json::from_str(&data)
        .with_context(|| format!("invalid wordforms file {}", path.display()))?;
    tracing::info!("Loaded {} wordforms from {}", records.len(), path.display());
    Ok(records)
}

use std::path::Path;

use nestguard_shared::config::GuardConfig;
use tracing::info;

use crate::error::{GuardError, Result};

/// Reads the JSON credentials file.
pub fn load(path: impl AsRef<Path>) -> Result<GuardConfig> {
    let path = path.as_ref();
    info!("Loading config from: {:?}", path);

    let contents = std::fs::read_to_string(path)
        .map_err(|e| GuardError::Config(format!("failed to read {}: {e}", path.display())))?;
    let config: GuardConfig = serde_json::from_str(&contents)
        .map_err(|e| GuardError::Config(format!("failed to parse {}: {e}", path.display())))?;

    Ok(config)
}

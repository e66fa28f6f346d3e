use std::path::Path;

use crate::error::AppError;
use crate::models::SearchConfig;

/// Load and parse the JSON config file.
///
/// A missing file is a `ConfigError` naming the path, so the CLI can turn
/// it into a clean "skip today" exit for cron-style invocation.
pub fn load_config(path: &Path) -> Result<SearchConfig, AppError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|_| AppError::ConfigError(format!("Config not found at {}", path.display())))?;

    serde_json::from_str(&raw).map_err(|e| {
        AppError::ConfigError(format!("Invalid JSON in {}: {}", path.display(), e))
    })
}

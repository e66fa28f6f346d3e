use std::collections::HashSet;
use std::path::Path;

use crate::error::AppError;

/// Load the seen-URL history file: one URL per line, blank lines ignored.
///
/// A missing file means a first run and yields an empty set. This pipeline
/// only reads the file; appending newly seen URLs after the run is an
/// external collaborator's responsibility.
pub fn load_history(path: &Path) -> Result<HashSet<String>, AppError> {
    if !path.exists() {
        return Ok(HashSet::new());
    }

    let raw = std::fs::read_to_string(path)?;
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

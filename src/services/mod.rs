// Services module for business logic
pub mod meeting_creator;
pub mod meeting_store;
pub mod session;
pub mod user_registry;

use std::fs;
use std::path::Path;
use serde::de::DeserializeOwned;
use crate::utils::error::{AgendaError, Result};

/// Read a JSON data file, treating a missing file as `None`
pub(crate) fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        log::debug!("{} not found, treating as empty", path.display());
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| AgendaError::StorageError(
            format!("Failed to read {}: {}", path.display(), e)
        ))?;

    let value = serde_json::from_str(&content)
        .map_err(|e| AgendaError::StorageError(
            format!("Invalid JSON in {}: {}", path.display(), e)
        ))?;

    log::debug!("loaded {}", path.display());
    Ok(Some(value))
}

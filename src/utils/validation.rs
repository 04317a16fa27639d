// Common validation utilities for agenda CLI commands

use crate::utils::error::{CreationError, Result};

/// Reject an empty flag value, naming the flag the user has to supply
pub fn validate_required(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CreationError::MissingField(field).into());
    }

    Ok(())
}

/// Split a raw participant list exactly as typed: on every comma, no trimming.
/// `"bob,,carol"` yields an empty middle entry, which later fails the user
/// lookup.
pub fn split_participants(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

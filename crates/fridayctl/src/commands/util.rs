//! Shared helpers for command handlers.

use std::path::Path;

use fridayctl_core::{Assistant, CoreError};

use crate::error::CliError;

/// Map a core error through the device URL for connection diagnostics.
pub fn map_core(err: CoreError, assistant: &Assistant) -> CliError {
    CliError::from_core(err, assistant.api().base_url())
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Read and parse a JSON file into a typed value.
pub fn read_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::Validation {
        field: "file".into(),
        reason: format!("invalid JSON: {e}"),
    })
}

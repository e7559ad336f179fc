//! Subcommand implementations.

pub mod table;
pub mod tree;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CliError;

/// Read a JSON file that must hold an array.
fn load_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let json_error = |source| CliError::Json {
        path: path.to_path_buf(),
        source,
    };
    let value: Value = serde_json::from_str(&text).map_err(json_error)?;
    if !value.is_array() {
        return Err(CliError::NotAnArray(path.to_path_buf()));
    }
    serde_json::from_value(value).map_err(json_error)
}

//! Common utilities for output formatters

use serde::Serialize;

use crate::error::Result;

/// Serialize as pretty JSON
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Serialize as YAML, without the trailing newline
pub fn to_yaml<T: Serialize>(value: &T) -> Result<String> {
    let yaml = serde_yml::to_string(value)?;
    Ok(yaml.trim_end().to_string())
}

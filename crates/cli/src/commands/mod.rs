//! Command implementations.

pub mod component;
pub mod index;
pub mod simulate;

use anyhow::{Context, Result};
use std::path::Path;

/// Parse a template body from a JSON or YAML file, by extension.
pub(crate) fn read_body<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading template body from {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext, "yaml" | "yml"));

    let parsed = if is_yaml {
        serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing YAML template body from {}", path.display()))?
    } else {
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing JSON template body from {}", path.display()))?
    };
    Ok(parsed)
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

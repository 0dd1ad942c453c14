//! Simulate command: resolve the configuration an index name would get.
//!
//! Two modes share one output shape:
//! - Remote: ask the cluster's simulate endpoint.
//! - Offline (`--templates DIR`): build a local store from a directory of
//!   template files and run the resolver here, no cluster required.
//!
//! Offline directory layout: `component_templates/*.json` and
//! `index_templates/*.json`, one template body per file, named by file stem.

use anyhow::{Context, Result, bail};
use std::path::Path;
use templatectl_client::TemplateClient;
use templatectl_resolver::{TemplateStore, resolve_for};
use templatectl_types::{ComponentTemplateNode, IndexTemplate};
use tracing::{debug, info};

use crate::commands::print_json;

pub async fn run_remote(client: &TemplateClient, index_name: &str) -> Result<()> {
    let response = client.simulate_index(index_name).await?;
    print_json(&response)
}

pub fn run_offline(templates_dir: &Path, index_name: &str) -> Result<()> {
    let store = load_store(templates_dir)?;
    match resolve_for(&store, index_name)? {
        Some(resolved) => {
            info!(
                index = index_name,
                template = %resolved.template_name,
                "resolved index template"
            );
            print_json(&resolved)
        }
        None => {
            info!(index = index_name, "no index template matches, system defaults apply");
            print_json(&serde_json::Value::Null)
        }
    }
}

/// Build a template store from a local directory.
fn load_store(dir: &Path) -> Result<TemplateStore> {
    if !dir.is_dir() {
        bail!("template directory {} does not exist", dir.display());
    }

    let mut store = TemplateStore::new();

    for entry in template_files(&dir.join("component_templates"))? {
        let (name, raw) = entry;
        let node: ComponentTemplateNode = serde_json::from_str(&raw)
            .with_context(|| format!("parsing component template '{}'", name))?;
        store.put_component_template(name, node);
    }

    for entry in template_files(&dir.join("index_templates"))? {
        let (name, raw) = entry;
        let template: IndexTemplate = serde_json::from_str(&raw)
            .with_context(|| format!("parsing index template '{}'", name))?;
        store.put_index_template(name, template);
    }

    Ok(store)
}

/// Collect `(file stem, contents)` for every `*.json` file in a directory.
/// A missing directory contributes nothing.
fn template_files(dir: &Path) -> Result<Vec<(String, String)>> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "template subdirectory absent, skipping");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("reading template directory {}", dir.display()))?
    {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        files.push((stem.to_string(), raw));
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_store_rejects_missing_directory() {
        let err = load_store(Path::new("definitely/not/here")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}

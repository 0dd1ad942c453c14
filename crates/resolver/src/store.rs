//! In-memory template store.
//!
//! Holds the cluster's two template namespaces: component templates and
//! index templates. Both are administered the same way: created by an
//! explicit put, overwritten by a put with the same name, removed by an
//! explicit delete. References between the namespaces are by name only —
//! deleting a component template never touches the index templates that
//! reference it.

use std::collections::BTreeMap;

use templatectl_types::{ComponentTemplateNode, IndexTemplate};
use tracing::debug;

use crate::error::{Result, TemplateError};

/// A snapshot of the cluster's stored templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    component_templates: BTreeMap<String, ComponentTemplateNode>,
    index_templates: BTreeMap<String, IndexTemplate>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or overwrite a component template.
    pub fn put_component_template(&mut self, name: impl Into<String>, node: ComponentTemplateNode) {
        let name = name.into();
        debug!(name = %name, "storing component template");
        self.component_templates.insert(name, node);
    }

    pub fn get_component_template(&self, name: &str) -> Result<&ComponentTemplateNode> {
        self.component_templates
            .get(name)
            .ok_or_else(|| TemplateError::ComponentTemplateNotFound(name.to_string()))
    }

    /// Remove a component template. Index templates referencing it by name
    /// are left untouched.
    pub fn delete_component_template(&mut self, name: &str) -> Result<()> {
        debug!(name = %name, "deleting component template");
        self.component_templates
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| TemplateError::ComponentTemplateNotFound(name.to_string()))
    }

    /// All component templates, ordered by name.
    pub fn component_templates(&self) -> impl Iterator<Item = (&str, &ComponentTemplateNode)> {
        self.component_templates
            .iter()
            .map(|(name, node)| (name.as_str(), node))
    }

    /// Create or overwrite an index template.
    pub fn put_index_template(&mut self, name: impl Into<String>, template: IndexTemplate) {
        let name = name.into();
        debug!(name = %name, patterns = ?template.index_patterns, "storing index template");
        self.index_templates.insert(name, template);
    }

    pub fn get_index_template(&self, name: &str) -> Result<&IndexTemplate> {
        self.index_templates
            .get(name)
            .ok_or_else(|| TemplateError::IndexTemplateNotFound(name.to_string()))
    }

    pub fn delete_index_template(&mut self, name: &str) -> Result<()> {
        debug!(name = %name, "deleting index template");
        self.index_templates
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| TemplateError::IndexTemplateNotFound(name.to_string()))
    }

    /// All index templates, ordered by name.
    pub fn index_templates(&self) -> impl Iterator<Item = (&str, &IndexTemplate)> {
        self.index_templates
            .iter()
            .map(|(name, template)| (name.as_str(), template))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use templatectl_types::ComponentTemplateSummary;

    fn empty_node() -> ComponentTemplateNode {
        ComponentTemplateNode {
            template: ComponentTemplateSummary::default(),
            ..Default::default()
        }
    }

    #[test]
    fn test_put_overwrites() {
        let mut store = TemplateStore::new();
        store.put_component_template("settings", empty_node());

        let mut replacement = empty_node();
        replacement.version = Some(2);
        store.put_component_template("settings", replacement);

        let stored = store.get_component_template("settings").unwrap();
        assert_eq!(stored.version, Some(2));
        assert_eq!(store.component_templates().count(), 1);
    }

    #[test]
    fn test_get_and_delete_missing_fail() {
        let mut store = TemplateStore::new();
        assert_eq!(
            store.get_component_template("nope").unwrap_err(),
            TemplateError::ComponentTemplateNotFound("nope".to_string())
        );
        assert_eq!(
            store.delete_index_template("nope").unwrap_err(),
            TemplateError::IndexTemplateNotFound("nope".to_string())
        );
    }

    #[test]
    fn test_no_cascading_delete() {
        let mut store = TemplateStore::new();
        store.put_component_template("shared", empty_node());
        store.put_index_template(
            "logs",
            IndexTemplate {
                index_patterns: vec!["logs-*".to_string()],
                composed_of: vec!["shared".to_string()],
                ..Default::default()
            },
        );

        store.delete_component_template("shared").unwrap();

        // The referencing index template survives, reference and all.
        let template = store.get_index_template("logs").unwrap();
        assert_eq!(template.composed_of, vec!["shared"]);
    }

    #[test]
    fn test_listing_is_name_ordered() {
        let mut store = TemplateStore::new();
        store.put_component_template("zeta", empty_node());
        store.put_component_template("alpha", empty_node());

        let names: Vec<&str> = store.component_templates().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}

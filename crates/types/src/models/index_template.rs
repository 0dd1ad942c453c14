//! Index template models.
//!
//! An index template is a named rule applied when a new index or data stream
//! is created: its patterns determine applicability, its priority breaks
//! contention between matching templates, and its `composed_of` list names
//! the component templates merged into the final configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::aliases::Alias;
use super::common::{Metadata, VersionNumber};
use super::data_stream::{DataStreamOptionsTemplate, IndexTemplateDataStreamConfiguration};
use super::lifecycle::DataStreamLifecycle;
use super::mappings::TypeMapping;
use super::settings::IndexSettings;
use crate::serde_helpers::Nullable;

/// The body of an index template, as accepted by the put endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexTemplate {
    /// Glob-style name patterns (`*` wildcard) that select this template.
    pub index_patterns: Vec<String>,
    /// Ordered component template names. Merged in the order listed: the
    /// last entry has the highest precedence for overlapping fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub composed_of: Vec<String>,
    /// Inline configuration, merged after every composed component template
    /// and therefore taking final precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<IndexTemplateSummary>,
    /// External version tag; the cluster never generates or increments it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionNumber>,
    /// Selection rank among matching templates; absent means 0 (lowest).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_auto_create: Option<bool>,
    /// Presence, even as an empty object, means matching names are created
    /// as data streams instead of plain indices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_stream: Option<IndexTemplateDataStreamConfiguration>,
    /// Available on stack since 8.12.0 and on serverless.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Component template names allowed to be absent at apply time.
    /// Available on stack since 8.7.0 and on serverless.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_missing_component_templates: Option<Vec<String>>,
}

impl IndexTemplate {
    /// Effective priority: absent means 0.
    pub fn priority(&self) -> i64 {
        self.priority.unwrap_or(0)
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.unwrap_or(false)
    }

    pub fn allow_auto_create(&self) -> bool {
        self.allow_auto_create.unwrap_or(false)
    }

    /// True when `name` may be missing from the store without failing
    /// resolution.
    pub fn ignores_missing(&self, name: &str) -> bool {
        self.ignore_missing_component_templates
            .as_ref()
            .is_some_and(|names| names.iter().any(|n| n == name))
    }
}

/// Inline configuration carried directly on an index template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexTemplateSummary {
    /// Index aliases, or data stream aliases when the template has a
    /// `data_stream` block (those ignore the routing options).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<BTreeMap<String, Alias>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mappings: Option<TypeMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<IndexSettings>,
    /// Available on stack since 8.11.0 (stable) and on serverless.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<DataStreamLifecycle>,
    /// Tri-state: absent, explicit null, or a value.
    /// Available on stack since 8.19.0 (stable) and on serverless.
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub data_stream_options: Option<Nullable<DataStreamOptionsTemplate>>,
}

impl IndexTemplateSummary {
    pub fn is_empty(&self) -> bool {
        self.aliases.is_none()
            && self.mappings.is_none()
            && self.settings.is_none()
            && self.lifecycle.is_none()
            && self.data_stream_options.is_none()
    }
}

/// A stored index template, as returned by the get/list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedIndexTemplate {
    pub name: String,
    pub index_template: IndexTemplate,
}

/// Response body of the list endpoint (`GET /_index_template`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexTemplateListResponse {
    pub index_templates: Vec<NamedIndexTemplate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_defaults_to_zero() {
        let json = r#"{ "index_patterns": ["logs-*"] }"#;
        let parsed: IndexTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.priority, None);
        assert_eq!(parsed.priority(), 0);
        assert!(!parsed.is_deprecated());
        assert!(!parsed.allow_auto_create());
    }

    #[test]
    fn test_composed_of_order_preserved() {
        let json = r#"{
            "index_patterns": ["metrics-*"],
            "composed_of": ["mappings-component", "settings-component"],
            "priority": 100
        }"#;
        let parsed: IndexTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.composed_of,
            vec!["mappings-component", "settings-component"]
        );
        assert_eq!(parsed.priority(), 100);
    }

    #[test]
    fn test_empty_data_stream_block_is_significant() {
        let plain: IndexTemplate =
            serde_json::from_str(r#"{ "index_patterns": ["idx-*"] }"#).unwrap();
        assert!(plain.data_stream.is_none());

        let stream: IndexTemplate =
            serde_json::from_str(r#"{ "index_patterns": ["logs-*"], "data_stream": {} }"#).unwrap();
        assert!(stream.data_stream.is_some());

        // The empty block survives serialization.
        let out = serde_json::to_value(&stream).unwrap();
        assert_eq!(out["data_stream"], serde_json::json!({}));
    }

    #[test]
    fn test_ignores_missing() {
        let json = r#"{
            "index_patterns": ["logs-*"],
            "composed_of": ["x", "y"],
            "ignore_missing_component_templates": ["x"]
        }"#;
        let parsed: IndexTemplate = serde_json::from_str(json).unwrap();
        assert!(parsed.ignores_missing("x"));
        assert!(!parsed.ignores_missing("y"));
    }

    #[test]
    fn test_named_wrapper_roundtrip() {
        let json = r#"{
            "name": "logs",
            "index_template": {
                "index_patterns": ["logs-*"],
                "composed_of": [],
                "priority": 200
            }
        }"#;
        let parsed: NamedIndexTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.name, "logs");
        let back: NamedIndexTemplate =
            serde_json::from_str(&serde_json::to_string(&parsed).unwrap()).unwrap();
        assert_eq!(back, parsed);
    }
}

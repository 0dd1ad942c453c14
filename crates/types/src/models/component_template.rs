//! Component template models.
//!
//! A component template is a named, reusable fragment of index configuration
//! that index templates reference by name through `composed_of`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::aliases::AliasDefinition;
use super::common::{Metadata, VersionNumber};
use super::data_stream::DataStreamOptionsTemplate;
use super::lifecycle::DataStreamLifecycle;
use super::mappings::TypeMapping;
use super::settings::IndexSettings;
use crate::serde_helpers::Nullable;

/// A stored component template, as returned by the get/list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentTemplate {
    /// Unique name within the cluster's component template namespace.
    pub name: String,
    pub component_template: ComponentTemplateNode,
}

/// The body of a component template, as accepted by the put endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentTemplateNode {
    pub template: ComponentTemplateSummary,
    /// External version tag; the cluster never generates or increments it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionNumber>,
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Metadata>,
    /// Server default false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
}

impl ComponentTemplateNode {
    pub fn is_deprecated(&self) -> bool {
        self.deprecated.unwrap_or(false)
    }
}

/// The configuration fragment a component template contributes on merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentTemplateSummary {
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionNumber>,
    /// Settings keyed by index name scope (usually the single key `index`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<BTreeMap<String, IndexSettings>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mappings: Option<TypeMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<BTreeMap<String, AliasDefinition>>,
    /// Available on stack since 8.11.0 (stable) and on serverless.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<DataStreamLifecycle>,
    /// Tri-state: absent, explicit null, or a value. An explicit null clears
    /// the options contributed by earlier templates in a composition.
    /// Available on stack since 8.19.0 (stable) and on serverless.
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub data_stream_options: Option<Nullable<DataStreamOptionsTemplate>>,
}

/// Response body of the list endpoint (`GET /_component_template`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentTemplateListResponse {
    pub component_templates: Vec<ComponentTemplate>,
}

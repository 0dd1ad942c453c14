//! Simulate endpoint response models.

use serde::{Deserialize, Serialize};

use super::data_stream::IndexTemplateDataStreamConfiguration;
use super::index_template::IndexTemplateSummary;

/// Response of `POST /_index_template/_simulate_index/{name}`: the fully
/// merged configuration the cluster would use for that index name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulateIndexResponse {
    pub template: IndexTemplateSummary,
    /// Matching templates that lost selection on priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlapping: Option<Vec<OverlappingTemplate>>,
    /// Data stream flags of the winning template, when it has a
    /// `data_stream` block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_stream: Option<IndexTemplateDataStreamConfiguration>,
}

/// A matching-but-not-selected index template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlappingTemplate {
    pub name: String,
    pub index_patterns: Vec<String>,
}

//! Alias definition model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An alias to attach to indices created from a template.
///
/// When the owning index template carries a `data_stream` block these become
/// data stream aliases, which ignore the routing options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AliasDefinition {
    /// Query used to limit the documents the alias can access, verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    /// Routing value used for indexing operations against the alias.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_routing: Option<String>,
    /// Routing value used when the alias does not distinguish read/write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing: Option<String>,
    /// Routing value used for search operations against the alias.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_routing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_write_index: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
}

/// Alias shape used inside an index template's inline summary.
///
/// Identical on the wire to [`AliasDefinition`].
pub type Alias = AliasDefinition;

//! Index settings model.
//!
//! Settings bodies are open-ended: the cluster accepts hundreds of keys, and
//! numeric values may be written as JSON numbers or strings depending on the
//! producer. The common knobs are typed here; everything else is preserved
//! verbatim in a flattened catch-all map so a template round-trips without
//! losing unknown settings.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::serde_helpers::{opt_bool_from_string_or_bool, opt_u32_from_string_or_number};

/// Configuration options for an index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexSettings {
    /// Number of primary shards. Fixed at index creation.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "opt_u32_from_string_or_number"
    )]
    pub number_of_shards: Option<u32>,
    /// Number of replica shards per primary.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "opt_u32_from_string_or_number"
    )]
    pub number_of_replicas: Option<u32>,
    /// How often to make recent writes visible to search (e.g. `"30s"`, `"-1"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_interval: Option<String>,
    /// Hidden indices are excluded from wildcard expansion by default.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "opt_bool_from_string_or_bool"
    )]
    pub hidden: Option<bool>,
    /// Index mode (e.g. `"standard"`, `"logsdb"`, `"time_series"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Every other setting, preserved verbatim.
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

impl IndexSettings {
    /// True when no setting at all is present.
    pub fn is_empty(&self) -> bool {
        self.number_of_shards.is_none()
            && self.number_of_replicas.is_none()
            && self.refresh_interval.is_none()
            && self.hidden.is_none()
            && self.mode.is_none()
            && self.other.is_empty()
    }
}

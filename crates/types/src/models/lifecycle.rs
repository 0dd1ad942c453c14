//! Data stream lifecycle model.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Lifecycle configuration for the data streams a template produces.
///
/// Available on stack since 8.11.0 (stable) and on serverless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataStreamLifecycle {
    /// How long documents are retained, as a duration string (e.g. `"7d"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_retention: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downsampling: Option<DataStreamLifecycleDownsampling>,
    /// Rollover condition overrides, preserved verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollover: Option<BTreeMap<String, Value>>,
}

/// Ordered downsampling rounds applied as backing indices age.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataStreamLifecycleDownsampling {
    pub rounds: Vec<DownsamplingRound>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownsamplingRound {
    /// Age after which the round applies (e.g. `"1d"`).
    pub after: String,
    pub config: DownsampleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownsampleConfig {
    pub fixed_interval: String,
}

//! Type mapping model.
//!
//! Field mapping definitions under `properties` are kept as raw JSON values:
//! the mapping parameter space is open-ended and templates must round-trip
//! parameters this crate has never heard of. The top-level mapping controls
//! are typed.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::common::Metadata;

/// Mapping definition for the fields of an index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeMapping {
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Metadata>,
    #[serde(rename = "_source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic: Option<DynamicMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_detection: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_detection: Option<bool>,
    /// Ordered list of single-entry maps, as the wire format requires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_templates: Option<Vec<BTreeMap<String, Value>>>,
    /// Field name to mapping definition, preserved verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Value>>,
}

impl TypeMapping {
    pub fn is_empty(&self) -> bool {
        self.meta.is_none()
            && self.source.is_none()
            && self.dynamic.is_none()
            && self.date_detection.is_none()
            && self.numeric_detection.is_none()
            && self.dynamic_templates.is_none()
            && self.properties.is_none()
    }
}

/// Controls for the `_source` metadata field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Dynamic mapping behavior: a boolean, or one of the named modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DynamicMapping {
    Enabled(bool),
    Mode(DynamicMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DynamicMode {
    Strict,
    Runtime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dynamic_accepts_bool_and_mode() {
        let parsed: TypeMapping = serde_json::from_str(r#"{ "dynamic": false }"#).unwrap();
        assert_eq!(parsed.dynamic, Some(DynamicMapping::Enabled(false)));

        let parsed: TypeMapping = serde_json::from_str(r#"{ "dynamic": "strict" }"#).unwrap();
        assert_eq!(parsed.dynamic, Some(DynamicMapping::Mode(DynamicMode::Strict)));
    }

    #[test]
    fn test_properties_preserved_verbatim() {
        let json = r#"{
            "properties": {
                "@timestamp": { "type": "date", "format": "strict_date_optional_time" },
                "message": { "type": "text", "norms": false }
            }
        }"#;
        let parsed: TypeMapping = serde_json::from_str(json).unwrap();
        let props = parsed.properties.as_ref().unwrap();
        assert_eq!(props["@timestamp"]["format"], "strict_date_optional_time");
        assert_eq!(props["message"]["norms"], false);
    }

    #[test]
    fn test_meta_and_source_renames() {
        let mapping = TypeMapping {
            meta: Some(Metadata::from([("owner".to_string(), json!("search-infra"))])),
            source: Some(SourceField { enabled: Some(false) }),
            ..Default::default()
        };
        let out = serde_json::to_value(&mapping).unwrap();
        assert_eq!(out["_meta"]["owner"], "search-infra");
        assert_eq!(out["_source"]["enabled"], false);
    }

    #[test]
    fn test_dynamic_mode_roundtrip() {
        let out = serde_json::to_string(&DynamicMapping::Mode(DynamicMode::Runtime)).unwrap();
        assert_eq!(out, r#""runtime""#);
        let back: DynamicMapping = serde_json::from_str(&out).unwrap();
        assert_eq!(back, DynamicMapping::Mode(DynamicMode::Runtime));
    }
}

//! Data stream configuration models.

use serde::{Deserialize, Serialize};

/// Data stream options carried by a template.
///
/// Available on stack since 8.19.0 (stable) and on serverless. Fields of
/// this type may appear as an explicit `null` inside a template summary; the
/// containing structs model that with `Option<Nullable<...>>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataStreamOptionsTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_store: Option<FailureStoreTemplate>,
}

/// Failure store configuration: where documents that fail ingestion land.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FailureStoreTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Marks an index template as a data stream template.
///
/// Presence of this object, even empty, means matching names are created as
/// data streams rather than plain indices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexTemplateDataStreamConfiguration {
    /// Server default false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    /// Server default false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_custom_routing: Option<bool>,
}

impl IndexTemplateDataStreamConfiguration {
    pub fn hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }

    pub fn allow_custom_routing(&self) -> bool {
        self.allow_custom_routing.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_data_stream_configuration() {
        let parsed: IndexTemplateDataStreamConfiguration = serde_json::from_str("{}").unwrap();
        assert!(!parsed.hidden());
        assert!(!parsed.allow_custom_routing());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "{}");
    }

    #[test]
    fn test_failure_store_roundtrip() {
        let json = r#"{ "failure_store": { "enabled": true } }"#;
        let parsed: DataStreamOptionsTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.failure_store.as_ref().unwrap().enabled, Some(true));
        let back: DataStreamOptionsTemplate =
            serde_json::from_str(&serde_json::to_string(&parsed).unwrap()).unwrap();
        assert_eq!(back, parsed);
    }
}

//! Shared wire types used across template models.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Free-form user metadata attached to a template (`_meta`).
///
/// The cluster never interprets this map; it is stored and returned verbatim.
pub type Metadata = BTreeMap<String, Value>;

/// External version tag for a template.
///
/// Opaque to the cluster: never auto-incremented, only stored and returned.
pub type VersionNumber = i64;

/// Response body for acknowledged write operations (put/delete).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcknowledgedResponse {
    pub acknowledged: bool,
}

/// Top-level error envelope returned by the management API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorCause,
    pub status: u16,
}

/// A single cause inside an error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorCause {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_error_envelope() {
        let json = r#"{
            "error": {
                "type": "resource_not_found_exception",
                "reason": "index template matching [missing] not found"
            },
            "status": 404
        }"#;
        let parsed: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, 404);
        assert_eq!(parsed.error.kind, "resource_not_found_exception");
        assert!(parsed.error.reason.unwrap().contains("missing"));
    }

    #[test]
    fn test_deserialize_error_envelope_without_reason() {
        let json = r#"{ "error": { "type": "security_exception" }, "status": 403 }"#;
        let parsed: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.error.kind, "security_exception");
        assert_eq!(parsed.error.reason, None);
    }

    #[test]
    fn test_acknowledged_roundtrip() {
        let parsed: AcknowledgedResponse = serde_json::from_str(r#"{"acknowledged":true}"#).unwrap();
        assert!(parsed.acknowledged);
    }
}

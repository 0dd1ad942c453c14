//! Index template endpoint tests.
//!
//! This module tests the index template management API surface:
//! - Putting a template sends the body and parses the acknowledgement
//! - Getting unwraps the named wrapper from the list-shaped response
//! - Defaults (priority, flags) survive the client boundary
//! - API errors carry the envelope's reason

mod common;

use common::*;
use serde_json::json;
use templatectl_client::ClientError;
use templatectl_types::IndexTemplate;

#[tokio::test]
async fn test_put_index_template() {
    let mock_server = MockServer::start().await;

    let body: IndexTemplate = serde_json::from_value(json!({
        "index_patterns": ["logs-*"],
        "composed_of": ["logs-mappings", "logs-settings"],
        "priority": 200,
        "data_stream": {}
    }))
    .unwrap();

    Mock::given(method("PUT"))
        .and(path("/_index_template/logs"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "acknowledged": true })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let response = client.put_index_template("logs", &body).await.unwrap();
    assert!(response.acknowledged);
}

#[tokio::test]
async fn test_get_index_template_applies_defaults() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_index_template/bare"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "index_templates": [
                {
                    "name": "bare",
                    "index_template": { "index_patterns": ["bare-*"] }
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let named = client.get_index_template("bare").await.unwrap();
    assert_eq!(named.name, "bare");
    assert_eq!(named.index_template.priority(), 0);
    assert!(!named.index_template.is_deprecated());
    assert!(!named.index_template.allow_auto_create());
}

#[tokio::test]
async fn test_list_index_templates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_index_template"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "index_templates": [
                { "name": "logs", "index_template": { "index_patterns": ["logs-*"] } },
                { "name": "metrics", "index_template": { "index_patterns": ["metrics-*"] } }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let templates = client.list_index_templates().await.unwrap();
    assert_eq!(templates.len(), 2);
    assert_eq!(templates[1].name, "metrics");
}

#[tokio::test]
async fn test_put_invalid_template_surfaces_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/_index_template/broken"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "type": "illegal_argument_exception",
                "reason": "index template [broken] specifies an invalid pattern"
            },
            "status": 400
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let body: IndexTemplate =
        serde_json::from_value(json!({ "index_patterns": ["***"] })).unwrap();
    let err = client.put_index_template("broken", &body).await.unwrap_err();
    match err {
        ClientError::ApiError { status, message, .. } => {
            assert_eq!(status, 400);
            assert!(message.contains("invalid pattern"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_index_template() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/_index_template/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "acknowledged": true })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let response = client.delete_index_template("logs").await.unwrap();
    assert!(response.acknowledged);
}

//! Shared helpers for client endpoint tests.

pub use wiremock::matchers::{body_json, header, method, path};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use templatectl_client::TemplateClient;

/// Client pointed at a mock server, with a small retry budget so failure
/// tests stay fast.
pub fn test_client(server: &MockServer) -> TemplateClient {
    TemplateClient::builder(server.uri())
        .max_retries(1)
        .build()
        .expect("client builds against mock server")
}

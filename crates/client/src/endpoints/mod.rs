//! REST API endpoint implementations.
//!
//! Endpoint functions are plain async functions over a shared
//! `reqwest::Client`; the [`crate::client::TemplateClient`] methods wrap
//! them with the configured connection parameters.

mod component_templates;
mod index_templates;
mod request;
mod simulate;
mod url_encoding;

pub use component_templates::{
    delete_component_template, get_component_template, list_component_templates,
    put_component_template,
};
pub use index_templates::{
    delete_index_template, get_index_template, list_index_templates, put_index_template,
};
pub use request::send_request_with_retry;
pub use simulate::simulate_index;
pub use url_encoding::encode_path_segment;

use reqwest::RequestBuilder;

/// Attach bearer authentication when a token is configured.
pub(crate) fn with_auth(builder: RequestBuilder, api_token: Option<&str>) -> RequestBuilder {
    match api_token {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

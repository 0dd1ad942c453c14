//! Simulate endpoint.

use reqwest::{Client, Url};

use crate::endpoints::request::send_request_with_retry;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::endpoints::with_auth;
use crate::error::{ClientError, Result};
use templatectl_types::SimulateIndexResponse;

/// Ask the cluster which template configuration would apply to an index
/// name, without creating anything.
pub async fn simulate_index(
    client: &Client,
    base_url: &str,
    api_token: Option<&str>,
    index_name: &str,
    max_retries: usize,
) -> Result<SimulateIndexResponse> {
    let url = Url::parse(base_url)
        .map_err(|e| ClientError::InvalidUrl(format!("Invalid base URL: {}", e)))?
        .join(&format!(
            "/_index_template/_simulate_index/{}",
            encode_path_segment(index_name)
        ))
        .map_err(|e| ClientError::InvalidUrl(format!("Invalid index name: {}", e)))?;

    let builder = with_auth(client.post(url), api_token);
    let response = send_request_with_retry(builder, max_retries).await?;
    Ok(response.json().await?)
}

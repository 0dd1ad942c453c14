//! Index template management endpoints.

use reqwest::{Client, Url};

use crate::endpoints::request::send_request_with_retry;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::endpoints::with_auth;
use crate::error::{ClientError, Result};
use templatectl_types::{
    AcknowledgedResponse, IndexTemplate, IndexTemplateListResponse, NamedIndexTemplate,
};

fn template_url(base_url: &str, name: Option<&str>) -> Result<Url> {
    let base = Url::parse(base_url)
        .map_err(|e| ClientError::InvalidUrl(format!("Invalid base URL: {}", e)))?;
    let path = match name {
        Some(name) => format!("/_index_template/{}", encode_path_segment(name)),
        None => "/_index_template".to_string(),
    };
    base.join(&path)
        .map_err(|e| ClientError::InvalidUrl(format!("Invalid template name: {}", e)))
}

/// Create or update an index template.
pub async fn put_index_template(
    client: &Client,
    base_url: &str,
    api_token: Option<&str>,
    name: &str,
    body: &IndexTemplate,
    max_retries: usize,
) -> Result<AcknowledgedResponse> {
    let url = template_url(base_url, Some(name))?;
    let builder = with_auth(client.put(url), api_token).json(body);
    let response = send_request_with_retry(builder, max_retries).await?;
    Ok(response.json().await?)
}

/// Get an index template by name.
pub async fn get_index_template(
    client: &Client,
    base_url: &str,
    api_token: Option<&str>,
    name: &str,
    max_retries: usize,
) -> Result<NamedIndexTemplate> {
    let url = template_url(base_url, Some(name))?;
    let builder = with_auth(client.get(url), api_token);
    let response = send_request_with_retry(builder, max_retries).await?;

    let resp: IndexTemplateListResponse = response.json().await?;
    resp.index_templates
        .into_iter()
        .next()
        .ok_or_else(|| ClientError::NotFound(format!("Index template '{}' not found", name)))
}

/// List all index templates.
pub async fn list_index_templates(
    client: &Client,
    base_url: &str,
    api_token: Option<&str>,
    max_retries: usize,
) -> Result<Vec<NamedIndexTemplate>> {
    let url = template_url(base_url, None)?;
    let builder = with_auth(client.get(url), api_token);
    let response = send_request_with_retry(builder, max_retries).await?;

    let resp: IndexTemplateListResponse = response.json().await?;
    Ok(resp.index_templates)
}

/// Delete an index template by name.
pub async fn delete_index_template(
    client: &Client,
    base_url: &str,
    api_token: Option<&str>,
    name: &str,
    max_retries: usize,
) -> Result<AcknowledgedResponse> {
    let url = template_url(base_url, Some(name))?;
    let builder = with_auth(client.delete(url), api_token);
    let response = send_request_with_retry(builder, max_retries).await?;
    Ok(response.json().await?)
}

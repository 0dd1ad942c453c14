//! Component template management endpoints.

use reqwest::{Client, Url};

use crate::endpoints::request::send_request_with_retry;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::endpoints::with_auth;
use crate::error::{ClientError, Result};
use templatectl_types::{
    AcknowledgedResponse, ComponentTemplate, ComponentTemplateListResponse, ComponentTemplateNode,
};

fn template_url(base_url: &str, name: Option<&str>) -> Result<Url> {
    let base = Url::parse(base_url)
        .map_err(|e| ClientError::InvalidUrl(format!("Invalid base URL: {}", e)))?;
    let path = match name {
        Some(name) => format!("/_component_template/{}", encode_path_segment(name)),
        None => "/_component_template".to_string(),
    };
    base.join(&path)
        .map_err(|e| ClientError::InvalidUrl(format!("Invalid template name: {}", e)))
}

/// Create or update a component template.
pub async fn put_component_template(
    client: &Client,
    base_url: &str,
    api_token: Option<&str>,
    name: &str,
    body: &ComponentTemplateNode,
    max_retries: usize,
) -> Result<AcknowledgedResponse> {
    let url = template_url(base_url, Some(name))?;
    let builder = with_auth(client.put(url), api_token).json(body);
    let response = send_request_with_retry(builder, max_retries).await?;
    Ok(response.json().await?)
}

/// Get a component template by name.
pub async fn get_component_template(
    client: &Client,
    base_url: &str,
    api_token: Option<&str>,
    name: &str,
    max_retries: usize,
) -> Result<ComponentTemplate> {
    let url = template_url(base_url, Some(name))?;
    let builder = with_auth(client.get(url), api_token);
    let response = send_request_with_retry(builder, max_retries).await?;

    let resp: ComponentTemplateListResponse = response.json().await?;
    resp.component_templates
        .into_iter()
        .next()
        .ok_or_else(|| ClientError::NotFound(format!("Component template '{}' not found", name)))
}

/// List all component templates.
pub async fn list_component_templates(
    client: &Client,
    base_url: &str,
    api_token: Option<&str>,
    max_retries: usize,
) -> Result<Vec<ComponentTemplate>> {
    let url = template_url(base_url, None)?;
    let builder = with_auth(client.get(url), api_token);
    let response = send_request_with_retry(builder, max_retries).await?;

    let resp: ComponentTemplateListResponse = response.json().await?;
    Ok(resp.component_templates)
}

/// Delete a component template by name.
pub async fn delete_component_template(
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

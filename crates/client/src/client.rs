//! High-level template management client.
//!
//! [`TemplateClient`] owns the connection parameters and a shared
//! `reqwest::Client`; each method delegates to the matching endpoint
//! function in [`crate::endpoints`].

use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::endpoints;
use crate::error::Result;
use templatectl_config::Config;
use templatectl_types::{
    AcknowledgedResponse, ComponentTemplate, ComponentTemplateNode, IndexTemplate,
    NamedIndexTemplate, SimulateIndexResponse,
};

/// Default request timeout when the builder does not set one.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the template management API of a cluster.
pub struct TemplateClient {
    http: Client,
    base_url: String,
    api_token: Option<SecretString>,
    max_retries: usize,
}

impl TemplateClient {
    /// Start building a client for the given base URL.
    pub fn builder(base_url: impl Into<String>) -> TemplateClientBuilder {
        TemplateClientBuilder::new(base_url)
    }

    /// Build a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = TemplateClientBuilder::new(config.connection.base_url.clone())
            .timeout(config.connection.timeout)
            .max_retries(config.connection.max_retries)
            .skip_verify(config.connection.skip_verify);
        if let Some(token) = &config.api_token {
            builder = builder.api_token(token.clone());
        }
        builder.build()
    }

    fn token(&self) -> Option<&str> {
        self.api_token.as_ref().map(|t| t.expose_secret())
    }

    /// Create or update a component template.
    pub async fn put_component_template(
        &self,
        name: &str,
        body: &ComponentTemplateNode,
    ) -> Result<AcknowledgedResponse> {
        endpoints::put_component_template(
            &self.http,
            &self.base_url,
            self.token(),
            name,
            body,
            self.max_retries,
        )
        .await
    }

    /// Get a component template by name.
    pub async fn get_component_template(&self, name: &str) -> Result<ComponentTemplate> {
        endpoints::get_component_template(
            &self.http,
            &self.base_url,
            self.token(),
            name,
            self.max_retries,
        )
        .await
    }

    /// List all component templates.
    pub async fn list_component_templates(&self) -> Result<Vec<ComponentTemplate>> {
        endpoints::list_component_templates(
            &self.http,
            &self.base_url,
            self.token(),
            self.max_retries,
        )
        .await
    }

    /// Delete a component template by name.
    pub async fn delete_component_template(&self, name: &str) -> Result<AcknowledgedResponse> {
        endpoints::delete_component_template(
            &self.http,
            &self.base_url,
            self.token(),
            name,
            self.max_retries,
        )
        .await
    }

    /// Create or update an index template.
    pub async fn put_index_template(
        &self,
        name: &str,
        body: &IndexTemplate,
    ) -> Result<AcknowledgedResponse> {
        endpoints::put_index_template(
            &self.http,
            &self.base_url,
            self.token(),
            name,
            body,
            self.max_retries,
        )
        .await
    }

    /// Get an index template by name.
    pub async fn get_index_template(&self, name: &str) -> Result<NamedIndexTemplate> {
        endpoints::get_index_template(
            &self.http,
            &self.base_url,
            self.token(),
            name,
            self.max_retries,
        )
        .await
    }

    /// List all index templates.
    pub async fn list_index_templates(&self) -> Result<Vec<NamedIndexTemplate>> {
        endpoints::list_index_templates(&self.http, &self.base_url, self.token(), self.max_retries)
            .await
    }

    /// Delete an index template by name.
    pub async fn delete_index_template(&self, name: &str) -> Result<AcknowledgedResponse> {
        endpoints::delete_index_template(
            &self.http,
            &self.base_url,
            self.token(),
            name,
            self.max_retries,
        )
        .await
    }

    /// Ask the cluster which template configuration would apply to an index
    /// name, without creating anything.
    pub async fn simulate_index(&self, index_name: &str) -> Result<SimulateIndexResponse> {
        endpoints::simulate_index(
            &self.http,
            &self.base_url,
            self.token(),
            index_name,
            self.max_retries,
        )
        .await
    }
}

/// Builder for [`TemplateClient`].
pub struct TemplateClientBuilder {
    base_url: String,
    api_token: Option<SecretString>,
    timeout: Duration,
    max_retries: usize,
    skip_verify: bool,
}

impl TemplateClientBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: None,
            timeout: DEFAULT_TIMEOUT,
            max_retries: 3,
            skip_verify: false,
        }
    }

    /// Bearer token sent with every request.
    pub fn api_token(mut self, token: SecretString) -> Self {
        self.api_token = Some(token);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Accept self-signed certificates. Local development clusters only.
    pub fn skip_verify(mut self, skip_verify: bool) -> Self {
        self.skip_verify = skip_verify;
        self
    }

    pub fn build(self) -> Result<TemplateClient> {
        let http = Client::builder()
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.skip_verify)
            .build()?;

        Ok(TemplateClient {
            http,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_token: self.api_token,
            max_retries: self.max_retries,
        })
    }
}

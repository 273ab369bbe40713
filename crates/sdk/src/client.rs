//! Main client for the Clarity SDK.

use crate::api::*;
use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::ClarityResult;
use crate::transport::HttpTransport;
use std::sync::Arc;
use url::Url;

/// Client for the Microsoft Clarity data API.
///
/// Cheap to clone; clones share the connection pool and configuration.
#[derive(Debug, Clone)]
pub struct ClarityClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl ClarityClient {
    /// Create a new client builder.
    pub fn builder() -> ClarityClientBuilder {
        ClarityClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> ClarityResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the dashboard API.
    pub fn dashboard(&self) -> DashboardApi<'_> {
        DashboardApi::new(self)
    }

    /// Get the recordings API.
    pub fn recordings(&self) -> RecordingsApi<'_> {
        RecordingsApi::new(self)
    }

    /// Get the documentation API.
    pub fn documentation(&self) -> DocumentationApi<'_> {
        DocumentationApi::new(self)
    }
}

/// Builder for creating a ClarityClient.
pub struct ClarityClientBuilder {
    base_url: String,
    api_token: Option<String>,
}

impl ClarityClientBuilder {
    /// Create a new builder pointed at the hosted Clarity API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
        }
    }

    /// Override the base URL of the Clarity API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the bearer token. Empty tokens are treated as absent.
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.api_token = (!token.is_empty()).then_some(token);
        self
    }

    /// Build the client.
    pub fn build(self) -> ClarityResult<ClarityClient> {
        let base_url = Url::parse(&self.base_url)?;

        let config = ClientConfig {
            base_url,
            api_token: self.api_token,
        };

        ClarityClient::from_config(config)
    }
}

impl Default for ClarityClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

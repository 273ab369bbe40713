//! Configuration types for the Clarity SDK.

use url::Url;

/// Base URL of the hosted Clarity data API.
pub const DEFAULT_BASE_URL: &str = "https://clarity.microsoft.com/mcp";

/// Configuration for the Clarity client.
///
/// Built once at startup and shared read-only by every request.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Clarity API. Endpoint paths are appended verbatim.
    pub base_url: Url,
    /// Bearer token for the Clarity project.
    pub api_token: Option<String>,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            api_token: None,
        }
    }

    /// Whether a non-empty API token is configured.
    pub fn has_token(&self) -> bool {
        self.api_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

use anyhow::{Context, Result};
use clarity_mcp::{clarity_tools, McpServer};
use clarity_sdk::ClarityClient;
use std::sync::Arc;

/// Env files read at startup, in priority order. Variables already set in
/// the process environment are never overwritten.
const ENV_FILES: &[&str] = &[".env.local", ".env"];

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Bearer token for the Clarity API
    pub api_token: Option<String>,

    /// Base URL of the Clarity API
    pub base_url: String,
}

impl ServerConfig {
    /// Load `.env.local` and `.env` into the process environment, if
    /// present. Returns the files that were found.
    pub fn load_env_files() -> Vec<&'static str> {
        ENV_FILES
            .iter()
            .copied()
            .filter(|file| dotenvy::from_filename(file).is_ok())
            .collect()
    }

    /// Whether a non-empty API token is configured
    pub fn has_token(&self) -> bool {
        self.api_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Address to bind the listener to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub mcp: Arc<McpServer>,
    pub has_token: bool,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let mut builder = ClarityClient::builder().base_url(config.base_url.clone());
        if let Some(token) = &config.api_token {
            builder = builder.api_token(token.clone());
        }
        let client = builder.build().context("Failed to create Clarity client")?;

        let mcp = Arc::new(McpServer::new(clarity_tools(client)));

        Ok(Self {
            mcp,
            has_token: config.has_token(),
        })
    }
}

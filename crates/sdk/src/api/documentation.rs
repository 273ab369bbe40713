//! Documentation search endpoint.

use crate::client::ClarityClient;
use crate::error::ClarityResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Endpoint path for documentation snippet search.
pub const DOCUMENTATION_QUERY_PATH: &str = "/documentation/query";

/// Documentation API.
pub struct DocumentationApi<'a> {
    client: &'a ClarityClient,
}

impl<'a> DocumentationApi<'a> {
    pub(crate) fn new(client: &'a ClarityClient) -> Self {
        Self { client }
    }

    /// Retrieve documentation snippets answering a question.
    pub async fn query(&self, request: &DocumentationQuery) -> ClarityResult<Value> {
        self.client.http.post(DOCUMENTATION_QUERY_PATH, request).await
    }
}

/// Request body for [`DocumentationApi::query`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentationQuery {
    pub query: String,
}

//! Dashboard analytics endpoint.

use crate::client::ClarityClient;
use crate::error::ClarityResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Endpoint path for natural-language dashboard queries.
pub const DASHBOARD_QUERY_PATH: &str = "/dashboard/query";

/// Dashboard API for traffic and behavior metrics.
pub struct DashboardApi<'a> {
    client: &'a ClarityClient,
}

impl<'a> DashboardApi<'a> {
    pub(crate) fn new(client: &'a ClarityClient) -> Self {
        Self { client }
    }

    /// Run a natural-language analytics query against the project dashboard.
    ///
    /// The response shape is owned by Clarity and is returned untyped.
    pub async fn query(&self, request: &DashboardQuery) -> ClarityResult<Value> {
        self.client.http.post(DASHBOARD_QUERY_PATH, request).await
    }
}

/// Request body for [`DashboardApi::query`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardQuery {
    pub query: String,
    pub timezone: String,
}

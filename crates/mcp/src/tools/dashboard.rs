// Dashboard analytics tool

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{envelope, json_schema_object, json_schema_string, Tool};
use anyhow::{Context, Result};
use clarity_sdk::{ClarityClient, DashboardQuery};
use serde::{Deserialize, Serialize};

pub const QUERY_ANALYTICS_DASHBOARD: &str = "query-analytics-dashboard";

const DEFAULT_TIMEZONE: &str = "UTC";

/// Tool to query traffic, behavior and performance metrics
pub struct QueryAnalyticsDashboardTool {
    client: ClarityClient,
}

impl QueryAnalyticsDashboardTool {
    pub fn new(client: ClarityClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct QueryAnalyticsDashboardArgs {
    query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timezone: Option<String>,
}

impl QueryAnalyticsDashboardArgs {
    fn resolve(&self) -> DashboardQuery {
        DashboardQuery {
            query: self.query.clone(),
            timezone: self
                .timezone
                .as_deref()
                .filter(|tz| !tz.is_empty())
                .unwrap_or(DEFAULT_TIMEZONE)
                .to_string(),
        }
    }
}

#[async_trait::async_trait]
impl Tool for QueryAnalyticsDashboardTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: QUERY_ANALYTICS_DASHBOARD.to_string(),
            description: "Retrieves analytics data and metrics from your Clarity project dashboard \
                using a simplified natural language search query. Use this to get traffic stats, \
                user behavior metrics, and performance data."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "query": json_schema_string(
                        "Natural language query for analytics data (e.g., \"show me bounce rate for the last 7 days\", \"top pages by sessions this month\")"
                    ),
                    "timezone": json_schema_string(
                        "Timezone for the query (defaults to UTC). Example: \"America/New_York\""
                    )
                }),
                vec!["query"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: QueryAnalyticsDashboardArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for query-analytics-dashboard")?;

        tracing::info!(tool = QUERY_ANALYTICS_DASHBOARD, query = %args.query, "Querying dashboard");

        let outcome = self.client.dashboard().query(&args.resolve()).await;
        Ok(envelope(QUERY_ANALYTICS_DASHBOARD, outcome, &args))
    }
}

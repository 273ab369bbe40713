// Documentation search tool

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{envelope, json_schema_object, json_schema_string, Tool};
use anyhow::{Context, Result};
use clarity_sdk::{ClarityClient, DocumentationQuery};
use serde::{Deserialize, Serialize};

pub const QUERY_DOCUMENTATION_RESOURCES: &str = "query-documentation-resources";

/// Tool to search Clarity documentation snippets
pub struct QueryDocumentationResourcesTool {
    client: ClarityClient,
}

impl QueryDocumentationResourcesTool {
    pub fn new(client: ClarityClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct QueryDocumentationResourcesArgs {
    query: String,
}

#[async_trait::async_trait]
impl Tool for QueryDocumentationResourcesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: QUERY_DOCUMENTATION_RESOURCES.to_string(),
            description: "Retrieves snippets from Microsoft Clarity documentation to find answers \
                to user questions. Use this to get help with setup, troubleshooting, feature \
                explanations, and best practices."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "query": json_schema_string(
                        "Natural language question about Clarity (e.g., \"how do I install Clarity on WordPress?\", \"what are heatmaps?\", \"how to filter rage clicks?\")"
                    )
                }),
                vec!["query"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: QueryDocumentationResourcesArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for query-documentation-resources")?;

        tracing::info!(tool = QUERY_DOCUMENTATION_RESOURCES, query = %args.query, "Searching documentation");

        let request = DocumentationQuery {
            query: args.query.clone(),
        };
        let outcome = self.client.documentation().query(&request).await;
        Ok(envelope(QUERY_DOCUMENTATION_RESOURCES, outcome, &args))
    }
}

pub mod dashboard;
pub mod documentation;
mod envelope;
pub mod recordings;
mod registry;

pub use dashboard::QueryAnalyticsDashboardTool;
pub use documentation::QueryDocumentationResourcesTool;
pub use envelope::envelope;
pub use recordings::ListSessionRecordingsTool;
pub use registry::{
    json_schema_map, json_schema_number, json_schema_object, json_schema_string, Tool,
    ToolRegistry,
};

use clarity_sdk::ClarityClient;
use std::sync::Arc;

/// Registry holding the three Clarity tools, all sharing one client.
pub fn clarity_tools(client: ClarityClient) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(QueryAnalyticsDashboardTool::new(client.clone())));
    registry.register(Arc::new(ListSessionRecordingsTool::new(client.clone())));
    registry.register(Arc::new(QueryDocumentationResourcesTool::new(client)));
    registry
}

// MCP server: JSON-RPC dispatch over the tool registry

use crate::protocol::{
    negotiate_protocol_version, CallToolParams, InitializeParams, InitializeResult, JsonRpcError,
    JsonRpcRequest, JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo,
    ToolsCapability, LATEST_PROTOCOL_VERSION,
};
use crate::tools::ToolRegistry;
use serde::Serialize;
use serde_json::Value;

/// Name reported in `initialize` and by the health endpoint.
pub const SERVER_NAME: &str = "clarity-mcp-server";

/// Transport-independent MCP request handler.
///
/// Holds no per-session state; every message is handled on its own, so one
/// instance can serve any number of concurrent requests.
pub struct McpServer {
    registry: ToolRegistry,
    info: ServerInfo,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry,
            info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handle a raw JSON-RPC message: a single request, a notification, or a
    /// batch. Returns `None` when nothing needs to be sent back.
    pub async fn handle_message(&self, message: Value) -> Option<Value> {
        match message {
            Value::Array(items) if items.is_empty() => {
                to_json(&JsonRpcResponse::error(Value::Null, JsonRpcError::invalid_request()))
            }
            Value::Array(items) => {
                let mut responses = Vec::with_capacity(items.len());
                for item in items {
                    if let Some(response) = self.handle_single(item).await {
                        responses.push(response);
                    }
                }
                if responses.is_empty() {
                    None
                } else {
                    to_json(&responses)
                }
            }
            other => self
                .handle_single(other)
                .await
                .and_then(|response| to_json(&response)),
        }
    }

    async fn handle_single(&self, message: Value) -> Option<JsonRpcResponse> {
        // Responses to server-initiated requests need no reply.
        if message.get("method").is_none()
            && (message.get("result").is_some() || message.get("error").is_some())
        {
            return None;
        }

        let id = message.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<JsonRpcRequest>(message) {
            Ok(request) if request.jsonrpc == "2.0" => self.handle_request(request).await,
            _ => Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request())),
        }
    }

    /// Dispatch one parsed request.
    async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            tracing::debug!(method = %request.method, "Notification received");
            return None;
        }
        let id = request.id.clone().unwrap_or(Value::Null);

        let outcome = match request.method.as_str() {
            "initialize" => self.initialize(request.params),
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => self.list_tools(),
            "tools/call" => self.call_tool(request.params).await,
            method => {
                tracing::warn!(method = %method, "Unknown method");
                Err(JsonRpcError::method_not_found(method))
            }
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::error(id, error),
        })
    }

    fn initialize(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let protocol_version = match params {
            Some(params) => {
                let params: InitializeParams = serde_json::from_value(params).map_err(|e| {
                    JsonRpcError::invalid_params(format!("Invalid initialize params: {}", e))
                })?;
                if let Some(client) = &params.client_info {
                    tracing::info!(
                        client = %client.name,
                        version = %client.version,
                        "Client initializing"
                    );
                }
                negotiate_protocol_version(&params.protocol_version)
            }
            None => LATEST_PROTOCOL_VERSION,
        };

        result_value(&InitializeResult {
            protocol_version: protocol_version.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: self.info.clone(),
        })
    }

    fn list_tools(&self) -> Result<Value, JsonRpcError> {
        result_value(&ListToolsResult {
            tools: self.registry.list_schemas(),
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallToolParams = params
            .ok_or_else(|| JsonRpcError::invalid_params("Missing params for tools/call"))
            .and_then(|p| {
                serde_json::from_value(p).map_err(|e| {
                    JsonRpcError::invalid_params(format!("Invalid tools/call params: {}", e))
                })
            })?;

        let Some(tool) = self.registry.get(&params.name) else {
            return Err(JsonRpcError::invalid_params(format!(
                "Tool {} not found",
                params.name
            )));
        };

        tracing::debug!(tool = %params.name, "Calling tool");

        let arguments = if params.arguments.is_null() {
            Value::Object(Default::default())
        } else {
            params.arguments
        };

        let result = tool
            .execute(arguments)
            .await
            .map_err(|e| JsonRpcError::invalid_params(format!("{:#}", e)))?;

        result_value(&result)
    }
}

fn result_value<T: Serialize>(value: &T) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> Option<Value> {
    match serde_json::to_value(value) {
        Ok(json) => Some(json),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response");
            None
        }
    }
}

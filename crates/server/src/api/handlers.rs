use crate::config::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    Json,
};
use clarity_mcp::protocol::{JsonRpcError, JsonRpcResponse};
use serde_json::Value;
use std::convert::Infallible;
use std::sync::Arc;

const EVENT_STREAM: &str = "text/event-stream";

/// Handle a client-to-server JSON-RPC message (POST /mcp)
///
/// Requests get a JSON reply. A body made up only of notifications or
/// responses is acknowledged with 202 and no body.
pub async fn mcp_message(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let message: Value = match serde_json::from_slice(&body) {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected unparseable MCP message");
            return (
                StatusCode::BAD_REQUEST,
                Json(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error())),
            )
                .into_response();
        }
    };

    match state.mcp.handle_message(message).await {
        Some(reply) => Json(reply).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// Open the server-to-client event stream (GET /mcp)
///
/// The server never initiates messages, so the stream only carries
/// keep-alive comments until the client disconnects.
pub async fn mcp_stream(headers: HeaderMap) -> Response {
    let accepts_events = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains(EVENT_STREAM));

    if !accepts_events {
        return (
            StatusCode::NOT_ACCEPTABLE,
            Json(JsonRpcResponse::error(
                Value::Null,
                JsonRpcError::custom(-32000, "Not Acceptable: Client must accept text/event-stream"),
            )),
        )
            .into_response();
    }

    tracing::debug!("Opened MCP event stream");
    Sse::new(futures::stream::pending::<Result<Event, Infallible>>())
        .keep_alive(KeepAlive::default())
        .into_response()
}

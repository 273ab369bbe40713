// Uniform wrapping of upstream outcomes into tool results

use crate::protocol::CallToolResult;
use clarity_sdk::ClarityResult;
use serde::Serialize;
use serde_json::{Map, Value};

/// Wrap the outcome of an upstream call as a tool result.
///
/// Both arms produce a successful result carrying one pretty-printed JSON
/// text block. On success the upstream body is passed through verbatim. On
/// failure the text is `{"error": <message>, ...inputs}` where `inputs` are
/// the caller's arguments, so the client can see what produced the failure.
/// `isError` is left unset in both cases.
pub fn envelope<I: Serialize>(
    tool: &str,
    outcome: ClarityResult<Value>,
    inputs: &I,
) -> CallToolResult {
    let payload = match outcome {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(tool = tool, error = %e, "Clarity API call failed");
            failure_payload(&e.to_string(), inputs)
        }
    };

    CallToolResult::text(pretty(&payload))
}

fn failure_payload<I: Serialize>(message: &str, inputs: &I) -> Value {
    let mut payload = Map::new();
    payload.insert("error".to_string(), Value::String(message.to_string()));

    if let Ok(Value::Object(fields)) = serde_json::to_value(inputs) {
        for (key, value) in fields {
            payload.entry(key).or_insert(value);
        }
    }

    Value::Object(payload)
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

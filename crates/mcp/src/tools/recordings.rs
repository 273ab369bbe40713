// Session recordings tool

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    envelope, json_schema_map, json_schema_number, json_schema_object, json_schema_string, Tool,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use clarity_sdk::{ClarityClient, RecordingsQuery};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

pub const LIST_SESSION_RECORDINGS: &str = "list-session-recordings";

pub const DEFAULT_COUNT: u32 = 10;
pub const MAX_COUNT: u32 = 100;
const DEFAULT_SORT_BY: &str = "sessionStart";
const DEFAULT_LOOKBACK_DAYS: i64 = 2;

/// Tool to list session recordings with filters
pub struct ListSessionRecordingsTool {
    client: ClarityClient,
}

impl ListSessionRecordingsTool {
    pub fn new(client: ClarityClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListSessionRecordingsArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    filters: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    count: Option<Number>,
}

impl ListSessionRecordingsArgs {
    /// Fill in defaults relative to `now`. Empty strings count as absent.
    fn resolve(&self, now: DateTime<Utc>) -> RecordingsQuery {
        let start = non_empty(&self.start)
            .map(str::to_string)
            .unwrap_or_else(|| iso_millis(now - Duration::days(DEFAULT_LOOKBACK_DAYS)));
        let end = non_empty(&self.end)
            .map(str::to_string)
            .unwrap_or_else(|| iso_millis(now));

        RecordingsQuery {
            start,
            end,
            filters: self.filters.clone().unwrap_or_default(),
            sort_by: non_empty(&self.sort_by).unwrap_or(DEFAULT_SORT_BY).to_string(),
            count: clamp_count(self.count.as_ref()),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn iso_millis(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Any JSON number is accepted. Fractions are truncated, anything below one
/// falls back to the default and anything above the cap is clamped to it.
fn clamp_count(count: Option<&Number>) -> u32 {
    let requested = count.and_then(Number::as_f64).map(f64::trunc).unwrap_or(0.0);
    if requested < 1.0 {
        DEFAULT_COUNT
    } else if requested >= f64::from(MAX_COUNT) {
        MAX_COUNT
    } else {
        requested as u32
    }
}

#[async_trait::async_trait]
impl Tool for ListSessionRecordingsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: LIST_SESSION_RECORDINGS.to_string(),
            description: "Retrieves a list of session recordings from your Clarity project with \
                advanced filtering options. Filter by device type, browser, OS, location, URL \
                patterns, and more. Dates must be in ISO 8601 format (YYYY-MM-DD or \
                YYYY-MM-DDTHH:mm:ss.sssZ)."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "start": json_schema_string(
                        "Start date in ISO 8601 format (defaults to 2 days ago). Example: \"2024-01-01\" or \"2024-01-01T00:00:00.000Z\""
                    ),
                    "end": json_schema_string(
                        "End date in ISO 8601 format (defaults to now). Example: \"2024-01-31\" or \"2024-01-31T23:59:59.999Z\""
                    ),
                    "filters": json_schema_map(
                        "Filters object with keys like \"deviceType\", \"browser\", \"os\", \"country\", \"url\". Example: {\"deviceType\": \"Mobile\", \"country\": \"US\"}"
                    ),
                    "sortBy": json_schema_string(
                        "Sort field (e.g., \"sessionStart\", \"duration\"). Defaults to \"sessionStart\""
                    ),
                    "count": json_schema_number(
                        "Number of recordings to retrieve (max 100, defaults to 10)"
                    )
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ListSessionRecordingsArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for list-session-recordings")?;

        let request = args.resolve(Utc::now());
        tracing::info!(
            tool = LIST_SESSION_RECORDINGS,
            start = %request.start,
            end = %request.end,
            count = request.count,
            "Fetching recordings"
        );

        let outcome = self.client.recordings().sample(&request).await;
        Ok(envelope(LIST_SESSION_RECORDINGS, outcome, &args))
    }
}

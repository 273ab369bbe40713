//! Session recordings endpoint.

use crate::client::ClarityClient;
use crate::error::ClarityResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Endpoint path for sampling session recordings.
pub const RECORDINGS_SAMPLE_PATH: &str = "/recordings/sample";

/// Recordings API for listing session recordings.
pub struct RecordingsApi<'a> {
    client: &'a ClarityClient,
}

impl<'a> RecordingsApi<'a> {
    pub(crate) fn new(client: &'a ClarityClient) -> Self {
        Self { client }
    }

    /// Fetch a sample of session recordings matching the query.
    pub async fn sample(&self, request: &RecordingsQuery) -> ClarityResult<Value> {
        self.client.http.post(RECORDINGS_SAMPLE_PATH, request).await
    }
}

/// Request body for [`RecordingsApi::sample`].
///
/// All fields are resolved; defaults are applied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingsQuery {
    /// ISO 8601 start of the window.
    pub start: String,
    /// ISO 8601 end of the window.
    pub end: String,
    /// Free-form filters such as `deviceType`, `browser` or `country`.
    pub filters: Map<String, Value>,
    pub sort_by: String,
    pub count: u32,
}

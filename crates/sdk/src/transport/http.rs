//! HTTP transport layer for the Clarity SDK.

use crate::config::ClientConfig;
use crate::error::{ClarityError, ClarityResult};
use reqwest::{header, Client};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

/// HTTP transport for making API requests.
///
/// Each call issues exactly one request. There is no retry and no timeout
/// beyond what the underlying client applies.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> ClarityResult<Self> {
        let mut headers = header::HeaderMap::new();

        if let Some(ref token) = config.api_token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|_| ClarityError::Config("Invalid API token format".to_string()))?,
            );
        }

        let client = Client::builder()
            .user_agent(concat!("clarity-mcp/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Build a URL for the given path.
    ///
    /// The path is appended to the base URL as-is, so a base of
    /// `https://host/mcp` and a path of `/dashboard/query` yields
    /// `https://host/mcp/dashboard/query`.
    pub(crate) fn build_url(&self, path: &str) -> ClarityResult<url::Url> {
        let base = self.config.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(url::Url::parse(&format!("{}/{}", base, path))?)
    }

    /// Execute a POST request with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClarityResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request");

        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            return Err(ClarityError::from_response(status.as_u16(), body));
        }

        let body = response.json().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestResponse {
        message: String,
        value: i32,
    }

    #[derive(Debug, Serialize)]
    struct TestRequest {
        name: String,
    }

    fn create_config(base_url: &str) -> Arc<ClientConfig> {
        Arc::new(ClientConfig::new(url::Url::parse(base_url).unwrap()))
    }

    fn create_config_with_auth(base_url: &str, token: &str) -> Arc<ClientConfig> {
        Arc::new(ClientConfig {
            base_url: url::Url::parse(base_url).unwrap(),
            api_token: Some(token.to_string()),
        })
    }

    #[tokio::test]
    async fn test_post_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/create"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({"name": "test"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "created".to_string(),
                value: 1,
            }))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let request = TestRequest {
            name: "test".to_string(),
        };
        let result: TestResponse = transport.post("/api/create", &request).await.unwrap();
        assert_eq!(result.message, "created");
        assert_eq!(result.value, 1);
    }

    #[tokio::test]
    async fn test_authorization_header() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/protected"))
            .and(header("Authorization", "Bearer sk-test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "authorized".to_string(),
                value: 100,
            }))
            .mount(&server)
            .await;

        let config = create_config_with_auth(&server.uri(), "sk-test-key");
        let transport = HttpTransport::new(config).unwrap();

        let result: TestResponse = transport
            .post("/api/protected", &serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(result.message, "authorized");
    }

    #[tokio::test]
    async fn test_error_carries_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/broken"))
            .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: ClarityResult<TestResponse> =
            transport.post("/api/broken", &serde_json::json!({})).await;
        match result {
            Err(ClarityError::Api { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "server error");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_truncated_error_body_is_http_error() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(
                    b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 100\r\n\r\npartial",
                )
                .await;
            let _ = socket.shutdown().await;
        });

        let transport = HttpTransport::new(create_config(&format!("http://{}", addr))).unwrap();

        let result: ClarityResult<serde_json::Value> =
            transport.post("/api/broken", &serde_json::json!({})).await;
        assert!(matches!(result, Err(ClarityError::Http(_))), "{:?}", result);
    }

    #[tokio::test]
    async fn test_invalid_json_body_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/text"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: ClarityResult<serde_json::Value> =
            transport.post("/api/text", &serde_json::json!({})).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_build_url_appends_to_base_path() {
        let transport =
            HttpTransport::new(create_config("https://clarity.microsoft.com/mcp")).unwrap();

        let url = transport.build_url("/dashboard/query").unwrap();
        assert_eq!(url.as_str(), "https://clarity.microsoft.com/mcp/dashboard/query");
    }

    #[test]
    fn test_build_url_with_trailing_slash() {
        let transport = HttpTransport::new(create_config("http://localhost:8080/")).unwrap();

        let url = transport.build_url("api/test").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/test");
    }

    #[test]
    fn test_invalid_token_rejected() {
        let config = create_config_with_auth("http://localhost:8080", "bad\ntoken");
        let result = HttpTransport::new(config);
        assert!(matches!(result, Err(ClarityError::Config(_))));
    }
}

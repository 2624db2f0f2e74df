use std::fmt;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use tracing::{debug, warn};

use docscan_config::Config;
use docscan_core::{AnalyzerError, ApiReply};
use docscan_logging::redact_sensitive_data;
use docscan_understanding::build_payload;

/// Minimal client for the OpenAI chat completions API.
///
/// HTTP status failures come back as [`ApiReply`] values. Only transport
/// failures (connect, TLS, body read) are errors.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    auth_header: HeaderValue,
}

impl OpenAiClient {
    /// Build a client for `api_key`. The key must be non-blank.
    pub fn new(api_key: impl AsRef<str>) -> Result<Self, AnalyzerError> {
        let api_key = api_key.as_ref().trim();
        if api_key.is_empty() {
            return Err(AnalyzerError::MissingApiKey);
        }

        let mut auth_header = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| AnalyzerError::ConfigError("OPENAI_API_KEY contains invalid characters".into()))?;
        auth_header.set_sensitive(true);

        Ok(Self {
            client: Client::new(),
            auth_header,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AnalyzerError> {
        Self::new(config.openai_api_key.as_deref().unwrap_or_default())
    }

    /// Headers sent with every request.
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.auth_header.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Serialize the vision request for `image` and `prompt`.
    pub fn prepare_payload(&self, model: &str, prompt: &str, image: &[u8]) -> Result<String> {
        build_payload(model, prompt, image)
            .to_json()
            .context("Failed to serialize OpenAI payload")
    }

    /// POST `payload` to `url` and classify the response.
    pub async fn post(&self, url: &str, payload: String) -> Result<ApiReply> {
        debug!(url = %url, payload = %redact_sensitive_data(&payload), "Sending request to OpenAI");

        let response = self
            .client
            .post(url)
            .headers(self.headers())
            .body(payload)
            .send()
            .await
            .context("OpenAI HTTP request failed")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read OpenAI response body")?;

        if !status.is_success() {
            warn!(status = status.as_u16(), details = %redact_sensitive_data(&body), "OpenAI HTTP error");
            return Ok(ApiReply::HttpError {
                status: status.as_u16(),
                details: body,
            });
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(ApiReply::Completion(value)),
            Err(e) => {
                warn!(error = %e, "Invalid JSON response from OpenAI");
                Ok(ApiReply::InvalidJson {
                    raw: body,
                    message: e.to_string(),
                })
            }
        }
    }
}

impl fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiClient").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_stub;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test]
    fn test_blank_api_key_is_rejected() {
        for key in ["", "   ", "\n"] {
            let err = OpenAiClient::new(key).unwrap_err();
            assert!(matches!(err, AnalyzerError::MissingApiKey));
            assert_eq!(err.to_string(), "Missing OPENAI_API_KEY");
        }
    }

    #[test]
    fn test_missing_key_in_config() {
        let err = OpenAiClient::from_config(&Config::default()).unwrap_err();
        assert!(matches!(err, AnalyzerError::MissingApiKey));
    }

    #[test]
    fn test_headers() {
        let client = OpenAiClient::new("sk-test").unwrap();
        let headers = client.headers();
        assert_eq!(headers[AUTHORIZATION], "Bearer sk-test");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert!(headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn test_debug_hides_key() {
        let client = OpenAiClient::new("sk-secret-value").unwrap();
        assert!(!format!("{client:?}").contains("secret"));
    }

    #[tokio::test]
    async fn test_post_parses_success() {
        let stub = spawn_stub(StatusCode::OK, r#"{"result": "success"}"#).await;
        let client = OpenAiClient::new("sk-test").unwrap();

        let payload = json!({ "model": "gpt-4o", "messages": [] }).to_string();
        let reply = client.post(&stub.url, payload.clone()).await.unwrap();
        assert_eq!(reply, ApiReply::Completion(json!({ "result": "success" })));

        let requests = stub.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].authorization.as_deref(), Some("Bearer sk-test"));
        assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
        assert_eq!(requests[0].body, payload);
    }

    #[tokio::test]
    async fn test_post_returns_http_error_value() {
        let stub = spawn_stub(StatusCode::BAD_REQUEST, "Bad Request").await;
        let client = OpenAiClient::new("sk-test").unwrap();

        let reply = client.post(&stub.url, "{}".into()).await.unwrap();
        assert_eq!(
            reply,
            ApiReply::HttpError {
                status: 400,
                details: "Bad Request".into()
            }
        );
    }

    #[tokio::test]
    async fn test_post_flags_invalid_json() {
        let stub = spawn_stub(StatusCode::OK, "invalid json").await;
        let client = OpenAiClient::new("sk-test").unwrap();

        match client.post(&stub.url, "{}".into()).await.unwrap() {
            ApiReply::InvalidJson { raw, message } => {
                assert_eq!(raw, "invalid json");
                assert!(!message.is_empty());
            }
            other => panic!("unexpected reply {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        // Bind then drop a listener so the port is closed.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = OpenAiClient::new("sk-test").unwrap();
        let err = client
            .post(&format!("http://{addr}/v1/chat/completions"), "{}".into())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("OpenAI HTTP request failed"));
    }

    #[test]
    fn test_prepare_payload() {
        let client = OpenAiClient::new("sk-test").unwrap();
        let payload = client.prepare_payload("gpt-4o", "Read it", b"img").unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["model"], "gpt-4o");
        assert_eq!(value["messages"][0]["content"][1]["text"], "Read it");
    }
}

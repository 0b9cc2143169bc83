//! reqwest-backed implementation of [`RawApiPort`].

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

use delve_shared::ErrorBody;

use crate::config::PlayerConfig;
use crate::ports::outbound::{ApiError, RawApiPort};

/// Default game server base URL.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// HTTP client for the game server's JSON API
#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    base_url: String,
}

impl ApiAdapter {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &PlayerConfig) -> Self {
        Self::new(
            &config.api_base_url,
            Duration::from_millis(config.request_timeout_ms),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read(response: Response) -> Result<Value, ApiError> {
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        decode_response(status, &text)
    }
}

impl Default for ApiAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, Duration::from_secs(30))
    }
}

#[async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        tracing::debug!(path, "GET");
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        Self::read(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        tracing::debug!(path, "POST");
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        Self::read(response).await
    }

    async fn post_empty(&self, path: &str) -> Result<Value, ApiError> {
        self.post_json(path, &Value::Object(Default::default()))
            .await
    }
}

/// Turns a status code and raw body into the port's result.
///
/// Success bodies must be JSON (an empty body decodes to `Null`). Failure
/// bodies of the form `{"error": "..."}` become [`ApiError::Rejected`];
/// anything else becomes [`ApiError::HttpStatus`].
pub fn decode_response(status: u16, body: &str) -> Result<Value, ApiError> {
    if (200..300).contains(&status) {
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        return serde_json::from_str(body).map_err(|e| ApiError::ParseError(e.to_string()));
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error }) if !error.trim().is_empty() => {
            tracing::warn!(status, %error, "server rejected request");
            Err(ApiError::Rejected {
                status,
                message: error,
            })
        }
        _ => {
            tracing::warn!(status, "request failed without error body");
            Err(ApiError::HttpStatus(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_is_parsed() {
        let value = decode_response(200, r#"{"success": true}"#).unwrap();
        assert_eq!(value["success"], true);
    }

    #[test]
    fn empty_success_body_is_null() {
        assert_eq!(decode_response(204, "").unwrap(), Value::Null);
    }

    #[test]
    fn malformed_success_body_is_parse_error() {
        let err = decode_response(200, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::ParseError(_)));
    }

    #[test]
    fn structured_failure_is_rejection() {
        let err = decode_response(400, r#"{"error": "Party is full"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 400,
                message: "Party is full".into()
            }
        );
    }

    #[test]
    fn unstructured_failure_is_status_error() {
        assert_eq!(
            decode_response(502, "Bad Gateway").unwrap_err(),
            ApiError::HttpStatus(502)
        );
        assert_eq!(
            decode_response(500, r#"{"error": ""}"#).unwrap_err(),
            ApiError::HttpStatus(500)
        );
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let adapter = ApiAdapter::new("http://game.local:5000/", Duration::from_secs(1));
        assert_eq!(adapter.base_url(), "http://game.local:5000");
        assert_eq!(
            adapter.url("/api/game/new"),
            "http://game.local:5000/api/game/new"
        );
    }
}

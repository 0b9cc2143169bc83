//! Typed API wrapper for application services.
//!
//! `Api` wraps an `Arc<dyn RawApiPort>` so services and the controller never
//! see the adapter type, and converts request and response bodies through
//! `serde_json::Value`.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.raw.get_json(path).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body_value =
            serde_json::to_value(body).map_err(|e| ApiError::SerializeError(e.to_string()))?;
        let value = self.raw.post_json(path, &body_value).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    /// POST with an empty body, discarding whatever the server answers.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.raw.post_empty(path).await.map(|_| ())
    }

    pub async fn post_empty_with_response<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let value = self.raw.post_empty(path).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockRawApiPort;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Answer {
        xp: u64,
    }

    #[tokio::test]
    async fn get_decodes_typed_body() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .withf(|path| path == "/api/thing")
            .times(1)
            .returning(|_| Ok(json!({"xp": 2000})));

        let api = Api::new(Arc::new(raw));
        let answer: Answer = api.get("/api/thing").await.unwrap();
        assert_eq!(answer, Answer { xp: 2000 });
    }

    #[tokio::test]
    async fn shape_mismatch_is_parse_error() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .returning(|_, _| Ok(json!({"unexpected": true})));

        let api = Api::new(Arc::new(raw));
        let err = api
            .post::<Answer, _>("/api/thing", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ParseError(_)));
    }

    #[tokio::test]
    async fn transport_errors_pass_through() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_empty()
            .returning(|_| Err(ApiError::RequestFailed("connection refused".into())));

        let api = Api::new(Arc::new(raw));
        let err = api.post_empty("/api/game/new").await.unwrap_err();
        assert_eq!(err, ApiError::RequestFailed("connection refused".into()));
    }
}

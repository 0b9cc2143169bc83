//! Raw API Port - Object-safe HTTP boundary
//!
//! Typed request/response handling lives in `application::api::Api`, which
//! wraps an `Arc<dyn RawApiPort>` and converts through `serde_json::Value`.
//! Keeping this trait free of generics lets it sit behind a trait object and
//! be mocked in service tests.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RawApiPort: Send + Sync {
    /// `GET path`, decoding the body as JSON (`Null` when empty).
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    /// `POST path` with a JSON body.
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// `POST path` with an empty JSON object as body.
    async fn post_empty(&self, path: &str) -> Result<Value, ApiError>;
}

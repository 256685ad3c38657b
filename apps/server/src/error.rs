//! # API Error Type
//!
//! Every failure on every route leaves the server as the same envelope.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockbook                              │
//! │                                                                         │
//! │  Handler                                                                │
//! │  Result<T, ApiError>                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Store failure? ───── StoreError::QueryFailed("...") ──┐               │
//! │         │                                              │               │
//! │         ▼                                              ▼               │
//! │  Unreadable body? ─── JsonRejection ─────────────── ApiError           │
//! │                                                        │               │
//! │                                                        ▼               │
//! │                              500 {"error": "Query failed: ..."}        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use stockbook_db::StoreError;
use tracing::error;

/// Error returned from HTTP handlers.
///
/// ## Serialization
/// This is what the client receives when a request fails:
/// ```json
/// { "error": "Connection failed: Pool is closed" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable error message
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        ApiError {
            message: message.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::new(err.to_string())
    }
}

/// A save body that is not valid JSON, or doesn't have the snapshot shape.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.message, "Request failed");

        let body = ErrorBody {
            error: &self.message,
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_store_error_renders_500_envelope() {
        let err: ApiError = StoreError::PoolExhausted.into();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Connection pool exhausted" }));
    }

    #[test]
    fn test_message_passes_through() {
        let err: ApiError = StoreError::QueryFailed("no such table: products".to_string()).into();
        assert_eq!(err.to_string(), "Query failed: no such table: products");
    }
}

//! # HTTP Boundary
//!
//! Maps the three routes onto [`SyncService`](crate::service::SyncService)
//! operations.
//!
//! ## Routes
//! ```text
//! ┌──────────────────┬────────────────────────────┬─────────────────────────┐
//! │ Route            │ Success (200)              │ Failure (500)           │
//! ├──────────────────┼────────────────────────────┼─────────────────────────┤
//! │ GET  /api/data   │ InventorySnapshot          │ {"error": "..."}        │
//! │ POST /api/save   │ {"message": "..."}         │ {"error": "..."}        │
//! │ POST /api/init   │ {"message": "..."}         │ {"error": "..."}        │
//! └──────────────────┴────────────────────────────┴─────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! let app = api::router().with_state(state);
//! ```

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use stockbook_core::InventorySnapshot;

use crate::error::ApiError;
use crate::AppState;

/// Acknowledgment for a successful save.
pub const SAVE_MESSAGE: &str = "Dữ liệu đã được lưu thành công";

/// Acknowledgment for a successful seed.
pub const INIT_MESSAGE: &str = "Dữ liệu mẫu đã được khởi tạo";

/// Create the API router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/data", get(get_data))
        .route("/api/save", post(save_data))
        .route("/api/init", post(init_data))
}

/// Success envelope for the write routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        MessageResponse {
            message: message.to_string(),
        }
    }
}

/// `GET /api/data`: every record of every collection.
async fn get_data(State(state): State<Arc<AppState>>) -> Result<Json<InventorySnapshot>, ApiError> {
    let snapshot = state.service.fetch_all().await?;
    Ok(Json(snapshot))
}

/// `POST /api/save`: replace all four collections with the body.
async fn save_data(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<InventorySnapshot>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(snapshot) = payload?;

    state.service.replace_all(&snapshot).await?;
    Ok(Json(MessageResponse::new(SAVE_MESSAGE)))
}

/// `POST /api/init`: reset the product catalog to the seed data.
async fn init_data(State(state): State<Arc<AppState>>) -> Result<Json<MessageResponse>, ApiError> {
    state.service.seed_defaults().await?;
    Ok(Json(MessageResponse::new(INIT_MESSAGE)))
}

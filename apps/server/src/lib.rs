//! # Stockbook Server
//!
//! HTTP backend for the uniform and shoe shop inventory front-end.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Stockbook Server                                │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  HTTP (api)    │  │  SyncService   │  │  RecordStore               ││
//! │  │                │  │                │  │  (stockbook-db)            ││
//! │  │ • /api/data    │─►│ • fetch_all    │─►│ • products                 ││
//! │  │ • /api/save    │  │ • replace_all  │  │ • sales_history            ││
//! │  │ • /api/init    │  │ • seed_defaults│  │ • import_history           ││
//! │  │                │  │                │  │ • price_history            ││
//! │  └────────────────┘  └────────────────┘  └────────────────────────────┘│
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ApiError ──► 500 {"error": "..."}                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables (a `.env` file is read too):
//! - `PORT` - HTTP port (default: 5000)
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `DATABASE_URL` - SQLite connection string (default: sqlite://stockbook.db)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `MAX_BODY_BYTES` - Request body limit (default: 10485760)

pub mod api;
pub mod config;
pub mod error;
pub mod service;

use std::sync::Arc;

use stockbook_db::RecordStore;

// Re-exports
pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use service::SyncService;

/// Shared application state.
pub struct AppState {
    pub service: SyncService,
}

impl AppState {
    /// Wraps a store in the service.
    pub fn new(store: Arc<dyn RecordStore>) -> Arc<Self> {
        Arc::new(AppState {
            service: SyncService::new(store),
        })
    }
}

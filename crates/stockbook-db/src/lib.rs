//! # stockbook-db: Record Store for Stockbook
//!
//! Persists the four record sets (products, sales history, import history,
//! price history) as JSON documents in SQLite, using sqlx for async access.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockbook Data Flow                              │
//! │                                                                         │
//! │  HTTP handler (POST /api/save)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SyncService::replace_all(snapshot)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   stockbook-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  RecordStore  │    │  Repository   │    │  Migrations  │  │   │
//! │  │   │  (store.rs)   │    │(collection.rs)│    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ Database      │───►│ Collection    │    │ 001_         │  │   │
//! │  │   │ (pool.rs)     │    │ Repository    │    │ collections  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   products · sales_history · import_history · price_history    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `RecordStore` trait, collections and document encoding
//! - [`pool`] - Connection pool creation and the SQLite `RecordStore`
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Store error types
//! - [`repository`] - Per-collection SQL
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockbook_db::{Collection, Database, DbConfig, RecordStore};
//!
//! let db = Database::new(DbConfig::new("sqlite://stockbook.db")).await?;
//!
//! let products = db.find_all(Collection::Products).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use pool::{Database, DbConfig};
pub use store::{decode, encode, Collection, CollectionBatch, Document, RecordStore};

// Repository re-export for convenience
pub use repository::collection::CollectionRepository;

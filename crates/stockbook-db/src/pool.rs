//! # Database Pool Management
//!
//! Connection pool creation and the SQLite-backed [`RecordStore`].
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Database Lifecycle                                 │
//! │                                                                         │
//! │  Server Startup                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(url) ← Configure pool settings                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← Create pool + run migrations            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Arc<dyn RecordStore> handed to the Sync Service                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Shutdown signal → server drains → Database::close().await             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## WAL Mode
//! SQLite WAL (Write-Ahead Logging) mode is enabled so `GET /api/data` readers
//! don't block a concurrent save, and a save doesn't block readers.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::migrations;
use crate::repository::collection::{self, CollectionRepository};
use crate::store::{Collection, CollectionBatch, Document, RecordStore};

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("sqlite://stockbook.db")
///     .max_connections(5)
///     .min_connections(1);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// SQLite connection string (`sqlite://path/to/file.db`, `sqlite::memory:`).
    pub url: String,

    /// Maximum number of connections in the pool.
    /// Default: 5
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 1
    pub min_connections: u32,

    /// Connection acquire timeout.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection (`None` keeps them forever).
    /// Default: 10 minutes
    pub idle_timeout: Option<Duration>,

    /// Whether to run migrations on connect.
    /// Default: true
    pub run_migrations: bool,
}

impl DbConfig {
    /// Creates a configuration for the given connection string.
    pub fn new(url: impl Into<String>) -> Self {
        DbConfig {
            url: url.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Some(Duration::from_secs(600)),
            run_migrations: true,
        }
    }

    /// Creates a configuration for a database file, created if missing.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        DbConfig::new(format!("sqlite://{}?mode=rwc", path.as_ref().display()))
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections.
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to run migrations on connect.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// Every in-memory connection is its own database, so the pool is pinned
    /// to exactly one connection that is never reaped.
    pub fn in_memory() -> Self {
        DbConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: None,
            run_migrations: true,
        }
    }
}

// =============================================================================
// Database
// =============================================================================

/// Store handle: owns the pool and implements [`RecordStore`].
///
/// Cheap to clone; clones share the pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the connection pool.
    ///
    /// ## What This Does
    /// 1. Creates the database file if it doesn't exist
    /// 2. Configures SQLite (WAL journal, NORMAL synchronous)
    /// 3. Creates the connection pool
    /// 4. Runs migrations (if enabled)
    pub async fn new(config: DbConfig) -> StoreResult<Self> {
        info!(url = %config.url, "Initializing database connection");

        let connect_options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?
            .journal_mode(SqliteJournalMode::Wal)
            // Data is safe from corruption, may lose last transaction on crash
            .synchronous(SqliteSynchronous::Normal)
            .create_if_missing(true);

        debug!("Connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(config.idle_timeout)
            .max_lifetime(None)
            .connect_with(connect_options)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        info!(max_connections = config.max_connections, "Database pool created");

        let db = Database { pool };

        if config.run_migrations {
            db.run_migrations().await?;
        }

        Ok(db)
    }

    /// Runs database migrations.
    ///
    /// Called by `new()` unless `run_migrations` is disabled in the config.
    pub async fn run_migrations(&self) -> StoreResult<()> {
        migrations::run_migrations(&self.pool).await
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the repository for one collection.
    pub fn collection(&self, collection: Collection) -> CollectionRepository {
        CollectionRepository::new(self.pool.clone(), collection)
    }

    /// Closes the connection pool.
    ///
    /// After calling close, every store operation fails with
    /// [`StoreError::ConnectionFailed`].
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Checks if the database can execute queries.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

#[async_trait]
impl RecordStore for Database {
    async fn find_all(&self, collection: Collection) -> StoreResult<Vec<Document>> {
        self.collection(collection).find_all().await
    }

    async fn delete_all(&self, collection: Collection) -> StoreResult<u64> {
        self.collection(collection).delete_all().await
    }

    async fn insert_many(&self, collection: Collection, documents: &[Document]) -> StoreResult<()> {
        self.collection(collection).insert_many(documents).await
    }

    async fn count(&self, collection: Collection) -> StoreResult<i64> {
        self.collection(collection).count().await
    }

    /// Replaces every batch inside one transaction.
    ///
    /// Either all listed collections end up with their new contents or none
    /// of them change. Concurrent replaces serialize on SQLite's write lock
    /// instead of interleaving.
    async fn replace_collections(&self, batches: Vec<CollectionBatch>) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;

        for batch in &batches {
            let removed = collection::delete_all_in(&mut tx, batch.collection).await?;
            collection::insert_many_in(&mut tx, batch.collection, &batch.documents).await?;

            debug!(
                collection = %batch.collection,
                removed,
                inserted = batch.documents.len(),
                "Collection replaced"
            );
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::TransactionFailed(e.to_string()))?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Record Store
//!
//! The abstraction the Sync Service talks to: four named collections of JSON
//! documents, each supporting `find_all`, `delete_all` and `insert_many`.
//!
//! ## Replace Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    replace_collections(batches)                         │
//! │                                                                         │
//! │  Default (any RecordStore)          Database (SQLite) override         │
//! │  ─────────────────────────          ──────────────────────────         │
//! │  for batch in batches:              BEGIN                               │
//! │     delete_all(collection)   ◄─┐      for batch in batches:             │
//! │     insert_many(documents)     │         DELETE FROM <table>           │
//! │                                │         INSERT ... (each doc)         │
//! │  First error aborts; earlier   │      COMMIT                            │
//! │  collections stay replaced,    │                                        │
//! │  the failing one may be EMPTY ─┘    Any error rolls everything back    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A store without transactions gets the default and with it the partial
//! update gap: two concurrent replaces can interleave, and a failed insert
//! after a successful delete leaves that collection empty.

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::StoreResult;

/// A stored record, kept exactly as serialized.
pub type Document = Value;

// =============================================================================
// Collection
// =============================================================================

/// The four record sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Products,
    SalesHistory,
    ImportHistory,
    PriceHistory,
}

impl Collection {
    /// All collections, in the order a full replace processes them.
    pub const ALL: [Collection; 4] = [
        Collection::Products,
        Collection::SalesHistory,
        Collection::ImportHistory,
        Collection::PriceHistory,
    ];

    /// Backing SQLite table.
    pub const fn table(self) -> &'static str {
        match self {
            Collection::Products => "products",
            Collection::SalesHistory => "sales_history",
            Collection::ImportHistory => "import_history",
            Collection::PriceHistory => "price_history",
        }
    }

    /// Key of this collection in the JSON snapshot envelope.
    pub const fn name(self) -> &'static str {
        match self {
            Collection::Products => "products",
            Collection::SalesHistory => "salesHistory",
            Collection::ImportHistory => "importHistory",
            Collection::PriceHistory => "priceHistory",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Batches
// =============================================================================

/// The full new contents of one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionBatch {
    pub collection: Collection,
    pub documents: Vec<Document>,
}

impl CollectionBatch {
    /// Creates a batch from already-encoded documents.
    pub fn new(collection: Collection, documents: Vec<Document>) -> Self {
        CollectionBatch {
            collection,
            documents,
        }
    }

    /// Creates a batch by encoding typed records.
    pub fn encode<T: Serialize>(collection: Collection, records: &[T]) -> StoreResult<Self> {
        Ok(CollectionBatch::new(collection, encode(records)?))
    }
}

// =============================================================================
// RecordStore
// =============================================================================

/// Storage for the four collections.
///
/// Object safe, so the Sync Service can hold an `Arc<dyn RecordStore>`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns every document in natural (insertion) order.
    async fn find_all(&self, collection: Collection) -> StoreResult<Vec<Document>>;

    /// Removes every document. Returns how many were removed.
    async fn delete_all(&self, collection: Collection) -> StoreResult<u64>;

    /// Appends documents in the given order. An empty slice is a no-op.
    async fn insert_many(&self, collection: Collection, documents: &[Document]) -> StoreResult<()>;

    /// Number of documents in a collection.
    async fn count(&self, collection: Collection) -> StoreResult<i64> {
        Ok(self.find_all(collection).await?.len() as i64)
    }

    /// Replaces each batch's collection with the batch's documents, in
    /// order: delete everything, then insert (skipped when the batch is
    /// empty). Aborts on the first failure without undoing earlier steps.
    async fn replace_collections(&self, batches: Vec<CollectionBatch>) -> StoreResult<()> {
        for batch in batches {
            let removed = self.delete_all(batch.collection).await?;
            debug!(collection = %batch.collection, removed, "Collection cleared");

            if batch.documents.is_empty() {
                continue;
            }

            self.insert_many(batch.collection, &batch.documents).await?;
            debug!(
                collection = %batch.collection,
                inserted = batch.documents.len(),
                "Collection refilled"
            );
        }

        Ok(())
    }
}

// =============================================================================
// Encoding
// =============================================================================

/// Serializes typed records into documents.
pub fn encode<T: Serialize>(records: &[T]) -> StoreResult<Vec<Document>> {
    records
        .iter()
        .map(|record| serde_json::to_value(record).map_err(Into::into))
        .collect()
}

/// Deserializes documents into typed records.
///
/// A document that no longer matches the record shape is a
/// [`StoreError::Encoding`](crate::StoreError::Encoding).
pub fn decode<T: DeserializeOwned>(documents: Vec<Document>) -> StoreResult<Vec<T>> {
    documents
        .into_iter()
        .map(|document| serde_json::from_value(document).map_err(Into::into))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

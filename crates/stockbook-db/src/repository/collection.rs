//! # Collection Repository
//!
//! Database operations for one document collection.
//!
//! ## Storage Layout
//! ```text
//! ┌──────┬───────────┬──────────────────────────────────────────────┐
//! │ seq  │ record_id │ doc                                          │
//! ├──────┼───────────┼──────────────────────────────────────────────┤
//! │  41  │     1     │ {"id":1,"type":"nam","size":2,...}           │
//! │  42  │     2     │ {"id":2,"type":"nam","size":3,...}           │
//! └──────┴───────────┴──────────────────────────────────────────────┘
//!   natural order     copied from doc.id      stored verbatim
//! ```
//!
//! The `*_in` functions take a bare connection so the same SQL runs on a
//! pooled connection or inside a transaction.

use serde_json::Value;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::store::{Collection, Document};

#[derive(sqlx::FromRow)]
struct DocumentRow {
    doc: String,
}

/// Repository for one collection.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.collection(Collection::Products);
/// let documents = repo.find_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct CollectionRepository {
    pool: SqlitePool,
    collection: Collection,
}

impl CollectionRepository {
    /// Creates a new CollectionRepository.
    pub fn new(pool: SqlitePool, collection: Collection) -> Self {
        CollectionRepository { pool, collection }
    }

    /// The collection this repository reads and writes.
    pub fn collection(&self) -> Collection {
        self.collection
    }

    /// Returns every document in insertion order.
    pub async fn find_all(&self) -> StoreResult<Vec<Document>> {
        let mut conn = self.pool.acquire().await?;
        find_all_in(&mut conn, self.collection).await
    }

    /// Deletes every document. Returns the number of rows removed.
    pub async fn delete_all(&self) -> StoreResult<u64> {
        let mut conn = self.pool.acquire().await?;
        delete_all_in(&mut conn, self.collection).await
    }

    /// Inserts documents in order.
    ///
    /// The batch is written in one transaction so a failure part-way through
    /// does not leave half of it behind.
    pub async fn insert_many(&self, documents: &[Document]) -> StoreResult<()> {
        if documents.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;

        insert_many_in(&mut tx, self.collection, documents).await?;

        tx.commit()
            .await
            .map_err(|e| StoreError::TransactionFailed(e.to_string()))?;

        Ok(())
    }

    /// Counts documents (for diagnostics).
    pub async fn count(&self) -> StoreResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", self.collection.table());

        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;

        Ok(count)
    }
}

// =============================================================================
// Connection-level operations
// =============================================================================

pub(crate) async fn find_all_in(
    conn: &mut SqliteConnection,
    collection: Collection,
) -> StoreResult<Vec<Document>> {
    let sql = format!("SELECT doc FROM {} ORDER BY seq", collection.table());

    let rows = sqlx::query_as::<_, DocumentRow>(&sql)
        .fetch_all(&mut *conn)
        .await?;

    debug!(collection = %collection, count = rows.len(), "Loaded documents");

    rows.into_iter()
        .map(|row| serde_json::from_str(&row.doc).map_err(StoreError::from))
        .collect()
}

pub(crate) async fn delete_all_in(
    conn: &mut SqliteConnection,
    collection: Collection,
) -> StoreResult<u64> {
    let sql = format!("DELETE FROM {}", collection.table());

    let result = sqlx::query(&sql).execute(&mut *conn).await?;

    Ok(result.rows_affected())
}

pub(crate) async fn insert_many_in(
    conn: &mut SqliteConnection,
    collection: Collection,
    documents: &[Document],
) -> StoreResult<()> {
    let sql = format!(
        "INSERT INTO {} (record_id, doc) VALUES (?1, ?2)",
        collection.table()
    );

    for document in documents {
        let record_id = document.get("id").and_then(Value::as_i64);
        let doc = serde_json::to_string(document)?;

        sqlx::query(&sql)
            .bind(record_id)
            .bind(doc)
            .execute(&mut *conn)
            .await?;
    }

    debug!(collection = %collection, count = documents.len(), "Inserted documents");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use serde_json::json;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_then_find_keeps_order() {
        let db = test_db().await;
        let repo = db.collection(Collection::SalesHistory);

        let documents = vec![
            json!({ "id": 30, "date": "c", "items": [], "totalAmount": 0 }),
            json!({ "id": 10, "date": "a", "items": [], "totalAmount": 0 }),
            json!({ "id": 20, "date": "b", "items": [], "totalAmount": 0 }),
        ];
        repo.insert_many(&documents).await.unwrap();

        let found = repo.find_all().await.unwrap();
        assert_eq!(found, documents);
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_delete_all_reports_rows() {
        let db = test_db().await;
        let repo = db.collection(Collection::Products);

        repo.insert_many(&[json!({ "id": 1 }), json!({ "id": 2 })])
            .await
            .unwrap();

        assert_eq!(repo.delete_all().await.unwrap(), 2);
        assert_eq!(repo.delete_all().await.unwrap(), 0);
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_record_id_copied_from_document() {
        let db = test_db().await;

        db.collection(Collection::Products)
            .insert_many(&[json!({ "id": 7, "name": "ĐP Nam 8" })])
            .await
            .unwrap();
        db.collection(Collection::PriceHistory)
            .insert_many(&[json!({ "product": "ĐP Nam 8", "change": 5000 })])
            .await
            .unwrap();

        let product_id: Option<i64> = sqlx::query_scalar("SELECT record_id FROM products")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(product_id, Some(7));

        let price_id: Option<i64> = sqlx::query_scalar("SELECT record_id FROM price_history")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(price_id, None);
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_accepted() {
        let db = test_db().await;
        let repo = db.collection(Collection::Products);

        repo.insert_many(&[json!({ "id": 1, "name": "a" }), json!({ "id": 1, "name": "b" })])
            .await
            .unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_collections_are_independent() {
        let db = test_db().await;

        db.collection(Collection::Products)
            .insert_many(&[json!({ "id": 1 })])
            .await
            .unwrap();
        db.collection(Collection::ImportHistory)
            .insert_many(&[json!({ "id": 2 })])
            .await
            .unwrap();

        db.collection(Collection::Products).delete_all().await.unwrap();

        assert_eq!(db.collection(Collection::ImportHistory).count().await.unwrap(), 1);
    }
}

//! # Sync Service
//!
//! The application layer between the HTTP routes and the Record Store.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         SyncService                                     │
//! │                                                                         │
//! │  fetch_all()          find_all × 4  ──► InventorySnapshot              │
//! │                                                                         │
//! │  replace_all(snap)    replace_collections([                            │
//! │                           products, salesHistory,                       │
//! │                           importHistory, priceHistory ])                │
//! │                                                                         │
//! │  seed_defaults()      replace_collections([ products ← catalog ])      │
//! │                       (histories untouched)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Whether a replace is atomic is up to the store: the SQLite store commits
//! all four collections together, a store using the default
//! `replace_collections` applies them one by one and stops at the first error.

use std::sync::Arc;

use stockbook_core::{seed_catalog, InventorySnapshot};
use stockbook_db::{decode, Collection, CollectionBatch, RecordStore, StoreResult};
use tracing::info;

/// Fetch-all, replace-all and seed-defaults over a [`RecordStore`].
#[derive(Clone)]
pub struct SyncService {
    store: Arc<dyn RecordStore>,
}

impl SyncService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        SyncService { store }
    }

    /// Reads every collection in insertion order.
    pub async fn fetch_all(&self) -> StoreResult<InventorySnapshot> {
        let snapshot = InventorySnapshot {
            products: decode(self.store.find_all(Collection::Products).await?)?,
            sales_history: decode(self.store.find_all(Collection::SalesHistory).await?)?,
            import_history: decode(self.store.find_all(Collection::ImportHistory).await?)?,
            price_history: decode(self.store.find_all(Collection::PriceHistory).await?)?,
        };

        info!(records = snapshot.record_count(), "Fetched all collections");
        Ok(snapshot)
    }

    /// Replaces all four collections with the snapshot's contents.
    pub async fn replace_all(&self, snapshot: &InventorySnapshot) -> StoreResult<()> {
        let batches = vec![
            CollectionBatch::encode(Collection::Products, &snapshot.products)?,
            CollectionBatch::encode(Collection::SalesHistory, &snapshot.sales_history)?,
            CollectionBatch::encode(Collection::ImportHistory, &snapshot.import_history)?,
            CollectionBatch::encode(Collection::PriceHistory, &snapshot.price_history)?,
        ];

        self.store.replace_collections(batches).await?;

        info!(
            products = snapshot.products.len(),
            sales = snapshot.sales_history.len(),
            imports = snapshot.import_history.len(),
            price_changes = snapshot.price_history.len(),
            "Replaced all collections"
        );
        Ok(())
    }

    /// Resets the product catalog to the built-in 24 products.
    ///
    /// Returns the number of products written.
    pub async fn seed_defaults(&self) -> StoreResult<usize> {
        let products = seed_catalog();
        let batch = CollectionBatch::encode(Collection::Products, &products)?;

        self.store.replace_collections(vec![batch]).await?;

        info!(products = products.len(), "Seeded default catalog");
        Ok(products.len())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use stockbook_core::{
        ImportLineItem, ImportRecord, PriceChange, Product, SaleLineItem, SaleRecord,
    };
    use stockbook_db::{Database, DbConfig, Document, StoreError};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    async fn test_service() -> SyncService {
        SyncService::new(Arc::new(test_db().await))
    }

    fn text(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    fn product(id: i64, name: &str, price: i64, stock: i64) -> Product {
        Product {
            id: id.into(),
            category: text("nam"),
            size: (id + 1).into(),
            name: text(name),
            price: price.into(),
            stock: stock.into(),
            imported: stock.into(),
            sold: 0.into(),
        }
    }

    fn sale(id: i64, product: &Product, quantity: i64) -> SaleRecord {
        let price = product.price.as_i64().unwrap();
        SaleRecord {
            id: id.into(),
            date: text("15/3/2024, 10:30:00"),
            items: vec![SaleLineItem {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price.clone(),
                quantity: quantity.into(),
                note: None,
                total: (price * quantity).into(),
            }],
            total_amount: (price * quantity).into(),
        }
    }

    fn import(id: i64, name: &str, quantity: i64, price: i64) -> ImportRecord {
        ImportRecord {
            id: id.into(),
            date: text("14/3/2024"),
            items: vec![ImportLineItem {
                name: text(name),
                quantity: quantity.into(),
                price: price.into(),
                total: (quantity * price).into(),
            }],
            total: quantity.into(),
            total_amount: (quantity * price).into(),
        }
    }

    fn sample_snapshot() -> InventorySnapshot {
        let shirt = product(1, "ĐP Nam 2", 110000, 10);
        let gym = product(2, "Đồ Gym 3", 120000, 4);

        InventorySnapshot {
            products: vec![shirt.clone(), gym.clone()],
            sales_history: vec![sale(1710495000000, &shirt, 2), sale(1710495060000, &gym, 1)],
            import_history: vec![import(1710400000000, "ĐP Nam 2", 12, 80000)],
            price_history: vec![PriceChange {
                date: text("13/3/2024"),
                product: text("Đồ Gym 3"),
                old_price: 115000.into(),
                new_price: 120000.into(),
                change: 5000.into(),
            }],
        }
    }

    fn other_snapshot() -> InventorySnapshot {
        let pants = product(9, "ĐP Nữ 2", 110000, 3);

        InventorySnapshot {
            products: vec![pants.clone()],
            sales_history: vec![sale(1720000000000, &pants, 1)],
            import_history: vec![import(1720000000001, "ĐP Nữ 2", 5, 70000)],
            price_history: vec![],
        }
    }

    #[tokio::test]
    async fn test_fetch_all_on_empty_store() {
        let service = test_service().await;

        let snapshot = service.fetch_all().await.unwrap();
        assert_eq!(snapshot, InventorySnapshot::default());
    }

    #[tokio::test]
    async fn test_replace_then_fetch_returns_exact_contents() {
        let service = test_service().await;
        let snapshot = sample_snapshot();

        service.replace_all(&snapshot).await.unwrap();

        assert_eq!(service.fetch_all().await.unwrap(), snapshot);
    }

    #[tokio::test]
    async fn test_replace_all_is_idempotent() {
        let service = test_service().await;
        let snapshot = sample_snapshot();

        service.replace_all(&snapshot).await.unwrap();
        service.replace_all(&snapshot).await.unwrap();

        assert_eq!(service.fetch_all().await.unwrap(), snapshot);
    }

    #[tokio::test]
    async fn test_round_trip_is_field_identical() {
        let service = test_service().await;
        service.replace_all(&sample_snapshot()).await.unwrap();

        let first = service.fetch_all().await.unwrap();
        service.replace_all(&first).await.unwrap();
        let second = service.fetch_all().await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_empty_histories_clear_collections() {
        let service = test_service().await;
        service.replace_all(&sample_snapshot()).await.unwrap();

        let products = vec![product(3, "ĐP Nam 4", 110000, 1)];
        service
            .replace_all(&InventorySnapshot {
                products: products.clone(),
                ..Default::default()
            })
            .await
            .unwrap();

        let snapshot = service.fetch_all().await.unwrap();
        assert_eq!(snapshot.products, products);
        assert!(snapshot.sales_history.is_empty());
        assert!(snapshot.import_history.is_empty());
        assert!(snapshot.price_history.is_empty());
    }

    #[tokio::test]
    async fn test_empty_products_clears_catalog() {
        let service = test_service().await;
        service.replace_all(&sample_snapshot()).await.unwrap();

        service.replace_all(&InventorySnapshot::default()).await.unwrap();

        assert_eq!(service.fetch_all().await.unwrap(), InventorySnapshot::default());
    }

    #[tokio::test]
    async fn test_seed_defaults_leaves_histories_untouched() {
        let service = test_service().await;
        let before = sample_snapshot();
        service.replace_all(&before).await.unwrap();

        let seeded = service.seed_defaults().await.unwrap();
        assert_eq!(seeded, 24);

        let after = service.fetch_all().await.unwrap();
        let ids: Vec<Option<i64>> = after.products.iter().map(|p| p.id.as_i64()).collect();
        assert_eq!(ids, (1..=24).map(Some).collect::<Vec<_>>());
        assert_eq!(after.sales_history, before.sales_history);
        assert_eq!(after.import_history, before.import_history);
        assert_eq!(after.price_history, before.price_history);
    }

    #[tokio::test]
    async fn test_seed_defaults_twice_keeps_24_products() {
        let service = test_service().await;

        service.seed_defaults().await.unwrap();
        service.seed_defaults().await.unwrap();

        assert_eq!(service.fetch_all().await.unwrap().products, seed_catalog());
    }

    // =========================================================================
    // Non-transactional store
    // =========================================================================

    /// Delegates to SQLite but fails every insert into one collection, and
    /// keeps the default sequential `replace_collections`.
    struct FailingInsertStore {
        inner: Database,
        failing: Collection,
    }

    #[async_trait]
    impl RecordStore for FailingInsertStore {
        async fn find_all(&self, collection: Collection) -> StoreResult<Vec<Document>> {
            self.inner.find_all(collection).await
        }

        async fn delete_all(&self, collection: Collection) -> StoreResult<u64> {
            self.inner.delete_all(collection).await
        }

        async fn insert_many(
            &self,
            collection: Collection,
            documents: &[Document],
        ) -> StoreResult<()> {
            if collection == self.failing {
                return Err(StoreError::QueryFailed("disk I/O error".to_string()));
            }
            self.inner.insert_many(collection, documents).await
        }
    }

    #[tokio::test]
    async fn test_failed_insert_leaves_collection_empty_without_transactions() {
        let db = test_db().await;
        let before = sample_snapshot();
        SyncService::new(Arc::new(db.clone()))
            .replace_all(&before)
            .await
            .unwrap();

        let service = SyncService::new(Arc::new(FailingInsertStore {
            inner: db,
            failing: Collection::SalesHistory,
        }));
        let next = other_snapshot();

        let err = service.replace_all(&next).await.unwrap_err();
        assert_eq!(err.to_string(), "Query failed: disk I/O error");

        let after = service.fetch_all().await.unwrap();
        // Replaced before the failure
        assert_eq!(after.products, next.products);
        // Deleted, never refilled
        assert!(after.sales_history.is_empty());
        // Never reached
        assert_eq!(after.import_history, before.import_history);
        assert_eq!(after.price_history, before.price_history);
    }
}

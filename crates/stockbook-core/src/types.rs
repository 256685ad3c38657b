//! # Record Types
//!
//! The four independent record sets and the snapshot envelope that carries
//! all of them at once.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Record Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   SaleRecord    │   │  ImportRecord   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id, date       │   │  id, date       │       │
//! │  │  type, size     │   │  items[] ───┐   │   │  items[] ───┐   │       │
//! │  │  name, price    │   │  totalAmount│   │   │  total      │   │       │
//! │  │  stock          │   └─────────────┼───┘   │  totalAmount│   │       │
//! │  │  imported, sold │                 ▼       └─────────────┼───┘       │
//! │  └─────────────────┘        SaleLineItem                   ▼           │
//! │                                                  ImportLineItem        │
//! │  ┌─────────────────┐                                                   │
//! │  │  PriceChange    │   linked to Product by name only                  │
//! │  │  date, product  │                                                   │
//! │  │  oldPrice, ...  │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Cross-Record Invariants
//! Nothing here ties `Product.sold` to the quantities in [`SaleRecord`], or a
//! [`PriceChange`] to an existing product. Ids are expected to be unique but
//! are never checked. Every record is stored and returned exactly as the
//! client sent it.
//!
//! ## Field Values
//! Nothing is validated beyond "is this readable as the field's kind":
//! - numeric fields are [`Amount`]s: integers, fractions and `null` are
//!   stored as sent, numeric text is read as a number
//! - text fields are `Option<String>`: `null` is kept, numbers and booleans
//!   are stored as their JSON text
//! - every struct is `#[serde(default)]`, so an absent field is stored as
//!   `0` / `null` / `[]`, the way a schema-less document store accepts a
//!   partial document

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use ts_rs::TS;

use crate::amount::Amount;

// =============================================================================
// Product
// =============================================================================

/// One catalog row (one SKU: a category in a given size).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Product {
    #[ts(type = "number | null")]
    pub id: Amount,

    /// Category label: `nam`, `nu`, `gym`, ...
    #[serde(rename = "type", deserialize_with = "lenient_text")]
    pub category: Option<String>,

    #[ts(type = "number | null")]
    pub size: Amount,

    /// Display name, e.g. `ĐP Nam 6`.
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,

    /// Unit price in đồng.
    #[ts(type = "number | null")]
    pub price: Amount,

    /// Units currently on hand.
    #[ts(type = "number | null")]
    pub stock: Amount,

    /// Cumulative units received through imports.
    #[ts(type = "number | null")]
    pub imported: Amount,

    /// Cumulative units sold.
    #[ts(type = "number | null")]
    pub sold: Amount,
}

// =============================================================================
// Sale History
// =============================================================================

/// A completed sale transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct SaleRecord {
    #[ts(type = "number | null")]
    pub id: Amount,
    /// Formatted by the client; stored verbatim.
    #[serde(deserialize_with = "lenient_text")]
    pub date: Option<String>,
    pub items: Vec<SaleLineItem>,
    #[ts(type = "number | null")]
    pub total_amount: Amount,
}

/// A line in a [`SaleRecord`].
///
/// `name` and `price` are copied from the product at the time of sale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct SaleLineItem {
    #[ts(type = "number | null")]
    pub product_id: Amount,
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[ts(type = "number | null")]
    pub price: Amount,
    #[ts(type = "number | null")]
    pub quantity: Amount,
    #[serde(deserialize_with = "lenient_text")]
    pub note: Option<String>,
    #[ts(type = "number | null")]
    pub total: Amount,
}

// =============================================================================
// Import History
// =============================================================================

/// A stock replenishment event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct ImportRecord {
    #[ts(type = "number | null")]
    pub id: Amount,
    #[serde(deserialize_with = "lenient_text")]
    pub date: Option<String>,
    pub items: Vec<ImportLineItem>,
    /// Units received across all items.
    #[ts(type = "number | null")]
    pub total: Amount,
    #[ts(type = "number | null")]
    pub total_amount: Amount,
}

/// A line in an [`ImportRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ImportLineItem {
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[ts(type = "number | null")]
    pub quantity: Amount,
    #[ts(type = "number | null")]
    pub price: Amount,
    #[ts(type = "number | null")]
    pub total: Amount,
}

// =============================================================================
// Price History
// =============================================================================

/// A price-change event.
///
/// `product` is the product's display name, not its id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct PriceChange {
    #[serde(deserialize_with = "lenient_text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub product: Option<String>,
    #[ts(type = "number | null")]
    pub old_price: Amount,
    #[ts(type = "number | null")]
    pub new_price: Amount,
    /// `new_price - old_price`, as computed by the client.
    #[ts(type = "number | null")]
    pub change: Amount,
}

// =============================================================================
// Text Fields
// =============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum WireText {
    Text(String),
    Number(Number),
    Flag(bool),
}

/// Reads a text field: `null` stays `None`, numbers and booleans become text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<WireText>::deserialize(deserializer)?.map(|wire| match wire {
        WireText::Text(text) => text,
        WireText::Number(number) => number.to_string(),
        WireText::Flag(flag) => flag.to_string(),
    }))
}

// =============================================================================
// Snapshot
// =============================================================================

/// The full contents of all four record sets.
///
/// This is both the `GET /api/data` response and the `POST /api/save`
/// request body:
/// ```json
/// {
///   "products": [...],
///   "salesHistory": [...],
///   "importHistory": [...],
///   "priceHistory": [...]
/// }
/// ```
///
/// `products` is required on input; the three history lists may be omitted
/// and then mean "empty".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InventorySnapshot {
    pub products: Vec<Product>,
    #[serde(default)]
    pub sales_history: Vec<SaleRecord>,
    #[serde(default)]
    pub import_history: Vec<ImportRecord>,
    #[serde(default)]
    pub price_history: Vec<PriceChange>,
}

impl InventorySnapshot {
    /// Total number of records across the four sets.
    pub fn record_count(&self) -> usize {
        self.products.len()
            + self.sales_history.len()
            + self.import_history.len()
            + self.price_history.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_product_wire_names() {
        let product = Product {
            id: 5.into(),
            category: text("nam"),
            size: 6.into(),
            name: text("ĐP Nam 6"),
            price: 115000.into(),
            stock: 3.into(),
            imported: 10.into(),
            sold: 7.into(),
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 5,
                "type": "nam",
                "size": 6,
                "name": "ĐP Nam 6",
                "price": 115000,
                "stock": 3,
                "imported": 10,
                "sold": 7
            })
        );
    }

    #[test]
    fn test_sale_record_wire_names() {
        let value = json!({
            "id": 1717171717171i64,
            "date": "31/5/2024, 10:15:00",
            "items": [{
                "productId": 5,
                "name": "ĐP Nam 6",
                "price": 115000,
                "quantity": 2,
                "note": "giao sau",
                "total": 230000
            }],
            "totalAmount": 230000
        });

        let sale: SaleRecord = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(sale.items[0].product_id, 5);
        assert_eq!(sale.items[0].note.as_deref(), Some("giao sau"));
        assert_eq!(sale.total_amount, 230000);
        assert_eq!(serde_json::to_value(&sale).unwrap(), value);
    }

    #[test]
    fn test_import_and_price_wire_names() {
        let import = ImportRecord {
            id: 2.into(),
            date: text("1/6/2024"),
            items: vec![ImportLineItem {
                name: text("ĐP Nữ 3"),
                quantity: 20.into(),
                price: 80000.into(),
                total: 1_600_000.into(),
            }],
            total: 20.into(),
            total_amount: 1_600_000.into(),
        };
        let value = serde_json::to_value(&import).unwrap();
        assert_eq!(value["totalAmount"], 1_600_000);
        assert_eq!(value["items"][0]["quantity"], 20);

        let change = PriceChange {
            date: text("2/6/2024"),
            product: text("ĐP Nữ 3"),
            old_price: 110000.into(),
            new_price: 115000.into(),
            change: 5000.into(),
        };
        let value = serde_json::to_value(&change).unwrap();
        assert_eq!(value["oldPrice"], 110000);
        assert_eq!(value["newPrice"], 115000);
        assert_eq!(value["change"], 5000);
    }

    #[test]
    fn test_fractional_numbers_are_kept() {
        let value = json!({
            "id": 1, "type": "nam", "size": 2, "name": "ĐP Nam 2",
            "price": 110000.5, "stock": 1.5, "imported": 2, "sold": 0.5
        });

        let product: Product = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(product.price.as_f64(), Some(110000.5));
        assert_eq!(serde_json::to_value(&product).unwrap(), value);
    }

    #[test]
    fn test_null_fields_are_kept() {
        let value = json!({
            "productId": 5,
            "name": "ĐP Nam 6",
            "price": null,
            "quantity": 1,
            "note": null,
            "total": 115000
        });

        let item: SaleLineItem = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(item.note, None);
        assert!(item.price.is_null());
        assert_eq!(serde_json::to_value(&item).unwrap(), value);
    }

    #[test]
    fn test_scalars_read_across_kinds() {
        let change: PriceChange = serde_json::from_value(json!({
            "date": 20240602,
            "product": "ĐP Nữ 3",
            "oldPrice": "110000",
            "newPrice": 115000,
            "change": "5000"
        }))
        .unwrap();

        assert_eq!(change.date.as_deref(), Some("20240602"));
        assert_eq!(change.old_price, 110000);
        assert_eq!(change.change, 5000);
    }

    #[test]
    fn test_missing_fields_default() {
        let product: Product = serde_json::from_value(json!({ "id": 9, "name": "ĐP Nữ 2" })).unwrap();
        assert_eq!(product.id, 9);
        assert_eq!(product.category, None);
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        // Documents previously served by a document store carry `_id`/`__v`.
        let product: Product = serde_json::from_value(json!({
            "_id": "665a1f",
            "__v": 0,
            "id": 1,
            "type": "nam",
            "size": 2,
            "name": "ĐP Nam 2",
            "price": 110000,
            "stock": 0,
            "imported": 0,
            "sold": 0
        }))
        .unwrap();
        assert_eq!(product.name.as_deref(), Some("ĐP Nam 2"));
    }

    #[test]
    fn test_snapshot_history_optional() {
        let snapshot: InventorySnapshot =
            serde_json::from_value(json!({ "products": [] })).unwrap();
        assert!(snapshot.sales_history.is_empty());
        assert!(snapshot.import_history.is_empty());
        assert!(snapshot.price_history.is_empty());
        assert_eq!(snapshot.record_count(), 0);
    }

    #[test]
    fn test_snapshot_requires_products() {
        let result = serde_json::from_value::<InventorySnapshot>(json!({ "salesHistory": [] }));
        assert!(result.is_err());
    }
}

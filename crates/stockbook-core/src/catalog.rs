//! # Seed Catalog
//!
//! The built-in product list written by `POST /api/init`.
//!
//! ## Layout
//! ```text
//! ┌──────────┬────────┬────────┬──────────────────┬──────────────────────┐
//! │   ids    │  type  │ sizes  │ name             │ price (đồng)         │
//! ├──────────┼────────┼────────┼──────────────────┼──────────────────────┤
//! │  1 –  8  │  nam   │ 2 – 9  │ ĐP Nam {size}    │ 110000 / 115000 (6+) │
//! │  9 – 16  │  nu    │ 2 – 9  │ ĐP Nữ {size}     │ 110000 / 115000 (6+) │
//! │ 17 – 24  │  gym   │ 2 – 9  │ Đồ Gym {size}    │ 120000 / 125000 (6+) │
//! └──────────┴────────┴────────┴──────────────────┴──────────────────────┘
//! ```
//!
//! Every row starts with zero stock, zero imported and zero sold. The rows are
//! spelled out literally so the exact values can be read (and diffed) here.

use crate::amount::Amount;
use crate::types::Product;

/// One row of the seed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedProduct {
    pub id: i64,
    pub category: &'static str,
    pub size: i64,
    pub name: &'static str,
    pub price: i64,
}

impl SeedProduct {
    const fn new(id: i64, category: &'static str, size: i64, name: &'static str, price: i64) -> Self {
        SeedProduct {
            id,
            category,
            size,
            name,
            price,
        }
    }

    /// Builds the catalog row with empty counters.
    pub fn to_product(&self) -> Product {
        Product {
            id: self.id.into(),
            category: Some(self.category.to_string()),
            size: self.size.into(),
            name: Some(self.name.to_string()),
            price: self.price.into(),
            stock: Amount::default(),
            imported: Amount::default(),
            sold: Amount::default(),
        }
    }
}

/// The seed table, in id order.
pub const SEED_CATALOG: [SeedProduct; 24] = [
    // Đồng phục Nam
    SeedProduct::new(1, "nam", 2, "ĐP Nam 2", 110000),
    SeedProduct::new(2, "nam", 3, "ĐP Nam 3", 110000),
    SeedProduct::new(3, "nam", 4, "ĐP Nam 4", 110000),
    SeedProduct::new(4, "nam", 5, "ĐP Nam 5", 110000),
    SeedProduct::new(5, "nam", 6, "ĐP Nam 6", 115000),
    SeedProduct::new(6, "nam", 7, "ĐP Nam 7", 115000),
    SeedProduct::new(7, "nam", 8, "ĐP Nam 8", 115000),
    SeedProduct::new(8, "nam", 9, "ĐP Nam 9", 115000),
    // Đồng phục Nữ
    SeedProduct::new(9, "nu", 2, "ĐP Nữ 2", 110000),
    SeedProduct::new(10, "nu", 3, "ĐP Nữ 3", 110000),
    SeedProduct::new(11, "nu", 4, "ĐP Nữ 4", 110000),
    SeedProduct::new(12, "nu", 5, "ĐP Nữ 5", 110000),
    SeedProduct::new(13, "nu", 6, "ĐP Nữ 6", 115000),
    SeedProduct::new(14, "nu", 7, "ĐP Nữ 7", 115000),
    SeedProduct::new(15, "nu", 8, "ĐP Nữ 8", 115000),
    SeedProduct::new(16, "nu", 9, "ĐP Nữ 9", 115000),
    // Đồ thể dục
    SeedProduct::new(17, "gym", 2, "Đồ Gym 2", 120000),
    SeedProduct::new(18, "gym", 3, "Đồ Gym 3", 120000),
    SeedProduct::new(19, "gym", 4, "Đồ Gym 4", 120000),
    SeedProduct::new(20, "gym", 5, "Đồ Gym 5", 120000),
    SeedProduct::new(21, "gym", 6, "Đồ Gym 6", 125000),
    SeedProduct::new(22, "gym", 7, "Đồ Gym 7", 125000),
    SeedProduct::new(23, "gym", 8, "Đồ Gym 8", 125000),
    SeedProduct::new(24, "gym", 9, "Đồ Gym 9", 125000),
];

/// Returns the seed catalog as products.
pub fn seed_catalog() -> Vec<Product> {
    SEED_CATALOG.iter().map(SeedProduct::to_product).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_24_sequential_ids() {
        let products = seed_catalog();
        assert_eq!(products.len(), 24);

        let ids: Vec<Option<i64>> = products.iter().map(|p| p.id.as_i64()).collect();
        assert_eq!(ids, (1..=24).map(Some).collect::<Vec<_>>());
    }

    #[test]
    fn test_catalog_entry_five() {
        let product = &seed_catalog()[4];
        assert_eq!(product.id, 5);
        assert_eq!(product.name.as_deref(), Some("ĐP Nam 6"));
        assert_eq!(product.price, 115000);
        assert_eq!(product.size, 6);
        assert_eq!(product.category.as_deref(), Some("nam"));
    }

    #[test]
    fn test_catalog_categories_cover_sizes_2_to_9() {
        for category in ["nam", "nu", "gym"] {
            let sizes: Vec<i64> = SEED_CATALOG
                .iter()
                .filter(|row| row.category == category)
                .map(|row| row.size)
                .collect();
            assert_eq!(sizes, (2..=9).collect::<Vec<i64>>(), "category {}", category);
        }
    }

    #[test]
    fn test_price_follows_size_tier() {
        for row in SEED_CATALOG.iter() {
            let expected = match (row.category, row.size >= 6) {
                ("gym", false) => 120000,
                ("gym", true) => 125000,
                (_, false) => 110000,
                (_, true) => 115000,
            };
            assert_eq!(row.price, expected, "{}", row.name);
        }
    }

    #[test]
    fn test_catalog_counters_start_at_zero() {
        assert!(seed_catalog()
            .iter()
            .all(|p| p.stock == 0 && p.imported == 0 && p.sold == 0));
    }
}

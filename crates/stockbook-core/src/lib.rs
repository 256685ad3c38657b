//! # stockbook-core: Record Schemas for Stockbook
//!
//! Pure types shared by the store and the HTTP server. Nothing in here
//! performs I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockbook Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front-end (browser)                          │   │
//! │  │     owns the canonical state, mirrors it with /api/save         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON over HTTP                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/server (Sync Service)                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ stockbook-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐  ┌────────────────┐  ┌────────────────┐   │   │
//! │  │   │     types      │  │    snapshot    │  │    catalog     │   │   │
//! │  │   │ Product        │  │ Inventory-     │  │ 24 built-in    │   │   │
//! │  │   │ SaleRecord ... │  │ Snapshot       │  │ products       │   │   │
//! │  │   └────────────────┘  └────────────────┘  └────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stockbook-db (Record Store)                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The four record schemas and their line items
//! - [`catalog`] - The static seed catalog
//!
//! ## Wire Compatibility
//!
//! Field names are the de facto schema of data already stored and of the
//! front-end that sends it, so every struct pins its JSON names with serde
//! attributes (`type`, `productId`, `totalAmount`, ...). Amounts are whole
//! đồng (VND has no minor unit) and are kept as `i64`.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod catalog;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use amount::Amount;
pub use catalog::{seed_catalog, SeedProduct, SEED_CATALOG};
pub use types::*;

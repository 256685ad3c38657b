//! # Repository Module
//!
//! SQL for the document collections.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Sync Service                                                          │
//! │       │                                                                 │
//! │       │  store.find_all(Collection::Products)                          │
//! │       ▼                                                                 │
//! │  Database (RecordStore)                                                │
//! │       │                                                                 │
//! │       │  db.collection(Collection::Products).find_all()                │
//! │       ▼                                                                 │
//! │  CollectionRepository                                                  │
//! │  ├── find_all(&self)                                                   │
//! │  ├── delete_all(&self)                                                 │
//! │  ├── insert_many(&self, documents)                                     │
//! │  └── count(&self)                                                      │
//! │       │                                                                 │
//! │       │  SQL Query (on a pooled connection or inside a transaction)    │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CollectionRepository`](collection::CollectionRepository) - one of the
//!   four document collections

pub mod collection;

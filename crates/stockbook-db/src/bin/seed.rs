//! # Seed Catalog Loader
//!
//! Writes the default 24-product catalog into a database from the command
//! line, the same data `POST /api/init` produces.
//!
//! ## Usage
//! ```bash
//! # Seed the default database (sqlite://stockbook.db)
//! cargo run -p stockbook-db --bin seed
//!
//! # Specify database
//! cargo run -p stockbook-db --bin seed -- --db sqlite://./data/stockbook.db
//!
//! # Overwrite an existing catalog
//! cargo run -p stockbook-db --bin seed -- --force
//! ```
//!
//! ## Seeded Products
//! | Ids   | Type | Sizes | Price                          |
//! |-------|------|-------|--------------------------------|
//! | 1-8   | nam  | 2-9   | 110,000 (2-5) / 115,000 (6-9)  |
//! | 9-16  | nu   | 2-9   | 110,000 (2-5) / 115,000 (6-9)  |
//! | 17-24 | gym  | 2-9   | 120,000 (2-5) / 125,000 (6-9)  |
//!
//! Sale, import and price histories are never touched.

use std::env;

use stockbook_core::seed_catalog;
use stockbook_db::migrations::migration_status;
use stockbook_db::{Collection, CollectionBatch, Database, DbConfig, RecordStore};

const DEFAULT_DB: &str = "sqlite://stockbook.db";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_url = String::from(DEFAULT_DB);
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_url = args[i + 1].clone();
                    i += 1;
                }
            }
            "--force" | "-f" => force = true,
            "--help" | "-h" => {
                println!("Stockbook Seed Catalog Loader");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <URL>     Database URL (default: {})", DEFAULT_DB);
                println!("  -f, --force        Replace an existing product catalog");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Ignoring unknown argument: {}", other);
            }
        }
        i += 1;
    }

    println!("🌱 Stockbook Seed Catalog Loader");
    println!("================================");
    println!("Database: {}", db_url);
    println!();

    let db = Database::new(DbConfig::new(&db_url)).await?;
    println!("✓ Connected to database");

    let (total, applied) = migration_status(db.pool()).await?;
    println!("✓ Migrations applied ({}/{})", applied, total);

    let existing = db.count(Collection::Products).await?;
    if existing > 0 && !force {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to keep the current catalog.");
        println!("  Run again with --force to replace it.");
        db.close().await;
        return Ok(());
    }

    let products = seed_catalog();
    let batch = CollectionBatch::encode(Collection::Products, &products)?;
    db.replace_collections(vec![batch]).await?;

    println!();
    if existing > 0 {
        println!("✓ Replaced {} products with {}", existing, products.len());
    } else {
        println!("✓ Seeded {} products", products.len());
    }

    db.close().await;
    println!("✓ Seed complete!");

    Ok(())
}

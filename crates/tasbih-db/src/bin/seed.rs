//! # Seed Data Generator
//!
//! Fills the tasbih collection with the built-in suggestions for development.
//!
//! ## Usage
//! ```bash
//! # Seed the database from the default config
//! cargo run -p tasbih-db --bin seed
//!
//! # Specify database path
//! cargo run -p tasbih-db --bin seed -- --db ./data/tasbih.db
//!
//! # Use a specific config file
//! cargo run -p tasbih-db --bin seed -- --config ./tasbih.toml
//! ```
//!
//! Suggestions already present (same Arabic text) are skipped, so running it
//! twice is harmless.

use std::env;
use std::path::PathBuf;

use tasbih_core::suggestions;
use tasbih_db::{AppConfig, Database, DbError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let args: Vec<String> = env::args().collect();

    let mut db_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if let Some(value) = args.get(i + 1) {
                    db_path = Some(PathBuf::from(value));
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if let Some(value) = args.get(i + 1) {
                    config_path = Some(PathBuf::from(value));
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Tasbih Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>      Database file path (overrides config)");
                println!("  -c, --config <PATH>  Config file path (default: platform config dir)");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            other => eprintln!("Ignoring unknown argument: {other}"),
        }
        i += 1;
    }

    let mut config = AppConfig::load(config_path)?;
    if let Some(path) = db_path {
        config.database.path = path;
    }

    println!("🌱 Tasbih Seed Data Generator");
    println!("=============================");
    println!("Database: {}", config.database.path.display());
    println!("Key:      {}", config.store.key);
    println!();

    let db = Database::new(config.to_db_config()).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let store = db.tasbihat_with_key(config.store.key.clone());
    let existing = store.load().await?;
    println!("  Existing tasbihat: {}", existing.len());
    println!();

    let mut added = 0;
    let mut skipped = 0;

    for suggestion in suggestions::all() {
        match store.insert_draft(suggestion.to_draft()).await {
            Ok(t) => {
                println!("  + {} ({}) ×{}", t.transliteration, t.arabic, t.target);
                added += 1;
            }
            Err(DbError::DuplicateEntry { .. }) => {
                println!("  = {} already present", suggestion.transliteration);
                skipped += 1;
            }
            Err(e) => {
                db.close().await;
                return Err(e.into());
            }
        }
    }

    println!();
    println!("✓ Seed complete: {added} added, {skipped} skipped");
    println!("  Total tasbihat: {}", store.list().await.len());

    db.close().await;
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tasbih_db=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();
}

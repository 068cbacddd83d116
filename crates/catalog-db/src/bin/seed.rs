//! # Seed Data Generator
//!
//! Populates the catalog with fake products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 100 products into $DATABASE_URI (or ./catalog.db)
//! cargo run -p catalog-db --bin seed
//!
//! # Generate a custom amount into a specific database
//! cargo run -p catalog-db --bin seed -- --count 500 --db sqlite://./data/catalog.db?mode=rwc
//!
//! # Reproducible data
//! cargo run -p catalog-db --bin seed -- --seed 42
//! ```
//!
//! Products come from `ProductFactory`: names like Hat, Pants, Hammer;
//! prices $0.50 - $2000.00; random availability and category.

use catalog_core::{Category, ProductFactory};
use catalog_db::{Database, DbConfig, DbError, ProductRepository};
use clap::Parser;
use rand::Rng;
use tracing::{debug, info, warn};

/// Product catalog seed data generator
#[derive(Parser, Debug)]
#[command(name = "seed")]
#[command(about = "Fill the product catalog with fake products")]
#[command(version)]
struct Cli {
    /// Number of products to generate
    #[arg(short, long, default_value_t = 100)]
    count: usize,

    /// Database URL (defaults to $DATABASE_URI, then $DATABASE_URL)
    #[arg(short, long)]
    db: Option<String>,

    /// RNG seed for reproducible products
    #[arg(short, long)]
    seed: Option<u64>,

    /// Remove existing products first
    #[arg(long)]
    reset: bool,

    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), DbError> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .init();

    let config = match cli.db {
        Some(url) => DbConfig::new(url),
        None => DbConfig::from_env(),
    };

    let db = Database::new(config).await?;
    let products = db.products();

    if cli.reset {
        let removed = products.delete_all().await?;
        info!(removed, "Removed existing products");
    }

    let existing = products.count().await?;
    if existing > 0 {
        warn!(existing, "Catalog already has products; adding more");
    }

    let start = std::time::Instant::now();
    let generated = match cli.seed {
        Some(seed) => seed_products(&products, &mut ProductFactory::seeded(seed), cli.count).await?,
        None => seed_products(&products, &mut ProductFactory::new(), cli.count).await?,
    };

    info!(generated, elapsed = ?start.elapsed(), "Seed complete");

    for category in Category::ALL {
        let count = products.find_by_category(category).await?.len();
        info!(category = %category, count, "Products per category");
    }

    let available = products.find_by_availability(true).await?.len();
    info!(available, total = products.count().await?, "Catalog summary");

    db.close().await;
    Ok(())
}

/// Creates `count` factory products, stopping at the first failure.
async fn seed_products<R: Rng>(
    products: &ProductRepository,
    factory: &mut ProductFactory<R>,
    count: usize,
) -> Result<usize, DbError> {
    let mut generated = 0;

    for mut product in factory.build_batch(count) {
        products.create(&mut product).await?;
        generated += 1;

        debug!(product = %product, price = %product.price, "Created");

        if generated % 100 == 0 {
            info!(generated, "Generating products...");
        }
    }

    Ok(generated)
}

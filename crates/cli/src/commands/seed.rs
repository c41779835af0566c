//! Seed the sample e-commerce database.
//!
//! Drops the five sample collections, inserts the fixture data in dependency
//! order, and creates the secondary indexes. Destructive by design: prior
//! contents of those collections are gone after a run.
//!
//! # Environment Variables
//!
//! - `MONGODB_URL` - MongoDB connection string (default: `mongodb://localhost:27017`)
//! - `MERCADO_DATABASE` - Target database name (default: `ecommerce`)

use tracing::info;

use mercado_seeder::{SeederConfig, db, run as seed};

/// Run a full seeding pass.
///
/// # Errors
///
/// Returns an error if the database is unreachable or any insert or
/// index-creation call fails; there is no retry or rollback.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = SeederConfig::from_env();

    info!(database = %config.database, "Connecting to MongoDB");
    let database = db::connect(&config).await?;

    let summary = seed(&database).await?;

    info!("Seeding complete!");
    info!("  Categories: {}", summary.categories);
    info!("  Products: {}", summary.products);
    info!("  Users: {}", summary.users);
    info!("  Orders: {}", summary.orders);
    info!("  Reviews: {}", summary.reviews);
    info!("  Indexes: {}", summary.indexes);

    Ok(())
}

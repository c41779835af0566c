//! Show statistics for the seeded collections.
//!
//! Read-only: prints document counts and index names for each of the five
//! sample collections. Useful for checking what a seeding run left behind.
//!
//! # Environment Variables
//!
//! - `MONGODB_URL` - MongoDB connection string (default: `mongodb://localhost:27017`)
//! - `MERCADO_DATABASE` - Target database name (default: `ecommerce`)

use bson::{Document, doc};
use tracing::info;

use mercado_seeder::{SeederConfig, db};

/// Print per-collection document counts and index names.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a count fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = SeederConfig::from_env();
    let database = db::connect(&config).await?;

    info!("Collection statistics");
    info!("=====================");
    info!("Database: {}", config.database);

    for name in db::COLLECTIONS {
        let collection = database.collection::<Document>(name);
        let count = collection.count_documents(doc! {}).await?;

        // A collection that has never been seeded has no namespace yet;
        // report it as empty rather than failing the whole listing.
        let indexes = match collection.list_index_names().await {
            Ok(names) => names,
            Err(e) if db::is_namespace_not_found(&e) => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        if indexes.is_empty() {
            info!("  {name}: {count} documents, no indexes");
        } else {
            info!("  {name}: {count} documents, indexes: {}", indexes.join(", "));
        }
    }

    Ok(())
}

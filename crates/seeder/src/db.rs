//! Database connection and collection reset.
//!
//! # Database: `ecommerce`
//!
//! The seeder owns five collections, all dropped and recreated on every run:
//!
//! - `categorias` - Product categories
//! - `productos` - Products (reference categories)
//! - `usuarios` - Customers (preferences reference categories)
//! - `pedidos` - Orders (reference users and products)
//! - `reviews` - Product reviews (reference products and users)

use bson::Document;
use mongodb::error::ErrorKind;
use mongodb::{Client, Database};
use secrecy::ExposeSecret;
use tracing::debug;

use crate::config::SeederConfig;
use crate::error::{Result, SeedError};
use crate::models::{Category, Order, Product, Review, User};

/// MongoDB server error code for a drop/list against a missing namespace.
const NAMESPACE_NOT_FOUND: i32 = 26;

/// The five seeded collections, in reset order.
pub const COLLECTIONS: [&str; 5] = [
    User::COLLECTION,
    Product::COLLECTION,
    Category::COLLECTION,
    Order::COLLECTION,
    Review::COLLECTION,
];

/// Connect to MongoDB and select the target database.
///
/// The database is created lazily by the server on first write, so this
/// succeeds even before the first seeding run.
///
/// # Errors
///
/// Returns [`SeedError::Database`] if the connection string cannot be parsed
/// or the client cannot be initialized.
pub async fn connect(config: &SeederConfig) -> Result<Database> {
    let client = Client::with_uri_str(config.connection_string.expose_secret()).await?;
    Ok(client.database(&config.database))
}

/// Drop all seeded collections so a re-run starts from a clean slate.
///
/// A collection that does not exist yet is a no-op; any other failure aborts.
///
/// # Errors
///
/// Returns [`SeedError::Database`] if a drop fails for any reason other than
/// the collection being absent.
pub async fn reset_collections(db: &Database) -> Result<()> {
    for name in COLLECTIONS {
        match db.collection::<Document>(name).drop().await {
            Ok(()) => debug!(collection = name, "dropped collection"),
            Err(e) if is_namespace_not_found(&e) => {
                debug!(collection = name, "collection absent, nothing to drop");
            }
            Err(e) => return Err(SeedError::Database(e)),
        }
    }
    Ok(())
}

/// Whether the server rejected an operation because the namespace is missing.
#[must_use]
pub fn is_namespace_not_found(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Command(command_error) if command_error.code == NAMESPACE_NOT_FOUND
    )
}

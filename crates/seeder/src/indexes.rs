//! Secondary index definitions and creation.
//!
//! The index set is declared as data so it can be checked without a server;
//! [`create_all`] walks the table and issues one `createIndexes` call per
//! entry. Creating an index that already exists with the same definition is
//! a no-op on the server, which keeps re-runs safe.

use bson::{Document, doc};
use mongodb::options::IndexOptions;
use mongodb::{Database, IndexModel};
use tracing::debug;

use crate::error::Result;
use crate::models::{Order, Product, Review, User};

/// A single-field secondary index.
#[derive(Debug, Clone)]
pub struct IndexSpec {
    /// Collection the index belongs to.
    pub collection: &'static str,
    /// Index key document (field name to sort order).
    pub keys: Document,
    /// Whether the index enforces uniqueness.
    pub unique: bool,
}

/// The full index set for the seeded database.
#[must_use]
pub fn specs() -> Vec<IndexSpec> {
    vec![
        IndexSpec {
            collection: User::COLLECTION,
            keys: doc! { "email": 1 },
            unique: true,
        },
        IndexSpec {
            collection: Product::COLLECTION,
            keys: doc! { "nombre": 1 },
            unique: false,
        },
        IndexSpec {
            collection: Product::COLLECTION,
            keys: doc! { "categoria_id": 1 },
            unique: false,
        },
        IndexSpec {
            collection: Review::COLLECTION,
            keys: doc! { "producto_id": 1 },
            unique: false,
        },
        IndexSpec {
            collection: Review::COLLECTION,
            keys: doc! { "usuario_id": 1 },
            unique: false,
        },
        IndexSpec {
            collection: Order::COLLECTION,
            keys: doc! { "usuario_id": 1 },
            unique: false,
        },
        IndexSpec {
            collection: Order::COLLECTION,
            keys: doc! { "fecha": 1 },
            unique: false,
        },
    ]
}

/// Create every index in [`specs`], returning how many were requested.
///
/// # Errors
///
/// Returns [`crate::SeedError::Database`] on the first index the server
/// rejects, e.g. a unique index over a collection that already violates it.
pub async fn create_all(database: &Database) -> Result<usize> {
    let specs = specs();
    let count = specs.len();

    for spec in specs {
        let model = if spec.unique {
            IndexModel::builder()
                .keys(spec.keys)
                .options(IndexOptions::builder().unique(true).build())
                .build()
        } else {
            IndexModel::builder().keys(spec.keys).build()
        };

        let created = database
            .collection::<Document>(spec.collection)
            .create_index(model)
            .await?;
        debug!(
            collection = spec.collection,
            index = %created.index_name,
            "created index"
        );
    }

    Ok(count)
}

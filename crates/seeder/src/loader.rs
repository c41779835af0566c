//! Sequential loading of the fixture sets.
//!
//! Everything here is strictly ordered: each step consumes ids captured by
//! the previous one, so nothing runs concurrently and nothing is retried.
//! Categories, products and users are inserted one document at a time to
//! capture each server-assigned id; orders and reviews go in as one batch
//! per collection.

use bson::oid::ObjectId;
use mongodb::{Collection, Database};
use serde::Serialize;
use tracing::info;

use crate::db;
use crate::error::{Result, SeedError};
use crate::fixtures::{self, CategoryIds, ProductIds, UserIds};
use crate::indexes;
use crate::models::{Category, Order, Product, Review, User};

/// What a seeding run wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// Documents inserted into `categorias`.
    pub categories: usize,
    /// Documents inserted into `productos`.
    pub products: usize,
    /// Documents inserted into `usuarios`.
    pub users: usize,
    /// Documents inserted into `pedidos`.
    pub orders: usize,
    /// Documents inserted into `reviews`.
    pub reviews: usize,
    /// Indexes created across all collections.
    pub indexes: usize,
}

/// Reset the five collections, load every fixture set, and build the
/// indexes.
///
/// Interrupting mid-run leaves the database partially seeded; re-running is
/// the recovery path, since the leading reset drops whatever a previous run
/// left behind.
///
/// # Errors
///
/// Returns [`SeedError`] on the first failed operation; nothing is rolled
/// back.
pub async fn run(database: &Database) -> Result<SeedSummary> {
    info!(database = database.name(), "resetting collections");
    db::reset_collections(database).await?;

    let categories = load_categories(database).await?;
    let products = load_products(database, &categories).await?;
    let users = load_users(database, &categories).await?;
    let orders = load_orders(database, &users, &products).await?;
    let reviews = load_reviews(database, &products, &users).await?;
    let indexes = indexes::create_all(database).await?;

    let summary = SeedSummary {
        categories: 5,
        products: 8,
        users: 4,
        orders,
        reviews,
        indexes,
    };
    info!(database = database.name(), "sample dataset loaded");
    Ok(summary)
}

/// Insert the category fixtures, capturing each assigned id.
pub async fn load_categories(database: &Database) -> Result<CategoryIds> {
    let collection = database.collection::<Category>(Category::COLLECTION);
    let [electronics, clothing, home, sports, books] = fixtures::categories();

    let ids = CategoryIds {
        electronics: insert_capturing(&collection, &electronics).await?,
        clothing: insert_capturing(&collection, &clothing).await?,
        home: insert_capturing(&collection, &home).await?,
        sports: insert_capturing(&collection, &sports).await?,
        books: insert_capturing(&collection, &books).await?,
    };

    info!(collection = Category::COLLECTION, count = 5, "seeded categories");
    Ok(ids)
}

/// Insert the product fixtures, capturing each assigned id.
pub async fn load_products(database: &Database, categories: &CategoryIds) -> Result<ProductIds> {
    let collection = database.collection::<Product>(Product::COLLECTION);
    let [smartphone, laptop, tshirt, running_shoes, pan_set, novel, smartwatch, rain_jacket] =
        fixtures::products(categories);

    let ids = ProductIds {
        smartphone: insert_capturing(&collection, &smartphone).await?,
        laptop: insert_capturing(&collection, &laptop).await?,
        tshirt: insert_capturing(&collection, &tshirt).await?,
        running_shoes: insert_capturing(&collection, &running_shoes).await?,
        pan_set: insert_capturing(&collection, &pan_set).await?,
        novel: insert_capturing(&collection, &novel).await?,
        smartwatch: insert_capturing(&collection, &smartwatch).await?,
        rain_jacket: insert_capturing(&collection, &rain_jacket).await?,
    };

    info!(collection = Product::COLLECTION, count = 8, "seeded products");
    Ok(ids)
}

/// Insert the user fixtures, capturing each assigned id.
pub async fn load_users(database: &Database, categories: &CategoryIds) -> Result<UserIds> {
    let collection = database.collection::<User>(User::COLLECTION);
    let [ana, carlos, elena, luis] = fixtures::users(categories);

    let ids = UserIds {
        ana: insert_capturing(&collection, &ana).await?,
        carlos: insert_capturing(&collection, &carlos).await?,
        elena: insert_capturing(&collection, &elena).await?,
        luis: insert_capturing(&collection, &luis).await?,
    };

    info!(collection = User::COLLECTION, count = 4, "seeded users");
    Ok(ids)
}

/// Insert the order fixtures as one batch.
pub async fn load_orders(
    database: &Database,
    users: &UserIds,
    products: &ProductIds,
) -> Result<usize> {
    let collection = database.collection::<Order>(Order::COLLECTION);
    let orders = fixtures::orders(users, products);
    let inserted = collection.insert_many(&orders).await?;

    let count = inserted.inserted_ids.len();
    info!(collection = Order::COLLECTION, count, "seeded orders");
    Ok(count)
}

/// Insert the review fixtures as one batch.
pub async fn load_reviews(
    database: &Database,
    products: &ProductIds,
    users: &UserIds,
) -> Result<usize> {
    let collection = database.collection::<Review>(Review::COLLECTION);
    let reviews = fixtures::reviews(products, users);
    let inserted = collection.insert_many(&reviews).await?;

    let count = inserted.inserted_ids.len();
    info!(collection = Review::COLLECTION, count, "seeded reviews");
    Ok(count)
}

/// Insert a single document and return the server-assigned id.
async fn insert_capturing<T, I>(collection: &Collection<T>, document: &T) -> Result<I>
where
    T: Serialize + Send + Sync,
    I: From<ObjectId>,
{
    let inserted = collection.insert_one(document).await?;
    let id = inserted
        .inserted_id
        .as_object_id()
        .ok_or_else(|| SeedError::UnexpectedIdType {
            collection: collection.name().to_owned(),
        })?;
    Ok(I::from(id))
}

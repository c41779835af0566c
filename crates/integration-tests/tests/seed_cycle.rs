//! Live-database tests for the full seeding cycle.
//!
//! These tests require:
//! - A running MongoDB instance (`MONGODB_URL`, default `mongodb://localhost:27017`)
//!
//! Each test seeds a uniquely-named throwaway database and drops it at the
//! end, so parallel runs do not interfere with each other or with a local
//! `ecommerce` database.
//!
//! Run with: `cargo test -p mercado-integration-tests -- --ignored`

use std::collections::HashSet;
use std::str::FromStr;

use bson::oid::ObjectId;
use bson::{Document, doc};
use mongodb::Database;
use rust_decimal::Decimal;
use secrecy::SecretString;

use mercado_seeder::{SeederConfig, db, run};

/// Per-test configuration with a unique throwaway database name.
fn test_config() -> SeederConfig {
    let url =
        std::env::var("MONGODB_URL").unwrap_or_else(|_| SeederConfig::DEFAULT_URL.to_string());
    SeederConfig {
        connection_string: SecretString::from(url),
        database: format!("ecommerce_test_{}", ObjectId::new().to_hex()),
    }
}

/// Connect and run one full seeding pass.
async fn seeded_database() -> Database {
    let database = db::connect(&test_config())
        .await
        .expect("Failed to connect to MongoDB");
    run(&database).await.expect("Seeding run failed");
    database
}

/// Document counts the fixtures should produce.
const EXPECTED_COUNTS: [(&str, u64); 5] = [
    ("categorias", 5),
    ("productos", 8),
    ("usuarios", 4),
    ("pedidos", 5),
    ("reviews", 6),
];

async fn assert_expected_counts(database: &Database) {
    for (name, expected) in EXPECTED_COUNTS {
        let count = database
            .collection::<Document>(name)
            .count_documents(doc! {})
            .await
            .expect("Failed to count documents");
        assert_eq!(count, expected, "unexpected document count in `{name}`");
    }
}

#[tokio::test]
#[ignore = "Requires a running MongoDB instance"]
async fn test_seeding_twice_yields_the_same_counts() {
    let database = seeded_database().await;
    assert_expected_counts(&database).await;

    // The leading drop makes a second run land on identical state.
    run(&database).await.expect("Second seeding run failed");
    assert_expected_counts(&database).await;

    database.drop().await.expect("Failed to drop test database");
}

#[tokio::test]
#[ignore = "Requires a running MongoDB instance"]
async fn test_unique_email_index_rejects_duplicates() {
    let database = seeded_database().await;

    let result = database
        .collection::<Document>("usuarios")
        .insert_one(doc! {
            "nombre": "Ana Duplicada",
            "email": "ana@example.com",
        })
        .await;
    assert!(
        result.is_err(),
        "a fifth user reusing an existing email must be rejected"
    );

    database.drop().await.expect("Failed to drop test database");
}

#[tokio::test]
#[ignore = "Requires a running MongoDB instance"]
async fn test_products_reference_existing_categories() {
    let database = seeded_database().await;

    let category_ids: HashSet<ObjectId> = database
        .collection::<Document>("categorias")
        .distinct("_id", doc! {})
        .await
        .expect("Failed to list category ids")
        .into_iter()
        .filter_map(|id| id.as_object_id())
        .collect();
    assert_eq!(category_ids.len(), 5);

    let mut cursor = database
        .collection::<Document>("productos")
        .find(doc! {})
        .await
        .expect("Failed to query products");
    while cursor.advance().await.expect("Cursor error") {
        let product = cursor.deserialize_current().expect("Invalid product document");
        let category_id = product
            .get_object_id("categoria_id")
            .expect("Product without categoria_id");
        assert!(
            category_ids.contains(&category_id),
            "product `{}` references a missing category",
            product.get_str("nombre").unwrap_or("<sin nombre>")
        );
    }

    database.drop().await.expect("Failed to drop test database");
}

#[tokio::test]
#[ignore = "Requires a running MongoDB instance"]
async fn test_order_totals_match_line_items() {
    let database = seeded_database().await;

    let mut cursor = database
        .collection::<Document>("pedidos")
        .find(doc! {})
        .await
        .expect("Failed to query orders");
    while cursor.advance().await.expect("Cursor error") {
        let order = cursor.deserialize_current().expect("Invalid order document");
        let total = Decimal::from_str(order.get_str("total").expect("Order without total"))
            .expect("total is not a decimal");

        let mut sum = Decimal::ZERO;
        for item in order.get_array("productos").expect("Order without lines") {
            let item = item.as_document().expect("Line item is not a document");
            let price = Decimal::from_str(item.get_str("precio").expect("Line without precio"))
                .expect("precio is not a decimal");
            let quantity = item.get_i32("cantidad").expect("Line without cantidad");
            sum += price * Decimal::from(quantity);
        }

        assert_eq!(sum, total, "stored total drifted from its line items");
    }

    database.drop().await.expect("Failed to drop test database");
}

#[tokio::test]
#[ignore = "Requires a running MongoDB instance"]
async fn test_review_ratings_are_in_range() {
    let database = seeded_database().await;

    let mut cursor = database
        .collection::<Document>("reviews")
        .find(doc! {})
        .await
        .expect("Failed to query reviews");
    while cursor.advance().await.expect("Cursor error") {
        let review = cursor.deserialize_current().expect("Invalid review document");
        let rating = review
            .get_i32("calificacion")
            .expect("Review without calificacion");
        assert!((1..=5).contains(&rating), "rating {rating} out of range");
    }

    database.drop().await.expect("Failed to drop test database");
}

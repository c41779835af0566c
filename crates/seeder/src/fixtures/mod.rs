//! The literal sample datasets.
//!
//! One module per collection, authored by hand and inserted in dependency
//! order: categories first, then products and users (which reference
//! categories), then orders and reviews (which reference users and
//! products).
//!
//! Cross-references are wired through the `…Ids` capture structs
//! ([`CategoryIds`], [`ProductIds`], [`UserIds`]): the loader fills one
//! struct per collection with the server-assigned ids, and the dependent
//! fixture constructors take them by reference. A dangling reference is a
//! missing struct field, caught at compile time.

pub mod categories;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod users;

pub use categories::{CategoryIds, categories};
pub use orders::orders;
pub use products::{ProductIds, products};
pub use reviews::reviews;
pub use users::{UserIds, users};

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use mercado_core::Email;

/// Midnight UTC on the given day.
fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("fixture dates are valid calendar days")
}

/// Price literal in cents.
fn price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Email literal.
fn email(address: &str) -> Email {
    Email::parse(address).expect("fixture emails are valid")
}

//! Document models for the seeded collections.
//!
//! Rust field names are English; the wire format keeps the Spanish field
//! names of the original dataset via serde renames, so existing queries and
//! course material keep working against the seeded database.
//!
//! Every top-level document carries an `Option<…Id>` `_id` that is skipped
//! during serialization while `None`, letting the server assign ObjectIds on
//! insert.

pub mod address;
pub mod category;
pub mod order;
pub mod product;
pub mod review;
pub mod user;

pub use address::Address;
pub use category::Category;
pub use order::{Order, OrderItem};
pub use product::Product;
pub use review::Review;
pub use user::{Preferences, User};

//! Mercado Seeder - sample e-commerce dataset loading.
//!
//! This crate populates a MongoDB database with a fixed sample dataset
//! (categories, products, users, orders, reviews) and builds the secondary
//! indexes the sample queries rely on. It is a fixture-loading tool, not a
//! migration framework: every run drops the five collections and rebuilds
//! them from the in-memory literals.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`db`] - Connection and collection reset
//! - [`models`] - Document types for the five collections
//! - [`fixtures`] - The literal datasets
//! - [`loader`] - Ordered insertion with id capture
//! - [`indexes`] - Secondary index table and builder
//!
//! # Example
//!
//! ```rust,no_run
//! use mercado_seeder::{SeederConfig, db, run};
//!
//! # async fn seed() -> Result<(), mercado_seeder::SeedError> {
//! let config = SeederConfig::from_env();
//! let database = db::connect(&config).await?;
//! let summary = run(&database).await?;
//! assert_eq!(summary.products, 8);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod fixtures;
pub mod indexes;
pub mod loader;
pub mod models;

pub use config::SeederConfig;
pub use error::SeedError;
pub use loader::{SeedSummary, run};

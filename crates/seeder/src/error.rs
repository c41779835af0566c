//! Error types for the seeding pipeline.

use thiserror::Error;

/// Errors that can occur while seeding the sample database.
///
/// There is deliberately no retry or partial-success machinery here: the
/// seeder is a fixture-loading tool and the recovery path for any failure is
/// to re-run it (the leading collection drop makes re-runs safe).
#[derive(Debug, Error)]
pub enum SeedError {
    /// A driver operation failed (connection, insert, drop, index creation).
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// The server assigned a document key that is not an `ObjectId`.
    ///
    /// Later fixture sets reference earlier ones by captured `ObjectId`, so
    /// any other key type makes the remaining steps impossible.
    #[error("server assigned a non-ObjectId key in `{collection}`")]
    UnexpectedIdType {
        /// Collection the insert targeted.
        collection: String,
    },
}

/// Result type alias for [`SeedError`].
pub type Result<T> = std::result::Result<T, SeedError>;

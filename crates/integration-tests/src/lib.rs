//! Integration tests for Mercado.
//!
//! # Running Tests
//!
//! The tests in `tests/` exercise a real MongoDB instance and are ignored by
//! default. Each test seeds its own throwaway database and drops it when
//! done, so they are safe to run against a shared local server.
//!
//! ```bash
//! # Start a local MongoDB, e.g.
//! docker run --rm -p 27017:27017 mongo:7
//!
//! # Run the live tests
//! cargo test -p mercado-integration-tests -- --ignored
//! ```
//!
//! Set `MONGODB_URL` to point the tests at a non-default instance.

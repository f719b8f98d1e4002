//! Integration tests for the RD5 client
//!
//! This crate contains end-to-end tests that run the client against the
//! mock device from `rd5_client::testing`, covering the login
//! handshake, snapshot fetch and parse, derived readings, and parameter
//! writes.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p rd5-tests
//! ```
//!
//! # Test Structure
//!
//! - `client_test.rs` - client ↔ mock-device round trips

// This crate only contains tests, no library code

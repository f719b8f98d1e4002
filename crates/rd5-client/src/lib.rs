//! RD5 Client Library
//!
//! Typed HTTP client for the web control protocol of the Atrea RD5
//! ventilation controller family. The protocol is reverse-engineered
//! from the device's web front-end: an MD5-digest login handshake
//! issues a numeric session token, parameter dumps come back as XML,
//! and writes are plain query-string assignments.
//!
//! # Example
//!
//! ```rust,no_run
//! use rd5_client::Rd5Client;
//! use rd5_core::current_temperature;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Rd5Client::new("http://192.168.68.106")?;
//!
//!     // Authenticate and fetch the parameter snapshot
//!     client.login("6378").await?;
//!     let snapshot = client.snapshot().await?;
//!
//!     println!("indoor: {:.1} °C", current_temperature(&snapshot));
//!
//!     // Set the desired temperature (H-prefixed values are writable)
//!     client.set_one("H11021", "21").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Sessions
//!
//! The device keeps sessions alive until it restarts, so there is no
//! automatic re-login. A caller that sees repeated failures decides
//! itself when to call [`Rd5Client::login`] again, and a token saved
//! from an earlier run can be adopted with
//! [`Rd5Client::restore_session`].
//!
//! # Testing
//!
//! The `testing` module provides a mock device for integration tests:
//!
//! ```rust,ignore
//! use rd5_client::testing::{MockDevice, TestServer};
//!
//! let server = TestServer::start(MockDevice::new("6378", "15736")).await?;
//! server.client.login("6378").await?;
//! ```

mod auth;
mod client;
mod config;
mod error;
pub mod testing;

pub use client::Rd5Client;
pub use config::DeviceConfig;
pub use error::{Rd5ClientError, Result};

// Re-export core types for convenience
pub use rd5_core::{AccessMode, ParameterId, Snapshot};

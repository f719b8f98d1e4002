//! Error types for value conversion

use thiserror::Error;

/// Errors that can occur during value conversion
#[derive(Debug, Error)]
pub enum ConvError {
    /// Not a dotted-quad IPv4 address with octets in 0..=255
    #[error("invalid IPv4 address: {0}")]
    InvalidAddress(String),
}

/// Result type for value conversion operations
pub type ConvResult<T> = Result<T, ConvError>;

//! Error types for RD5 client operations

use thiserror::Error;

/// Result type alias for RD5 client operations
pub type Result<T> = std::result::Result<T, Rd5ClientError>;

/// Errors that can occur during RD5 client operations
#[derive(Debug, Error)]
pub enum Rd5ClientError {
    /// HTTP request failed (connection, DNS, timeout)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid device URL
    #[error("invalid device URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Login rejected by the device, or its response was unusable
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Device answered a write with a non-success status
    #[error("device rejected write: HTTP status {status}")]
    DeviceRejected { status: u16 },

    /// Refused locally: the identifier names a read-only sensor
    #[error("parameter {0} is read-only")]
    ReadOnlyParameter(String),

    /// Identifier failed validation before it reached the wire
    #[error(transparent)]
    InvalidIdentifier(#[from] rd5_core::InvalidIdentifier),

    /// Parameter dump could not be parsed
    #[error("snapshot parse failed: {0}")]
    Snapshot(#[from] rd5_core::SnapshotError),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

//! Error types for the core data model

use thiserror::Error;

/// Errors that can occur while parsing a parameter dump
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Document is not well-formed XML
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// Document is well-formed but its root element is not the dump root
    #[error("unexpected document root: expected RD5WEB, found {0}")]
    UnexpectedRoot(String),

    /// Document contains no root element at all
    #[error("document has no root element")]
    MissingRoot,
}

/// Error returned when a parameter identifier fails validation
#[derive(Debug, Error)]
#[error("invalid parameter identifier: {0:?}")]
pub struct InvalidIdentifier(pub String);

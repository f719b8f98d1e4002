//! rd5-core - Data model for the RD5 web protocol
//!
//! This crate provides the parameter identifier and snapshot types, the
//! parser for the device's XML parameter dump, and the registry of known
//! parameters with their derived readings.

pub mod error;
pub mod models;
pub mod parser;
pub mod registry;

pub use error::{InvalidIdentifier, SnapshotError};
pub use models::*;
pub use parser::parse_snapshot;
pub use registry::{
    current_temperature, outdoor_temperature, parameter_name, temperature_reading,
    INDOOR_TEMPERATURE_CANDIDATES, OUTDOOR_TEMPERATURE_CANDIDATES,
};

//! Core data types

pub mod param;
pub mod snapshot;

pub use param::{AccessMode, ParameterId};
pub use snapshot::Snapshot;

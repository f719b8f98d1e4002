//! Parameter identifiers and their access classes

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidIdentifier;

/// Access class encoded in an identifier's letter prefix.
///
/// The device never enforces these itself; the client refuses writes to
/// [`AccessMode::Sensor`] identifiers before they reach the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessMode {
    /// Read-only sensor reading (`I` prefix)
    Sensor,
    /// Read/write holding value (`H` prefix)
    Setting,
    /// Write-only command (`C` prefix)
    Command,
}

impl AccessMode {
    /// Derive the access class from an identifier's first character.
    /// Returns `None` for prefixes outside the documented classes.
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'I' => Some(AccessMode::Sensor),
            'H' => Some(AccessMode::Setting),
            'C' => Some(AccessMode::Command),
            _ => None,
        }
    }

    /// Whether values of this class may be written to the device
    pub fn is_writable(self) -> bool {
        !matches!(self, AccessMode::Sensor)
    }

    /// Whether values of this class appear in snapshots
    pub fn is_readable(self) -> bool {
        !matches!(self, AccessMode::Command)
    }
}

/// A device parameter identifier: a letter class prefix followed by a
/// numeric code (e.g. `I10215`, `H11021`, `C10005`).
///
/// The access class is derived once at parse time. Identifiers with an
/// undocumented prefix are carried as opaque strings with no class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterId {
    raw: String,
    mode: Option<AccessMode>,
}

impl ParameterId {
    /// Validate and classify an identifier. Rejects empty strings and
    /// anything containing non-alphanumeric characters.
    pub fn parse(s: &str) -> Result<Self, InvalidIdentifier> {
        let raw = s.trim();
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(InvalidIdentifier(s.to_string()));
        }

        let mode = raw.chars().next().and_then(AccessMode::from_prefix);
        Ok(Self {
            raw: raw.to_string(),
            mode,
        })
    }

    /// The identifier as it appears on the wire
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The derived access class, if the prefix is a documented one
    pub fn access_mode(&self) -> Option<AccessMode> {
        self.mode
    }

    /// Whether a write to this identifier should be allowed.
    /// Unclassified identifiers stay writable; they are opaque to us.
    pub fn is_writable(&self) -> bool {
        self.mode.map_or(true, AccessMode::is_writable)
    }
}

impl FromStr for ParameterId {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_classification() {
        assert_eq!(
            ParameterId::parse("I10215").unwrap().access_mode(),
            Some(AccessMode::Sensor)
        );
        assert_eq!(
            ParameterId::parse("H11021").unwrap().access_mode(),
            Some(AccessMode::Setting)
        );
        assert_eq!(
            ParameterId::parse("C10005").unwrap().access_mode(),
            Some(AccessMode::Command)
        );
        assert_eq!(ParameterId::parse("X999").unwrap().access_mode(), None);
    }

    #[test]
    fn test_writability() {
        assert!(!ParameterId::parse("I10215").unwrap().is_writable());
        assert!(ParameterId::parse("H11021").unwrap().is_writable());
        assert!(ParameterId::parse("C10005").unwrap().is_writable());
        // Unclassified identifiers pass through untouched
        assert!(ParameterId::parse("X999").unwrap().is_writable());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(ParameterId::parse("").is_err());
        assert!(ParameterId::parse("   ").is_err());
        assert!(ParameterId::parse("H11021=1").is_err());
        assert!(ParameterId::parse("H 11021").is_err());
    }

    #[test]
    fn test_trims_whitespace() {
        let id = ParameterId::parse(" I10215 ").unwrap();
        assert_eq!(id.as_str(), "I10215");
    }

    #[test]
    fn test_display_round_trip() {
        let id: ParameterId = "H10715".parse().unwrap();
        assert_eq!(id.to_string(), "H10715");
    }
}

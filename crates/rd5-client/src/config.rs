//! Device configuration
//!
//! Connection settings for one device, loadable from a TOML file:
//!
//! ```toml
//! host = "192.168.68.106"
//! password = "6378"
//! timeout_secs = 10
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Connection settings for one device
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Device IP address or hostname, optionally with a port
    pub host: String,
    /// Login password
    pub password: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl DeviceConfig {
    /// Load settings from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Base URL for the device's web interface. A bare host gets the
    /// `http://` scheme; the embedded controller speaks plain HTTP only.
    pub fn base_url(&self) -> String {
        if self.host.starts_with("http://") || self.host.starts_with("https://") {
            self.host.clone()
        } else {
            format!("http://{}", self.host)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_defaults() {
        let config: DeviceConfig = toml::from_str(
            r#"
host = "192.168.68.106"
password = "6378"
"#,
        )
        .unwrap();

        assert_eq!(config.host, "192.168.68.106");
        assert_eq!(config.password, "6378");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.base_url(), "http://192.168.68.106");
    }

    #[test]
    fn test_explicit_timeout_and_scheme() {
        let config: DeviceConfig = toml::from_str(
            r#"
host = "http://10.0.0.5:8080"
password = "1234"
timeout_secs = 3
"#,
        )
        .unwrap();

        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.base_url(), "http://10.0.0.5:8080");
    }

    #[test]
    fn test_missing_password_is_an_error() {
        let result: std::result::Result<DeviceConfig, _> = toml::from_str(r#"host = "10.0.0.5""#);
        assert!(result.is_err());
    }
}

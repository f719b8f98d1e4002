//! rd5-conv - Value codecs for the RD5 web protocol
//!
//! Pure, stateless transforms between the ventilation controller's wire
//! values and engineering units, plus the login digest the session
//! handshake is built on.
//!
//! # Quick Start
//!
//! ```rust
//! use rd5_conv::{decode_temperature, encode_ipv4, decode_ipv4, format_assignment};
//!
//! // Sensor registers are unsigned 16-bit with 0.1 °C resolution
//! assert_eq!(decode_temperature(201), 20.1);
//! assert_eq!(decode_temperature(65526), -1.0);
//!
//! // IPv4 addresses travel as two packed 16-bit words
//! let (low, high) = encode_ipv4("192.168.68.106").unwrap();
//! assert_eq!(decode_ipv4(low, high), "192.168.68.106");
//!
//! // Writes are query-string assignments
//! assert_eq!(format_assignment("H11021", 21), "H11021=21");
//! ```

pub mod assign;
pub mod digest;
pub mod error;
pub mod ipv4;
pub mod temperature;

// Re-export main functions
pub use assign::format_assignment;
pub use digest::login_magic;
pub use error::{ConvError, ConvResult};
pub use ipv4::{decode_ipv4, encode_ipv4};
pub use temperature::decode_temperature;

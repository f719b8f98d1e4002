//! Packed IPv4 parameter fields
//!
//! Network settings travel as pairs of 16-bit registers: the low word
//! packs the first two octets, the high word the last two, each with the
//! later octet in the upper byte.

use std::net::Ipv4Addr;

use crate::error::{ConvError, ConvResult};

/// Encode a dotted-quad address into the device's `(low, high)` register
/// pair: `low = octet1 + octet2 * 256`, `high = octet3 + octet4 * 256`.
pub fn encode_ipv4(addr: &str) -> ConvResult<(u16, u16)> {
    let parsed: Ipv4Addr = addr
        .trim()
        .parse()
        .map_err(|_| ConvError::InvalidAddress(addr.to_string()))?;

    let [o1, o2, o3, o4] = parsed.octets();
    let low = u16::from(o1) | (u16::from(o2) << 8);
    let high = u16::from(o3) | (u16::from(o4) << 8);
    Ok((low, high))
}

/// Decode a `(low, high)` register pair back to a dotted-quad string.
/// Exact inverse of [`encode_ipv4`].
pub fn decode_ipv4(low: u16, high: u16) -> String {
    Ipv4Addr::new(
        (low & 0xFF) as u8,
        (low >> 8) as u8,
        (high & 0xFF) as u8,
        (high >> 8) as u8,
    )
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode_ipv4("192.168.68.106").unwrap(), (43200, 27204));
        assert_eq!(encode_ipv4("0.0.0.0").unwrap(), (0, 0));
        assert_eq!(encode_ipv4("255.255.255.255").unwrap(), (65535, 65535));
        assert_eq!(encode_ipv4("  10.0.0.1  ").unwrap(), (10, 256));
    }

    #[test]
    fn test_invalid_address() {
        assert!(encode_ipv4("").is_err());
        assert!(encode_ipv4("10.0.0").is_err());
        assert!(encode_ipv4("10.0.0.0.1").is_err());
        assert!(encode_ipv4("256.0.0.1").is_err());
        assert!(encode_ipv4("not an ip").is_err());
    }

    #[test]
    fn test_round_trip() {
        for addr in [
            "0.0.0.0",
            "1.2.3.4",
            "10.0.0.1",
            "127.0.0.1",
            "192.168.68.106",
            "172.16.254.3",
            "255.255.255.0",
            "255.255.255.255",
        ] {
            let (low, high) = encode_ipv4(addr).unwrap();
            assert_eq!(decode_ipv4(low, high), addr, "round trip for {}", addr);
        }
    }

    #[test]
    fn test_round_trip_octet_boundaries() {
        for octet in [0u8, 1, 127, 128, 254, 255] {
            let addr = format!("{}.{}.{}.{}", octet, 255 - octet, octet, 255 - octet);
            let (low, high) = encode_ipv4(&addr).unwrap();
            assert_eq!(decode_ipv4(low, high), addr);
        }
    }
}

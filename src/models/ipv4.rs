//! IPv4 address model.
//!
//! Provides [`Ipv4Address`], a validated four-octet address, along with the
//! conversions the mask arithmetic needs.

use serde::Serialize;
use std::fmt;

use crate::error::SubnetError;

/// Number of octets in an IPv4 address.
pub const OCTET_COUNT: usize = 4;

/// Total bits in an IPv4 address.
pub const ADDRESS_BITS: u8 = 32;

/// An IPv4 address as four octets, most significant first.
///
/// Immutable once parsed; all derivation steps produce new values.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4Address {
    octets: [u8; OCTET_COUNT],
}

impl Ipv4Address {
    /// Create an address from its four octets.
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Ipv4Address {
        Ipv4Address {
            octets: [a, b, c, d],
        }
    }

    /// Parse a dotted-decimal string (e.g. `"192.168.0.0"`).
    ///
    /// Validation is explicit so the two failure kinds stay distinguishable:
    /// [`SubnetError::InvalidAddressFormat`] when the string does not split
    /// into exactly four parts, [`SubnetError::InvalidOctetValue`] when a
    /// part is not an unsigned integer in 0-255. Runs to completion before
    /// any arithmetic is attempted on the address.
    pub fn parse(input: &str) -> Result<Ipv4Address, SubnetError> {
        let input = input.trim();
        let parts: Vec<&str> = input.split('.').collect();
        if parts.len() != OCTET_COUNT {
            return Err(SubnetError::InvalidAddressFormat {
                input: input.to_string(),
                found: parts.len(),
            });
        }

        let mut octets = [0u8; OCTET_COUNT];
        for (i, part) in parts.iter().enumerate() {
            // Reject signs and whitespace that u8::from_str would tolerate.
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(SubnetError::InvalidOctetValue {
                    input: input.to_string(),
                    octet: part.to_string(),
                });
            }
            octets[i] = part.parse().map_err(|_| SubnetError::InvalidOctetValue {
                input: input.to_string(),
                octet: part.to_string(),
            })?;
        }

        Ok(Ipv4Address { octets })
    }

    /// The four octets, most significant first.
    pub const fn octets(&self) -> [u8; OCTET_COUNT] {
        self.octets
    }

    /// First octet, used by classful detection.
    pub const fn first_octet(&self) -> u8 {
        self.octets[0]
    }

    /// Last octet, the only one the host-range derivation touches.
    pub const fn last_octet(&self) -> u8 {
        self.octets[3]
    }

    /// Copy of this address with the last octet replaced.
    pub const fn with_last_octet(&self, value: u8) -> Ipv4Address {
        Ipv4Address {
            octets: [self.octets[0], self.octets[1], self.octets[2], value],
        }
    }
}

impl From<u32> for Ipv4Address {
    fn from(bits: u32) -> Ipv4Address {
        Ipv4Address {
            octets: bits.to_be_bytes(),
        }
    }
}

impl From<Ipv4Address> for u32 {
    fn from(addr: Ipv4Address) -> u32 {
        u32::from_be_bytes(addr.octets)
    }
}

impl From<[u8; OCTET_COUNT]> for Ipv4Address {
    fn from(octets: [u8; OCTET_COUNT]) -> Ipv4Address {
        Ipv4Address { octets }
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.octets[0], self.octets[1], self.octets[2], self.octets[3]
        )
    }
}

impl Serialize for Ipv4Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let addr = Ipv4Address::parse("192.168.0.0").unwrap();
        assert_eq!(addr, Ipv4Address::new(192, 168, 0, 0));
        assert_eq!(Ipv4Address::parse("0.0.0.0").unwrap().octets(), [0, 0, 0, 0]);
        assert_eq!(
            Ipv4Address::parse("255.255.255.255").unwrap().octets(),
            [255, 255, 255, 255]
        );
        // Surrounding whitespace is tolerated, inner whitespace is not.
        assert_eq!(
            Ipv4Address::parse(" 10.0.0.0 ").unwrap(),
            Ipv4Address::new(10, 0, 0, 0)
        );
    }

    #[test]
    fn test_parse_wrong_octet_count() {
        let err = Ipv4Address::parse("10.0.0").unwrap_err();
        assert_eq!(
            err,
            SubnetError::InvalidAddressFormat {
                input: "10.0.0".to_string(),
                found: 3,
            }
        );
        assert!(matches!(
            Ipv4Address::parse("10.0.0.0.0").unwrap_err(),
            SubnetError::InvalidAddressFormat { found: 5, .. }
        ));
        assert!(matches!(
            Ipv4Address::parse("").unwrap_err(),
            SubnetError::InvalidAddressFormat { found: 1, .. }
        ));
    }

    #[test]
    fn test_parse_bad_octets() {
        for input in ["10.0.0.300", "10.0.0.x", "10.0..0", "10.0.0.-1", "10.0.0.+1", "10. 0.0.1"] {
            assert!(
                matches!(
                    Ipv4Address::parse(input).unwrap_err(),
                    SubnetError::InvalidOctetValue { .. }
                ),
                "expected InvalidOctetValue for {input:?}"
            );
        }
    }

    #[test]
    fn test_u32_round_trip() {
        let addr = Ipv4Address::new(192, 168, 1, 42);
        assert_eq!(u32::from(addr), 0xC0A8_012A);
        assert_eq!(Ipv4Address::from(0xC0A8_012A_u32), addr);
    }

    #[test]
    fn test_with_last_octet() {
        let addr = Ipv4Address::new(172, 16, 5, 0);
        assert_eq!(addr.with_last_octet(1), Ipv4Address::new(172, 16, 5, 1));
        assert_eq!(addr.last_octet(), 0);
        assert_eq!(addr.first_octet(), 172);
    }

    #[test]
    fn test_display() {
        assert_eq!(Ipv4Address::new(10, 0, 255, 254).to_string(), "10.0.255.254");
    }

    #[test]
    fn test_serialize_as_string() {
        let addr = Ipv4Address::new(192, 168, 1, 0);
        assert_eq!(
            serde_json::to_string(&addr).unwrap(),
            "\"192.168.1.0\""
        );
    }
}

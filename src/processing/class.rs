//! Legacy classful network detection.
//!
//! Informational only; the class never feeds the mask or broadcast
//! computation.

use serde::Serialize;
use std::fmt;

use crate::error::SubnetError;

/// Legacy pre-CIDR address class.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum NetworkClass {
    A,
    B,
    C,
}

impl fmt::Display for NetworkClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NetworkClass::A => write!(f, "A"),
            NetworkClass::B => write!(f, "B"),
            NetworkClass::C => write!(f, "C"),
        }
    }
}

/// Classify an address by its first octet: 8-126 A, 128-191 B, 192-223 C.
///
/// Everything else (0-7, 127 loopback, 224 and up) fails with
/// [`SubnetError::UnsupportedNetworkClass`].
pub fn detect_class(first_octet: u8) -> Result<NetworkClass, SubnetError> {
    match first_octet {
        8..=126 => Ok(NetworkClass::A),
        128..=191 => Ok(NetworkClass::B),
        192..=223 => Ok(NetworkClass::C),
        other => Err(SubnetError::UnsupportedNetworkClass(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_class() {
        assert_eq!(detect_class(8).unwrap(), NetworkClass::A);
        assert_eq!(detect_class(10).unwrap(), NetworkClass::A);
        assert_eq!(detect_class(126).unwrap(), NetworkClass::A);
        assert_eq!(detect_class(128).unwrap(), NetworkClass::B);
        assert_eq!(detect_class(172).unwrap(), NetworkClass::B);
        assert_eq!(detect_class(191).unwrap(), NetworkClass::B);
        assert_eq!(detect_class(192).unwrap(), NetworkClass::C);
        assert_eq!(detect_class(223).unwrap(), NetworkClass::C);
    }

    #[test]
    fn test_detect_class_unsupported() {
        for octet in [0, 1, 7, 127, 224, 255] {
            assert_eq!(
                detect_class(octet).unwrap_err(),
                SubnetError::UnsupportedNetworkClass(octet),
                "octet {octet} should have no class"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(NetworkClass::A.to_string(), "A");
        assert_eq!(NetworkClass::B.to_string(), "B");
        assert_eq!(NetworkClass::C.to_string(), "C");
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&NetworkClass::B).unwrap(), "\"B\"");
    }
}

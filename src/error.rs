//! Typed errors for subnet computation.
//!
//! Every failure is terminal for the single computation: the caller gets
//! one [`SubnetError`] and no partial result.

use thiserror::Error;

/// Errors produced while validating input or deriving subnet parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    /// The address string did not split into exactly four octets.
    #[error("invalid address format {input:?}: expected 4 octets, found {found}")]
    InvalidAddressFormat { input: String, found: usize },

    /// One part of the address is not an unsigned integer in 0-255.
    #[error("invalid octet {octet:?} in {input:?}: expected an integer in 0-255")]
    InvalidOctetValue { input: String, octet: String },

    /// Prefix length outside the supported /8../31 domain.
    #[error("unsupported prefix length /{0}: supported range is /8 to /31")]
    UnsupportedPrefixLength(u8),

    /// An octet sum exceeded 255 while adding the wildcard mask to the
    /// network address. The base address is not aligned to the prefix.
    #[error(
        "octet {position} overflows deriving the broadcast address \
         ({network} + {wildcard} > 255): network address is not aligned to /{prefix}"
    )]
    BroadcastOverflow {
        position: usize,
        network: u8,
        wildcard: u8,
        prefix: u8,
    },

    /// First octet outside the legacy classful A/B/C range.
    #[error("first octet {0} is outside the classful range 8-223")]
    UnsupportedNetworkClass(u8),
}

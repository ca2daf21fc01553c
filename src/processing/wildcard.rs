//! Wildcard and subnet mask derivation from a CIDR prefix length.

use crate::error::SubnetError;
use crate::models::{Ipv4Address, ADDRESS_BITS};

/// Smallest supported prefix length.
pub const MIN_PREFIX_LENGTH: u8 = 8;

/// Largest supported prefix length.
pub const MAX_PREFIX_LENGTH: u8 = 31;

/// Reject prefix lengths outside the supported /8../31 domain.
///
/// /0-/7 and /32 are excluded by the input contract, not by IPv4 itself.
pub fn check_prefix_length(prefix: u8) -> Result<(), SubnetError> {
    if (MIN_PREFIX_LENGTH..=MAX_PREFIX_LENGTH).contains(&prefix) {
        Ok(())
    } else {
        Err(SubnetError::UnsupportedPrefixLength(prefix))
    }
}

/// Total number of addresses in a subnet with the given prefix length.
pub fn total_addresses(prefix: u8) -> Result<u64, SubnetError> {
    check_prefix_length(prefix)?;
    Ok(1u64 << (ADDRESS_BITS - prefix))
}

/// Usable host count: total addresses minus network and broadcast.
///
/// 0 for /31; never underflows within the supported prefix domain.
pub fn total_hosts(prefix: u8) -> Result<u64, SubnetError> {
    Ok(total_addresses(prefix)? - 2)
}

/// Derive the wildcard mask for a prefix length.
///
/// The wildcard marks the host-variable bits: `2^(32 - prefix) - 1` as a
/// 32-bit value, split into octets.
pub fn wildcard_mask(prefix: u8) -> Result<Ipv4Address, SubnetError> {
    check_prefix_length(prefix)?;
    let host_bits = ADDRESS_BITS - prefix;
    let wildcard = (1u32 << host_bits) - 1;
    log::trace!("wildcard bits for /{prefix}: {wildcard:#010x}");
    Ok(Ipv4Address::from(wildcard))
}

/// Derive the subnet mask for a prefix length.
pub fn subnet_mask(prefix: u8) -> Result<Ipv4Address, SubnetError> {
    check_prefix_length(prefix)?;
    let right_len = ADDRESS_BITS - prefix;
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    Ok(Ipv4Address::from(mask as u32))
}

//! IPv4 subnet parameter computation.
//!
//! Takes a dotted-decimal network address and a CIDR prefix length and
//! produces a [`SubnetInfo`]: subnet mask, broadcast address, usable host
//! range, host/address counts and (optionally) the legacy network class.
//!
//! The computation is pure and synchronous: identical inputs always produce
//! identical outputs, and there is no shared state, so it is safe to call
//! from multiple threads without coordination.
//!
//! ```
//! use subnet_calculator::compute_subnet;
//!
//! let info = compute_subnet("192.168.1.0", 24).unwrap();
//! assert_eq!(info.subnet_mask.to_string(), "255.255.255.0");
//! assert_eq!(info.total_hosts, 254);
//! ```

pub mod cli;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::SubnetError;
pub use models::{HostRange, Ipv4Address, SubnetInfo};
pub use processing::NetworkClass;

/// Options for one subnet computation.
#[derive(Debug, Copy, Clone)]
pub struct CalcOptions {
    /// Detect the legacy A/B/C class from the first octet. When disabled,
    /// [`SubnetInfo::network_class`] is `None` and no class error can occur.
    pub detect_class: bool,
}

impl Default for CalcOptions {
    fn default() -> Self {
        CalcOptions { detect_class: true }
    }
}

/// Compute subnet parameters with default options (class detection on).
pub fn compute_subnet(network_address: &str, prefix_length: u8) -> Result<SubnetInfo, SubnetError> {
    compute_subnet_with(network_address, prefix_length, CalcOptions::default())
}

/// Compute subnet parameters for a network address and prefix length.
///
/// Input validation (octet parsing, prefix domain check) completes before
/// any arithmetic. The address is trusted as the base address and is never
/// masked down; a base address not aligned to the prefix surfaces as
/// [`SubnetError::BroadcastOverflow`].
pub fn compute_subnet_with(
    network_address: &str,
    prefix_length: u8,
    options: CalcOptions,
) -> Result<SubnetInfo, SubnetError> {
    log::debug!("#Start compute_subnet({network_address}, /{prefix_length})");

    let network = Ipv4Address::parse(network_address)?;
    processing::check_prefix_length(prefix_length)?;

    let total_addresses = processing::total_addresses(prefix_length)?;
    let total_hosts = processing::total_hosts(prefix_length)?;
    let wildcard = processing::wildcard_mask(prefix_length)?;
    let subnet_mask = processing::subnet_mask(prefix_length)?;
    log::debug!("wildcard {wildcard}, mask {subnet_mask}, {total_addresses} addresses");

    let broadcast_address = processing::broadcast_addr(network, wildcard, prefix_length)?;
    let host_range = processing::usable_host_range(network, broadcast_address);

    let network_class = if options.detect_class {
        Some(processing::detect_class(network.first_octet())?)
    } else {
        None
    };

    Ok(SubnetInfo {
        network_address: network,
        broadcast_address,
        subnet_mask,
        cidr_notation: prefix_length,
        network_class,
        host_range,
        total_hosts,
        total_addresses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_subnet_default_detects_class() {
        let info = compute_subnet("192.168.1.0", 24).unwrap();
        assert_eq!(info.network_class, Some(NetworkClass::C));
    }

    #[test]
    fn test_compute_subnet_without_class() {
        let options = CalcOptions {
            detect_class: false,
        };
        let info = compute_subnet_with("1.0.0.0", 24, options).unwrap();
        assert_eq!(info.network_class, None);
        assert_eq!(info.broadcast_address, Ipv4Address::new(1, 0, 0, 255));
    }

    #[test]
    fn test_validation_precedes_arithmetic() {
        // A bad address fails before the prefix is even looked at.
        assert!(matches!(
            compute_subnet("10.0.0", 99).unwrap_err(),
            SubnetError::InvalidAddressFormat { .. }
        ));
        // A bad prefix fails before any mask derivation.
        assert_eq!(
            compute_subnet("10.0.0.0", 32).unwrap_err(),
            SubnetError::UnsupportedPrefixLength(32)
        );
    }
}

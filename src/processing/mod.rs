//! Subnet arithmetic.
//!
//! This module contains the derivation steps of the computation:
//! - `wildcard` - prefix length to wildcard and subnet mask
//! - `address` - broadcast address and usable host range
//! - `class` - legacy classful detection

mod address;
mod class;
mod wildcard;

// Re-export public functions
pub use address::{broadcast_addr, usable_host_range};
pub use class::{detect_class, NetworkClass};
pub use wildcard::{
    check_prefix_length, subnet_mask, total_addresses, total_hosts, wildcard_mask,
    MAX_PREFIX_LENGTH, MIN_PREFIX_LENGTH,
};

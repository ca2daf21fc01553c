//! Domain models for the subnet calculator.
//!
//! - [`Ipv4Address`] - validated four-octet address
//! - [`SubnetInfo`] and [`HostRange`] - the computation result

mod ipv4;
mod subnet_info;

// Re-export public types
pub use ipv4::{Ipv4Address, ADDRESS_BITS, OCTET_COUNT};
pub use subnet_info::{HostRange, SubnetInfo};

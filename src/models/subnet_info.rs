//! Subnet computation result records.

use serde::Serialize;
use std::fmt;

use super::Ipv4Address;
use crate::processing::NetworkClass;

/// Usable host range of a subnet, exclusive of network and broadcast.
///
/// Renders and serializes as `"<first> - <last>"`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HostRange {
    /// Lowest usable host address.
    pub first: Ipv4Address,
    /// Highest usable host address.
    pub last: Ipv4Address,
}

impl fmt::Display for HostRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.first, self.last)
    }
}

impl Serialize for HostRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result of one subnet computation.
///
/// Constructed once per invocation and returned to the caller. The
/// serialized field names are the stable output contract.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetInfo {
    /// The network address as supplied by the caller.
    pub network_address: Ipv4Address,
    /// Highest address in the subnet.
    pub broadcast_address: Ipv4Address,
    /// Subnet mask for the prefix length.
    pub subnet_mask: Ipv4Address,
    /// CIDR prefix length.
    pub cidr_notation: u8,
    /// Legacy A/B/C class (None when detection is disabled).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_class: Option<NetworkClass>,
    /// Usable host range, exclusive of network and broadcast.
    pub host_range: HostRange,
    /// Usable host count (total addresses minus network and broadcast).
    pub total_hosts: u64,
    /// Total address count, 2^(32 - prefix).
    pub total_addresses: u64,
}

//! Broadcast address and usable host range derivation.

use crate::error::SubnetError;
use crate::models::{HostRange, Ipv4Address, OCTET_COUNT};

/// Broadcast address: network address plus wildcard mask, per octet.
///
/// Octets are summed independently; no carry crosses an octet boundary.
/// For a base address aligned to its prefix every sum stays within 255 and
/// the result equals the bitwise OR. A sum above 255 means the base address
/// is not aligned and fails with [`SubnetError::BroadcastOverflow`] rather
/// than being masked down silently.
pub fn broadcast_addr(
    network: Ipv4Address,
    wildcard: Ipv4Address,
    prefix: u8,
) -> Result<Ipv4Address, SubnetError> {
    let net = network.octets();
    let wild = wildcard.octets();

    let mut octets = [0u8; OCTET_COUNT];
    for i in 0..OCTET_COUNT {
        octets[i] = net[i]
            .checked_add(wild[i])
            .ok_or(SubnetError::BroadcastOverflow {
                position: i,
                network: net[i],
                wildcard: wild[i],
                prefix,
            })?;
    }

    let broadcast = Ipv4Address::from(octets);
    log::debug!("broadcast for {network}/{prefix}: {broadcast}");
    Ok(broadcast)
}

/// Usable host range between a network/broadcast pair.
///
/// First usable host raises the network's last octet by one; last usable
/// host lowers the broadcast's last octet by one. Broadcast derivation has
/// already bounded both last octets (the wildcard's last octet is at least 1
/// for every supported prefix), so neither step can leave 0-255.
pub fn usable_host_range(network: Ipv4Address, broadcast: Ipv4Address) -> HostRange {
    HostRange {
        first: network.with_last_octet(network.last_octet() + 1),
        last: broadcast.with_last_octet(broadcast.last_octet() - 1),
    }
}

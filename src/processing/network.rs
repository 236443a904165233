//! Network and broadcast address derivation.
//!
//! Masks are typed [`Ipv4Addr`] values, so these functions are never reached
//! with the `N/A` sentinel of an unknown class.

use crate::models::{and_octets, invert_mask, or_octets};
use std::net::Ipv4Addr;

/// Address with all host bits cleared.
pub fn network_address(address: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    and_octets(address, mask)
}

/// Address with all host bits set.
pub fn broadcast_address(address: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    or_octets(address, invert_mask(mask))
}

/// First and last address of the network starting at `network`.
///
/// The last address is the broadcast address itself, not broadcast - 1.
pub fn network_range(network: Ipv4Addr, mask: Ipv4Addr) -> (Ipv4Addr, Ipv4Addr) {
    (network, or_octets(network, invert_mask(mask)))
}

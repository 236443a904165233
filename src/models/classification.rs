//! Result record of a successful classification.

use super::IpClass;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything derived from one valid, classful address.
///
/// `number_of_networks` and `hops` both hold `2^host_bits`, and
/// `last_address` equals the broadcast address. Both are kept as the tool
/// has always reported them.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The address that was classified.
    pub address: Ipv4Addr,
    pub ip_class: IpClass,
    /// Class default mask.
    pub subnet_mask: Ipv4Addr,
    /// Network and host octets, e.g. `N.N.H.H`.
    pub network_id_format: &'static str,
    pub network_address: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    /// Usable hosts, excluding the all-zero and all-one host addresses.
    pub hosts_per_network: u64,
    pub number_of_networks: u64,
    /// First address of the network range.
    pub first_address: Ipv4Addr,
    /// Last address of the network range.
    pub last_address: Ipv4Addr,
    pub hops: u64,
}

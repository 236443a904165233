//! Host, network and hop counts derived from a mask.

use crate::models::host_bits;
use std::net::Ipv4Addr;

/// Addresses covered by the host bits of `mask`, i.e. `2^host_bits`.
fn block_size(mask: Ipv4Addr) -> u64 {
    1u64 << host_bits(mask)
}

/// Usable hosts per network: `2^host_bits - 2`.
///
/// Saturates at 0 for masks with fewer than two host bits.
pub fn hosts_per_network(mask: Ipv4Addr) -> u64 {
    block_size(mask).saturating_sub(2)
}

/// Reported as `2^host_bits`.
pub fn number_of_networks(mask: Ipv4Addr) -> u64 {
    block_size(mask)
}

/// Same value as [`number_of_networks`].
pub fn hops(mask: Ipv4Addr) -> u64 {
    block_size(mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CLASS_A_MASK, CLASS_B_MASK, CLASS_C_MASK};

    #[test]
    fn test_hosts_per_network() {
        assert_eq!(hosts_per_network(CLASS_C_MASK), 254);
        assert_eq!(hosts_per_network(CLASS_B_MASK), 65534);
        assert_eq!(hosts_per_network(CLASS_A_MASK), 16777214);
        assert_eq!(hosts_per_network(Ipv4Addr::new(255, 255, 255, 252)), 2);
        assert_eq!(hosts_per_network(Ipv4Addr::BROADCAST), 0);
    }

    #[test]
    fn test_number_of_networks() {
        assert_eq!(number_of_networks(CLASS_C_MASK), 256);
        assert_eq!(number_of_networks(CLASS_B_MASK), 65536);
        assert_eq!(number_of_networks(CLASS_A_MASK), 16777216);
        assert_eq!(number_of_networks(Ipv4Addr::UNSPECIFIED), 4294967296);
    }

    #[test]
    fn test_hops() {
        for mask in [CLASS_A_MASK, CLASS_B_MASK, CLASS_C_MASK] {
            assert_eq!(hops(mask), number_of_networks(mask));
        }
        assert_eq!(hops(CLASS_C_MASK), 256);
    }
}

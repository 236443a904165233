//! IPv4 octet arithmetic.
//!
//! Class-default masks are byte aligned, so every derivation here works
//! octet by octet on [`Ipv4Addr`] values instead of on prefix lengths.

use std::net::Ipv4Addr;

/// Number of bits in an IPv4 address.
pub const MAX_LENGTH: u8 = 32;

/// Number of octets in an IPv4 address.
pub const IPV4_OCTETS: usize = 4;

/// Default mask of a class A network.
pub const CLASS_A_MASK: Ipv4Addr = Ipv4Addr::new(255, 0, 0, 0);
/// Default mask of a class B network.
pub const CLASS_B_MASK: Ipv4Addr = Ipv4Addr::new(255, 255, 0, 0);
/// Default mask of a class C network.
pub const CLASS_C_MASK: Ipv4Addr = Ipv4Addr::new(255, 255, 255, 0);

fn zip_octets(left: Ipv4Addr, right: Ipv4Addr, op: impl Fn(u8, u8) -> u8) -> Ipv4Addr {
    let l = left.octets();
    let r = right.octets();
    Ipv4Addr::new(op(l[0], r[0]), op(l[1], r[1]), op(l[2], r[2]), op(l[3], r[3]))
}

/// Per-octet bitwise AND.
///
/// # Examples
/// ```
/// use ipv4_class_summary::models::and_octets;
/// use std::net::Ipv4Addr;
/// let net = and_octets(Ipv4Addr::new(192, 168, 1, 42), Ipv4Addr::new(255, 255, 255, 0));
/// assert_eq!(net, Ipv4Addr::new(192, 168, 1, 0));
/// ```
pub fn and_octets(addr: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    zip_octets(addr, mask, |a, m| a & m)
}

/// Per-octet bitwise OR.
pub fn or_octets(addr: Ipv4Addr, bits: Ipv4Addr) -> Ipv4Addr {
    zip_octets(addr, bits, |a, b| a | b)
}

/// Host part of a mask, computed per octet as `255 - octet`.
pub fn invert_mask(mask: Ipv4Addr) -> Ipv4Addr {
    let m = mask.octets();
    Ipv4Addr::new(255 - m[0], 255 - m[1], 255 - m[2], 255 - m[3])
}

/// Number of one-bits set across all four mask octets.
pub fn mask_ones(mask: Ipv4Addr) -> u8 {
    mask.octets().iter().map(|o| o.count_ones() as u8).sum()
}

/// Address bits not covered by the mask's one-bits.
pub fn host_bits(mask: Ipv4Addr) -> u8 {
    MAX_LENGTH - mask_ones(mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_octets() {
        let ip = Ipv4Addr::new(172, 16, 45, 9);
        assert_eq!(and_octets(ip, CLASS_A_MASK), Ipv4Addr::new(172, 0, 0, 0));
        assert_eq!(and_octets(ip, CLASS_B_MASK), Ipv4Addr::new(172, 16, 0, 0));
        assert_eq!(and_octets(ip, CLASS_C_MASK), Ipv4Addr::new(172, 16, 45, 0));
    }

    #[test]
    fn test_or_octets() {
        let ip = Ipv4Addr::new(10, 1, 2, 3);
        assert_eq!(
            or_octets(ip, Ipv4Addr::new(0, 255, 255, 255)),
            Ipv4Addr::new(10, 255, 255, 255)
        );
        assert_eq!(or_octets(ip, Ipv4Addr::UNSPECIFIED), ip);
    }

    #[test]
    fn test_invert_mask() {
        assert_eq!(invert_mask(CLASS_A_MASK), Ipv4Addr::new(0, 255, 255, 255));
        assert_eq!(invert_mask(CLASS_C_MASK), Ipv4Addr::new(0, 0, 0, 255));
        assert_eq!(invert_mask(Ipv4Addr::BROADCAST), Ipv4Addr::UNSPECIFIED);
    }

    #[test]
    fn test_mask_ones() {
        assert_eq!(mask_ones(CLASS_A_MASK), 8);
        assert_eq!(mask_ones(CLASS_B_MASK), 16);
        assert_eq!(mask_ones(CLASS_C_MASK), 24);
        assert_eq!(mask_ones(Ipv4Addr::new(255, 255, 255, 128)), 25);
        assert_eq!(mask_ones(Ipv4Addr::BROADCAST), 32);
    }

    #[test]
    fn test_host_bits() {
        assert_eq!(host_bits(CLASS_A_MASK), 24);
        assert_eq!(host_bits(CLASS_B_MASK), 16);
        assert_eq!(host_bits(CLASS_C_MASK), 8);
        assert_eq!(host_bits(Ipv4Addr::UNSPECIFIED), 32);
    }
}

//! Domain models for IPv4 classification.
//!
//! This module contains the core data structures and octet helpers:
//! - [`IpClass`] and [`ClassMask`] - legacy class and its default mask
//! - [`Classification`] - the aggregated result for one address
//! - octet arithmetic in `ipv4`

mod class;
mod classification;
mod ipv4;

// Re-export public types
pub use class::{
    class_rules, ClassMask, IpClass, EXAMPLE_ADDRESS, KNOWN_CLASSES, NOT_APPLICABLE,
};
pub use classification::Classification;
pub use ipv4::{
    and_octets, host_bits, invert_mask, mask_ones, or_octets, CLASS_A_MASK, CLASS_B_MASK,
    CLASS_C_MASK, IPV4_OCTETS, MAX_LENGTH,
};

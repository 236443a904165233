//! Legacy IPv4 address classes and their default masks.

use super::ipv4::{CLASS_A_MASK, CLASS_B_MASK, CLASS_C_MASK};
use crate::error::ClassifyError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;

/// Sentinel shown in place of a mask for addresses outside classes A-C.
pub const NOT_APPLICABLE: &str = "N/A";

/// Address used in the rules text as an example input.
pub const EXAMPLE_ADDRESS: &str = "192.168.1.1";

/// Legacy address class, decided by the first octet alone.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpClass {
    A,
    B,
    C,
    Unknown,
}

/// Classes that carry a default mask, in rules order.
pub const KNOWN_CLASSES: [IpClass; 3] = [IpClass::A, IpClass::B, IpClass::C];

impl IpClass {
    /// Classify by first octet: 1-126 A, 128-191 B, 192-223 C, anything else Unknown.
    pub fn from_first_octet(octet: u8) -> IpClass {
        match octet {
            1..=126 => IpClass::A,
            128..=191 => IpClass::B,
            192..=223 => IpClass::C,
            _ => IpClass::Unknown,
        }
    }

    pub fn default_mask(&self) -> ClassMask {
        match self {
            IpClass::A => ClassMask::Mask(CLASS_A_MASK),
            IpClass::B => ClassMask::Mask(CLASS_B_MASK),
            IpClass::C => ClassMask::Mask(CLASS_C_MASK),
            IpClass::Unknown => ClassMask::NotApplicable,
        }
    }

    /// Lowest and highest address of the class range.
    pub fn address_range(&self) -> Option<(Ipv4Addr, Ipv4Addr)> {
        match self {
            IpClass::A => Some((Ipv4Addr::new(1, 0, 0, 0), Ipv4Addr::new(126, 255, 255, 255))),
            IpClass::B => Some((Ipv4Addr::new(128, 0, 0, 0), Ipv4Addr::new(191, 255, 255, 255))),
            IpClass::C => Some((Ipv4Addr::new(192, 0, 0, 0), Ipv4Addr::new(223, 255, 255, 255))),
            IpClass::Unknown => None,
        }
    }

    /// Which octets are network (N) and host (H) under the default mask.
    pub fn network_id_format(&self) -> Option<&'static str> {
        match self {
            IpClass::A => Some("N.H.H.H"),
            IpClass::B => Some("N.N.H.H"),
            IpClass::C => Some("N.N.N.H"),
            IpClass::Unknown => None,
        }
    }

    pub fn typical_use(&self) -> Option<&'static str> {
        match self {
            IpClass::A => Some("Typically used by very large organizations and ISPs."),
            IpClass::B => Some(
                "Commonly used by medium to large-sized networks like universities and businesses.",
            ),
            IpClass::C => {
                Some("Suitable for smaller networks such as small businesses and home networks.")
            }
            IpClass::Unknown => None,
        }
    }
}

impl fmt::Display for IpClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpClass::A => write!(f, "A"),
            IpClass::B => write!(f, "B"),
            IpClass::C => write!(f, "C"),
            IpClass::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Default mask of a class, or the `N/A` sentinel for [`IpClass::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassMask {
    Mask(Ipv4Addr),
    NotApplicable,
}

impl ClassMask {
    pub fn mask(&self) -> Option<Ipv4Addr> {
        match self {
            ClassMask::Mask(mask) => Some(*mask),
            ClassMask::NotApplicable => None,
        }
    }

    /// Numeric mask for `address`, or [`ClassifyError::NoDefaultMask`] when
    /// there is none to derive from.
    pub fn require(&self, address: Ipv4Addr) -> Result<Ipv4Addr, ClassifyError> {
        self.mask().ok_or(ClassifyError::NoDefaultMask {
            address,
            first_octet: address.octets()[0],
        })
    }
}

impl fmt::Display for ClassMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassMask::Mask(mask) => write!(f, "{mask}"),
            ClassMask::NotApplicable => write!(f, "{NOT_APPLICABLE}"),
        }
    }
}

impl Serialize for ClassMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Render the class rules shown to users before they enter an address.
pub fn class_rules() -> String {
    let mut rules = String::from(
        "Rules:\n1. Enter an IPv4 address in the format X.X.X.X where X ranges from 0 to 255.\n",
    );
    for (i, class) in KNOWN_CLASSES.iter().enumerate() {
        if let (Some((first, last)), Some(id_format), Some(usage)) = (
            class.address_range(),
            class.network_id_format(),
            class.typical_use(),
        ) {
            if i > 0 {
                rules.push('\n');
            }
            rules.push_str(&format!(
                "{n}. Class {class} ranges from {first} to {last}.\n   - Network ID format: {id_format}\n   - Default Subnet Mask: {mask}\n   - Uses: {usage}\n",
                n = i + 2,
                mask = class.default_mask(),
            ));
        }
    }
    rules.push_str(&format!("\nExample: {EXAMPLE_ADDRESS}\n"));
    rules
}

//! Class determination from the first octet.

use crate::models::{ClassMask, IpClass};
use std::net::Ipv4Addr;

/// Class and default mask of a validated address.
///
/// Any address whose first octet is 0, 127 or 224 and above is
/// [`IpClass::Unknown`] with mask `N/A`.
pub fn determine_ip_class(address: Ipv4Addr) -> (IpClass, ClassMask) {
    let ip_class = IpClass::from_first_octet(address.octets()[0]);
    let mask = ip_class.default_mask();
    log::debug!("determine_ip_class({address}) = {ip_class} {mask}");
    (ip_class, mask)
}

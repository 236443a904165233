//! The classification pipeline: validate, classify, derive.

use super::{
    broadcast_address, determine_ip_class, hops, hosts_per_network, network_address,
    network_range, number_of_networks, parse_address,
};
use crate::error::ClassifyError;
use crate::models::Classification;

/// Classify one candidate address and derive its addressing facts.
///
/// # Returns
/// * `Ok(Classification)` - for a valid class A, B or C address
/// * `Err(ClassifyError::InvalidAddress)` - input failed validation
/// * `Err(ClassifyError::NoDefaultMask)` - valid, but class Unknown
pub fn classify(input: &str) -> Result<Classification, ClassifyError> {
    let address = parse_address(input).map_err(|e| {
        log::debug!("Rejected {input:?}: {e}");
        ClassifyError::InvalidAddress {
            input: input.to_string(),
        }
    })?;

    let (ip_class, class_mask) = determine_ip_class(address);
    let subnet_mask = class_mask.require(address).inspect_err(|e| {
        log::debug!("No derivations for {address}: {e}");
    })?;

    let network = network_address(address, subnet_mask);
    let (first_address, last_address) = network_range(network, subnet_mask);

    Ok(Classification {
        address,
        ip_class,
        subnet_mask,
        network_id_format: ip_class.network_id_format().unwrap_or_default(),
        network_address: network,
        broadcast_address: broadcast_address(address, subnet_mask),
        hosts_per_network: hosts_per_network(subnet_mask),
        number_of_networks: number_of_networks(subnet_mask),
        first_address,
        last_address,
        hops: hops(subnet_mask),
    })
}

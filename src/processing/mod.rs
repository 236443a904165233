//! Classification logic.
//!
//! Pure functions, applied in this order by [`classify`]:
//! - [`validate`] - address validation
//! - [`class`] - class and default mask from the first octet
//! - [`network`] - network, broadcast and range derivation
//! - [`capacity`] - host, network and hop counts

mod capacity;
mod class;
mod network;
mod summary;
mod validate;

// Re-export public functions
pub use capacity::{hops, hosts_per_network, number_of_networks};
pub use class::determine_ip_class;
pub use network::{broadcast_address, network_address, network_range};
pub use summary::classify;
pub use validate::{parse_address, validate_ip, RESERVED_LITERALS};

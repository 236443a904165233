//! Classify IPv4 addresses into their legacy class (A, B or C) and derive
//! the default subnet mask, network and broadcast addresses, network range
//! and host counts.
//!
//! ```
//! use ipv4_class_summary::{classify, models::IpClass};
//! let c = classify("192.168.1.1").unwrap();
//! assert_eq!(c.ip_class, IpClass::C);
//! assert_eq!(c.broadcast_address.to_string(), "192.168.1.255");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod session;

pub use error::{ClassifyError, ValidationError, INVALID_ADDRESS_MESSAGE};
pub use processing::{classify, validate_ip};
pub use session::{run_session, SessionSummary};

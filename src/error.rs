//! Error types.
//!
//! [`ValidationError`] says why a string is not an acceptable address.
//! Callers of [`crate::classify`] only see [`ClassifyError`], which folds
//! every validation failure into [`ClassifyError::InvalidAddress`].

use std::net::Ipv4Addr;
use thiserror::Error;

/// Message shown to users for any rejected input.
pub const INVALID_ADDRESS_MESSAGE: &str =
    "Invalid IP address format. Please enter a valid IPv4 address.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("expected 4 dot-separated segments, found {0}")]
    SegmentCount(usize),

    #[error("segment {0:?} is not a decimal number")]
    NonDigitSegment(String),

    #[error("segment {0:?} is outside 0-255")]
    OctetOutOfRange(String),

    #[error("{0} is reserved and has no class")]
    Reserved(Ipv4Addr),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("Invalid IP address format. Please enter a valid IPv4 address.")]
    InvalidAddress { input: String },

    #[error("{address} is not in class A, B or C (first octet {first_octet}); no default subnet mask")]
    NoDefaultMask { address: Ipv4Addr, first_octet: u8 },
}

//! Address validation.
//!
//! Rules run in order: four dot-separated segments, each made of ASCII
//! digits only, each in 0-255, and the text not one of the two reserved
//! literals. Leading zeros are accepted (`"01"` is 1) and are never
//! normalised, so `"00.0.0.0"` is not the reserved `"0.0.0.0"`.

use crate::error::ValidationError;
use crate::models::IPV4_OCTETS;
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Inputs rejected even though they are well formed, compared as text.
pub const RESERVED_LITERALS: [&str; 2] = ["0.0.0.0", "255.255.255.255"];

static DIGITS_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_digits_regex() -> &'static Regex {
    DIGITS_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("Invalid Regex"))
}

/// Value of an all-digit segment, or None above 255.
fn parse_octet(segment: &str) -> Option<u8> {
    let significant = segment.trim_start_matches('0');
    if significant.is_empty() {
        return Some(0);
    }
    // Longer runs would overflow the parse below; they are out of range anyway.
    if significant.len() > 3 {
        return None;
    }
    significant
        .parse::<u16>()
        .ok()
        .and_then(|value| u8::try_from(value).ok())
}

/// Parse a candidate address, reporting which rule rejected it.
pub fn parse_address(input: &str) -> Result<Ipv4Addr, ValidationError> {
    let segments: Vec<&str> = input.split('.').collect();
    if segments.len() != IPV4_OCTETS {
        return Err(ValidationError::SegmentCount(segments.len()));
    }

    let mut octets = [0u8; IPV4_OCTETS];
    for (octet, segment) in octets.iter_mut().zip(&segments) {
        if !get_digits_regex().is_match(segment) {
            return Err(ValidationError::NonDigitSegment(segment.to_string()));
        }
        *octet = parse_octet(segment)
            .ok_or_else(|| ValidationError::OctetOutOfRange(segment.to_string()))?;
    }

    let address = Ipv4Addr::from(octets);
    if RESERVED_LITERALS.contains(&input) {
        return Err(ValidationError::Reserved(address));
    }
    Ok(address)
}

/// True when `input` is an acceptable IPv4 address.
pub fn validate_ip(input: &str) -> bool {
    parse_address(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address_valid() {
        assert_eq!(
            parse_address("192.168.1.1").unwrap(),
            Ipv4Addr::new(192, 168, 1, 1)
        );
        assert_eq!(parse_address("0.1.2.3").unwrap(), Ipv4Addr::new(0, 1, 2, 3));
        assert_eq!(
            parse_address("255.255.255.254").unwrap(),
            Ipv4Addr::new(255, 255, 255, 254)
        );
    }

    #[test]
    fn test_parse_address_leading_zeros() {
        assert_eq!(parse_address("01.002.0.10").unwrap(), Ipv4Addr::new(1, 2, 0, 10));
        assert_eq!(
            parse_address("10.0.0.000255").unwrap(),
            Ipv4Addr::new(10, 0, 0, 255)
        );
    }

    #[test]
    fn test_parse_address_segment_count() {
        assert_eq!(parse_address("1.2.3"), Err(ValidationError::SegmentCount(3)));
        assert_eq!(parse_address("1.2.3.4.5"), Err(ValidationError::SegmentCount(5)));
        assert_eq!(parse_address(""), Err(ValidationError::SegmentCount(1)));
    }

    #[test]
    fn test_parse_address_non_digit() {
        assert_eq!(
            parse_address("1..2.3"),
            Err(ValidationError::NonDigitSegment("".to_string()))
        );
        assert_eq!(
            parse_address("1.2.3."),
            Err(ValidationError::NonDigitSegment("".to_string()))
        );
        assert_eq!(
            parse_address("1.2.3.-4"),
            Err(ValidationError::NonDigitSegment("-4".to_string()))
        );
        assert_eq!(
            parse_address(" 1.2.3.4"),
            Err(ValidationError::NonDigitSegment(" 1".to_string()))
        );
        assert_eq!(
            parse_address("0x1.2.3.4"),
            Err(ValidationError::NonDigitSegment("0x1".to_string()))
        );
        assert_eq!(
            parse_address("1.2.3.+4"),
            Err(ValidationError::NonDigitSegment("+4".to_string()))
        );
    }

    #[test]
    fn test_parse_address_out_of_range() {
        assert_eq!(
            parse_address("300.1.1.1"),
            Err(ValidationError::OctetOutOfRange("300".to_string()))
        );
        assert_eq!(
            parse_address("1.1.1.256"),
            Err(ValidationError::OctetOutOfRange("256".to_string()))
        );
        assert_eq!(
            parse_address("1.1.1.99999999999999999999"),
            Err(ValidationError::OctetOutOfRange("99999999999999999999".to_string()))
        );
    }

    #[test]
    fn test_parse_address_reserved() {
        assert_eq!(
            parse_address("0.0.0.0"),
            Err(ValidationError::Reserved(Ipv4Addr::UNSPECIFIED))
        );
        assert_eq!(
            parse_address("255.255.255.255"),
            Err(ValidationError::Reserved(Ipv4Addr::BROADCAST))
        );
    }

    #[test]
    fn test_parse_address_reserved_needs_exact_text() {
        assert_eq!(parse_address("00.0.0.0"), Ok(Ipv4Addr::UNSPECIFIED));
        assert_eq!(parse_address("0.0.0.00"), Ok(Ipv4Addr::UNSPECIFIED));
        assert_eq!(parse_address("255.255.255.0255"), Ok(Ipv4Addr::BROADCAST));
        assert!(validate_ip("00.0.0.0"));
        assert!(validate_ip("255.0255.255.255"));
    }

    #[test]
    fn test_validate_ip() {
        assert!(validate_ip("10.0.0.5"));
        assert!(validate_ip("127.0.0.1"));
        assert!(validate_ip("224.0.0.1"));
        assert!(!validate_ip("0.0.0.0"));
        assert!(!validate_ip("255.255.255.255"));
        assert!(!validate_ip("300.1.1.1"));
        assert!(!validate_ip("a.b.c.d"));
        assert!(!validate_ip("192.168.1.1/24"));
    }
}

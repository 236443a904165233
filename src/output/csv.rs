//! CSV output, one row per address.

use super::terminal::format_field;
use crate::error::ClassifyError;
use crate::models::{Classification, IpClass, NOT_APPLICABLE};
use itertools::Itertools;

/// Column names and widths, in output order.
const COLUMNS: [(&str, usize); 11] = [
    ("address", 17),
    ("class", 9),
    ("mask", 17),
    ("format", 9),
    ("network", 17),
    ("broadcast", 17),
    ("hosts", 10),
    ("networks", 10),
    ("first", 17),
    ("last", 17),
    ("hops", 10),
];

/// Double any quotes so raw input cannot break the field.
fn escape_quotes(input: &str) -> String {
    input.replace('"', "\"\"")
}

fn join_row(values: &[String]) -> String {
    values
        .iter()
        .zip(COLUMNS.iter())
        .map(|(value, (_, width))| format_field(escape_quotes(value), *width))
        .join(",")
}

/// Header line (no trailing newline).
pub fn csv_header() -> String {
    let names: Vec<String> = COLUMNS.iter().map(|(name, _)| name.to_string()).collect();
    join_row(&names)
}

/// One row for one outcome (no trailing newline).
///
/// Failed inputs keep the raw input in the first column; an unknown class
/// fills `Unknown` and `N/A` and leaves the derived columns empty.
pub fn format_csv_row(input: &str, result: &Result<Classification, ClassifyError>) -> String {
    let values: Vec<String> = match result {
        Ok(c) => vec![
            c.address.to_string(),
            c.ip_class.to_string(),
            c.subnet_mask.to_string(),
            c.network_id_format.to_string(),
            c.network_address.to_string(),
            c.broadcast_address.to_string(),
            c.hosts_per_network.to_string(),
            c.number_of_networks.to_string(),
            c.first_address.to_string(),
            c.last_address.to_string(),
            c.hops.to_string(),
        ],
        Err(ClassifyError::NoDefaultMask { address, .. }) => {
            let mut row = vec![
                address.to_string(),
                IpClass::Unknown.to_string(),
                NOT_APPLICABLE.to_string(),
            ];
            row.resize(COLUMNS.len(), String::new());
            row
        }
        Err(ClassifyError::InvalidAddress { .. }) => {
            let mut row = vec![input.to_string(), "Invalid".to_string()];
            row.resize(COLUMNS.len(), String::new());
            row
        }
    };
    join_row(&values)
}

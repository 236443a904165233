//! Terminal output: labelled lines, one block per address.

use crate::error::ClassifyError;
use crate::models::Classification;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

fn label(text: &str, colorize: bool) -> String {
    if colorize {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Render a classification as the labelled lines users read.
pub fn format_classification(c: &Classification, colorize: bool) -> String {
    let lines = [
        ("IP Class", c.ip_class.to_string()),
        ("Default Subnet Mask", c.subnet_mask.to_string()),
        ("Network ID", c.network_address.to_string()),
        ("Network ID Format", c.network_id_format.to_string()),
        ("Broadcast Address", c.broadcast_address.to_string()),
        ("Hosts per Network", c.hosts_per_network.to_string()),
        ("Number of Networks", c.number_of_networks.to_string()),
        (
            "Network Range",
            format!("{} - {}", c.first_address, c.last_address),
        ),
        ("Hops (Usable Hosts per Network)", c.hops.to_string()),
    ];

    lines
        .iter()
        .map(|(name, value)| format!("{}: {value}\n", label(name, colorize)))
        .collect()
}

/// Render a failed classification as a single error line.
pub fn format_error(err: &ClassifyError, colorize: bool) -> String {
    let prefix = if colorize {
        "Error".on_red().to_string()
    } else {
        "Error".to_string()
    };
    format!("{prefix}: {err}\n")
}

//! Output formatting for classification results.
//!
//! This module turns outcomes into text for the presentation layer:
//! - [`terminal`] - labelled lines with optional colours
//! - [`json`] - one JSON object per line
//! - [`csv`] - CSV rows with right-aligned quoted fields

mod csv;
mod json;
mod terminal;

pub use csv::{csv_header, format_csv_row};
pub use json::format_json;
pub use terminal::{format_classification, format_error, format_field};

use crate::config::{Config, OutputFormat};
use crate::error::ClassifyError;
use crate::models::Classification;
use std::error::Error;

/// Text written once before any outcome, if the format has one.
pub fn render_header(format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Csv => Some(format!("{}\n", csv_header())),
        OutputFormat::Text | OutputFormat::Json => None,
    }
}

/// Render one outcome in the configured format, newline terminated.
pub fn render_outcome(
    input: &str,
    result: &Result<Classification, ClassifyError>,
    config: &Config,
) -> Result<String, Box<dyn Error>> {
    let rendered = match config.format {
        OutputFormat::Text => match result {
            Ok(c) => format!("{}\n", format_classification(c, config.colorize)),
            Err(e) => format_error(e, config.colorize),
        },
        OutputFormat::Json => format!(
            "{}\n",
            format_json(input, result).map_err(|e| format!("Error serializing JSON: {e}"))?
        ),
        OutputFormat::Csv => format!("{}\n", format_csv_row(input, result)),
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify;

    fn config(format: OutputFormat) -> Config {
        Config {
            format,
            colorize: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_render_header() {
        assert!(render_header(OutputFormat::Text).is_none());
        assert!(render_header(OutputFormat::Json).is_none());
        let header = render_header(OutputFormat::Csv).unwrap();
        assert!(header.contains("\"address\""));
        assert!(header.ends_with('\n'));
    }

    #[test]
    fn test_render_outcome_text() {
        let out = render_outcome("10.0.0.5", &classify("10.0.0.5"), &config(OutputFormat::Text))
            .unwrap();
        assert!(out.starts_with("IP Class: A\n"));
        assert!(out.ends_with("Hops (Usable Hosts per Network): 16777216\n\n"));

        let out = render_outcome("0.0.0.0", &classify("0.0.0.0"), &config(OutputFormat::Text))
            .unwrap();
        assert_eq!(
            out,
            "Error: Invalid IP address format. Please enter a valid IPv4 address.\n"
        );
    }

    #[test]
    fn test_render_outcome_json_and_csv() {
        let result = classify("172.16.0.1");
        let json = render_outcome("172.16.0.1", &result, &config(OutputFormat::Json)).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.ends_with("}\n"));
        let csv = render_outcome("172.16.0.1", &result, &config(OutputFormat::Csv)).unwrap();
        assert!(csv.contains("\"B\""));
        assert!(csv.ends_with('\n'));
    }
}

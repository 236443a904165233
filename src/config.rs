//! Runtime configuration.
//!
//! Built from the parsed command line (see [`crate::cli`]) so the rest of
//! the crate never depends on how options were supplied.

use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

/// Default log4rs configuration file, relative to the working directory.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Prompt shown before each interactive submission.
pub const PROMPT: &str = "Enter IPv4 address: ";

#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Labelled lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
    /// Header plus one CSV row per address
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    /// Style labels and errors with terminal colours.
    pub colorize: bool,
    pub log_config: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::default(),
            colorize: true,
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
        }
    }
}

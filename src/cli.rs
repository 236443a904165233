//! Command-line definition.
//!
//! Every option also reads an environment variable, so a `.env` file loaded
//! by `dotenv` can set defaults.

use crate::config::{Config, OutputFormat, DEFAULT_LOG_CONFIG};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ipv4-class-summary")]
#[command(about = "Classify IPv4 addresses (class A/B/C) and show default mask, network and broadcast.")]
pub struct CommandLine {
    /// Addresses to classify; prompts interactively when none are given
    pub addresses: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, env = "IPV4_CLASS_FORMAT")]
    pub format: OutputFormat,

    /// Disable terminal colours
    #[arg(long = "no-color", env = "IPV4_CLASS_NO_COLOR")]
    pub no_color: bool,

    /// log4rs configuration file
    #[arg(long = "log-config", default_value = DEFAULT_LOG_CONFIG, env = "IPV4_CLASS_LOG_CONFIG")]
    pub log_config: PathBuf,

    /// Print the class rules and exit
    #[arg(long)]
    pub rules: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        CommandLine::parse()
    }
}

impl From<&CommandLine> for Config {
    fn from(commands: &CommandLine) -> Self {
        Config {
            format: commands.format,
            colorize: !commands.no_color,
            log_config: commands.log_config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_addresses_and_format() {
        let cmd = CommandLine::try_parse_from([
            "ipv4-class-summary",
            "--format",
            "csv",
            "--no-color",
            "10.0.0.1",
            "192.168.1.1",
        ])
        .unwrap();
        assert_eq!(cmd.addresses, vec!["10.0.0.1", "192.168.1.1"]);
        let config = Config::from(&cmd);
        assert_eq!(config.format, OutputFormat::Csv);
        assert!(!config.colorize);
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(CommandLine::try_parse_from(["ipv4-class-summary", "-f", "xml"]).is_err());
    }

    #[test]
    fn test_parse_rules_flag() {
        let cmd = CommandLine::try_parse_from(["ipv4-class-summary", "--rules"]).unwrap();
        assert!(cmd.rules);
        assert!(cmd.addresses.is_empty());
    }
}

//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Maskera using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Maskera - spreadsheet anonymization tool
#[derive(Parser, Debug)]
#[command(name = "maskera")]
#[command(version, about, long_about = None)]
#[command(author = "Maskera Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "maskera.toml", env = "MASKERA_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MASKERA_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Anonymize names, usernames and emails in a spreadsheet
    Anonymize(commands::anonymize::AnonymizeArgs),

    /// Transplant anonymized values into a formatting-preserving copy
    Transplant(commands::transplant::TransplantArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_anonymize() {
        let cli = Cli::parse_from(["maskera", "anonymize", "in.xlsx", "out.xlsx"]);
        assert_eq!(cli.config, "maskera.toml");
        assert!(matches!(cli.command, Commands::Anonymize(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from([
            "maskera",
            "--config",
            "custom.toml",
            "anonymize",
            "in.xlsx",
            "out.xlsx",
        ]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from([
            "maskera",
            "--log-level",
            "debug",
            "anonymize",
            "in.xlsx",
            "out.xlsx",
        ]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_transplant() {
        let cli = Cli::parse_from([
            "maskera",
            "transplant",
            "source.xlsx",
            "anon.xlsx",
            "m.mapping.json",
            "out.xlsx",
        ]);
        assert!(matches!(cli.command, Commands::Transplant(_)));
    }

    #[test]
    fn test_transplant_requires_four_arguments() {
        let result = Cli::try_parse_from(["maskera", "transplant", "source.xlsx", "anon.xlsx"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_anonymize_requires_two_arguments() {
        let result = Cli::try_parse_from(["maskera", "anonymize", "in.xlsx"]);
        assert!(result.is_err());
    }
}

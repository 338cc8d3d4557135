// Maskera - spreadsheet anonymization tool
// Copyright (c) 2025 Maskera Contributors
// Licensed under the MIT License

use clap::Parser;
use maskera::cli::{Cli, Commands};
use maskera::config::load_config;
use maskera::logging::init_logging;
use std::process;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration (defaults if no config file is present)
    let config = match load_config(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(2);
        }
    };

    // Initialize logging; the guard must outlive the run
    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let _guard = match init_logging(log_level, &config.logging) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Maskera starting");

    // Execute command and get exit code
    let exit_code = match execute_command(&cli, &config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli, config: &maskera::config::MaskeraConfig) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Anonymize(args) => args.execute(config),
        Commands::Transplant(args) => args.execute(),
    }
}

// Maskera - spreadsheet anonymization tool
// Copyright (c) 2025 Maskera Contributors
// Licensed under the MIT License

//! # Maskera - mapping-consistent spreadsheet anonymization
//!
//! Maskera anonymizes personally identifying fields (full names, usernames,
//! email addresses) in spreadsheet data. Every run produces an anonymized
//! copy of the sheet plus a reversible JSON mapping file, and a separate
//! transplant step moves the anonymized values back into a
//! formatting-preserving copy of the original workbook.
//!
//! ## Overview
//!
//! The core is the mapping-consistent anonymization engine: aliases for
//! names, usernames and emails are minted once per identity and reused across
//! all three identifier types, so `anna svensson`, `anna.svensson` and
//! `anna.svensson@example.com` stay linked after anonymization.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (anonymization driver, transplant)
//! - [`anonymization`] - Alias generation, identity mapping, mapping file
//! - [`sheet`] - Spreadsheet reading/writing and column location
//! - [`domain`] - Error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use maskera::config::MaskeraConfig;
//! use maskera::core::AnonymizationDriver;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MaskeraConfig::default();
//!     let mut driver = AnonymizationDriver::new(&config);
//!
//!     let summary = driver.run("report.xlsx", "report_anonymized.xlsx")?;
//!     println!("Anonymized {} identities", summary.mapped_identities);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible library operations return [`domain::MaskeraError`]:
//!
//! ```rust,no_run
//! use maskera::domain::Result;
//! use maskera::anonymization::MappingFile;
//!
//! fn example() -> Result<()> {
//!     let mapping = MappingFile::load("report.mapping.json")?;
//!     println!("{} identities recorded", mapping.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Maskera uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! tracing::info!("Starting anonymization");
//! tracing::warn!(email = "a@b.c", "Could not anonymize email address");
//! ```

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod sheet;

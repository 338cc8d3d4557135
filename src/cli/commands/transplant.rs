//! Transplant command implementation

use crate::core::transplant;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the transplant command
#[derive(Args, Debug)]
pub struct TransplantArgs {
    /// Path to the unmodified source spreadsheet
    pub source_file: PathBuf,

    /// Path to the already-anonymized spreadsheet with the same cell grid
    pub anonymized_file: PathBuf,

    /// Path to the mapping file from the anonymization run
    pub mapping_file: PathBuf,

    /// Path for the patched, formatting-preserving output spreadsheet
    pub output_file: PathBuf,
}

impl TransplantArgs {
    /// Execute the transplant command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!("Starting transplant command");

        let summary = match transplant(
            &self.source_file,
            &self.anonymized_file,
            &self.mapping_file,
            &self.output_file,
        ) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Transplant failed");
                eprintln!("Transplant failed: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        println!("Done! {} cells updated.", summary.cells_updated);
        println!(
            "Formatted result saved to: {}",
            self.output_file.display()
        );
        tracing::debug!(duration_ms = summary.duration.as_millis() as u64, "Command finished");

        Ok(0)
    }
}

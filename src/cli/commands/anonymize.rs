//! Anonymize command implementation

use crate::config::MaskeraConfig;
use crate::core::AnonymizationDriver;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the anonymize command
#[derive(Args, Debug)]
pub struct AnonymizeArgs {
    /// Path to the input spreadsheet
    pub input_file: PathBuf,

    /// Path for the anonymized output spreadsheet
    pub output_file: PathBuf,
}

impl AnonymizeArgs {
    /// Execute the anonymize command
    pub fn execute(&self, config: &MaskeraConfig) -> anyhow::Result<i32> {
        tracing::info!("Starting anonymize command");

        let mut driver = AnonymizationDriver::new(config);
        let summary = match driver.run(&self.input_file, &self.output_file) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Anonymization failed");
                eprintln!("Anonymization failed: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        if !summary.columns_found {
            println!(
                "Warning: could not find both the '{}' and '{}' columns — nothing anonymized",
                config.columns.alias_marker, config.columns.username_marker
            );
            return Ok(0);
        }

        println!(
            "Anonymization complete! {} names replaced.",
            summary.mapped_identities
        );
        println!("Result saved to: {}", self.output_file.display());
        if let Some(mapping_path) = &summary.mapping_path {
            println!("Mapping saved to: {}", mapping_path.display());
        }
        tracing::debug!(duration_ms = summary.duration.as_millis() as u64, "Command finished");

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymize_args_paths() {
        let args = AnonymizeArgs {
            input_file: PathBuf::from("in.xlsx"),
            output_file: PathBuf::from("out.xlsx"),
        };
        assert_eq!(args.input_file, PathBuf::from("in.xlsx"));
        assert_eq!(args.output_file, PathBuf::from("out.xlsx"));
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let config = MaskeraConfig::default();
        let args = AnonymizeArgs {
            input_file: PathBuf::from("/nonexistent/in.xlsx"),
            output_file: PathBuf::from("/nonexistent/out.xlsx"),
        };
        let code = args.execute(&config).unwrap();
        assert_eq!(code, 5);
    }
}

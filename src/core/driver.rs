//! Anonymization run orchestration
//!
//! The [`AnonymizationDriver`] ties the pieces together for one run: read the
//! source table, locate the two target columns, anonymize eligible cells via
//! the [`IdentityMapper`], write the anonymized table and the sidecar mapping
//! file.

use crate::anonymization::{IdentityMapper, MappingFile};
use crate::config::MaskeraConfig;
use crate::domain::Result;
use crate::sheet::{find_marker_column, read_table, write_table, CellValue, SheetTable};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Target columns located in a table, plus cell rewrite stats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOutcome {
    /// 0-based index of the alias/email column
    pub alias_column: usize,
    /// 0-based index of the username column
    pub username_column: usize,
    /// Number of cells rewritten with an anonymized value
    pub cells_rewritten: usize,
}

/// Summary of one anonymization run
#[derive(Debug)]
pub struct AnonymizeSummary {
    /// Total count of distinct mapped identities (names + emails + usernames)
    pub mapped_identities: usize,
    /// Cells rewritten in the output table
    pub cells_rewritten: usize,
    /// Path of the written mapping file, if the run produced output
    pub mapping_path: Option<PathBuf>,
    /// Whether both target columns were found
    pub columns_found: bool,
    /// Wall-clock duration of the run
    pub duration: Duration,
}

/// Orchestrates one anonymization run over one spreadsheet
pub struct AnonymizationDriver<'a> {
    config: &'a MaskeraConfig,
    mapper: IdentityMapper,
}

impl<'a> AnonymizationDriver<'a> {
    /// Create a driver with a fresh identity mapper
    pub fn new(config: &'a MaskeraConfig) -> Self {
        Self::with_mapper(config, IdentityMapper::new())
    }

    /// Create a driver around a caller-supplied mapper
    pub fn with_mapper(config: &'a MaskeraConfig, mapper: IdentityMapper) -> Self {
        Self { config, mapper }
    }

    /// Run the full anonymization: read, anonymize, write table and mapping
    ///
    /// Missing target columns are a precondition failure, not a fault: the
    /// run logs a warning and returns a zero-count summary without writing
    /// any output. Environment errors (unreadable input, unwritable output)
    /// propagate.
    pub fn run(&mut self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<AnonymizeSummary> {
        let start = Instant::now();
        let input = input.as_ref();
        let output = output.as_ref();

        tracing::info!(input = %input.display(), "Starting anonymization");
        let mut table = read_table(input)?;

        let outcome = match self.anonymize_table(&mut table) {
            Some(outcome) => outcome,
            None => {
                tracing::warn!(
                    alias_marker = %self.config.columns.alias_marker,
                    username_marker = %self.config.columns.username_marker,
                    "Could not find both target columns, nothing anonymized"
                );
                return Ok(AnonymizeSummary {
                    mapped_identities: 0,
                    cells_rewritten: 0,
                    mapping_path: None,
                    columns_found: false,
                    duration: start.elapsed(),
                });
            }
        };

        write_table(&table, output)?;

        let mapping = MappingFile::from_mapper(&self.mapper);
        let mapping_path = MappingFile::path_for(output);
        mapping.save(&mapping_path)?;

        tracing::info!(
            identities = mapping.len(),
            cells = outcome.cells_rewritten,
            output = %output.display(),
            mapping = %mapping_path.display(),
            "Anonymization complete"
        );

        Ok(AnonymizeSummary {
            mapped_identities: mapping.len(),
            cells_rewritten: outcome.cells_rewritten,
            mapping_path: Some(mapping_path),
            columns_found: true,
            duration: start.elapsed(),
        })
    }

    /// Anonymize an in-memory table
    ///
    /// Returns `None` when either target column cannot be located. Cells are
    /// processed top to bottom, alias column first, then the username column.
    pub fn anonymize_table(&mut self, table: &mut SheetTable) -> Option<TableOutcome> {
        let alias_column = find_marker_column(table, &self.config.columns.alias_marker)?;
        let username_column = find_marker_column(table, &self.config.columns.username_marker)?;

        tracing::debug!(alias_column, username_column, "Located target columns");

        let mut cells_rewritten = 0;

        for row in 0..table.row_count() {
            if let Some(value) = self.eligible_value(table, row, alias_column) {
                let anonymized = if value.contains('@') {
                    self.mapper.anonymize_email(&value)
                } else {
                    self.mapper.anonymize_username(&value, None)
                };
                if anonymized != value {
                    cells_rewritten += 1;
                }
                table.set(row, alias_column, CellValue::Text(anonymized));
            }
        }

        for row in 0..table.row_count() {
            if let Some(value) = self.eligible_value(table, row, username_column) {
                let anonymized = self.mapper.anonymize_username(&value, None);
                if anonymized != value {
                    cells_rewritten += 1;
                }
                table.set(row, username_column, CellValue::Text(anonymized));
            }
        }

        Some(TableOutcome {
            alias_column,
            username_column,
            cells_rewritten,
        })
    }

    /// The cell's text if it should be anonymized
    ///
    /// Blank cells, non-text cells and standard values are skipped.
    fn eligible_value(&self, table: &SheetTable, row: usize, col: usize) -> Option<String> {
        let cell = table.get(row, col);
        if cell.is_blank() {
            return None;
        }
        let text = cell.as_text()?;
        if self.config.is_standard_value(text) {
            return None;
        }
        Some(text.to_string())
    }

    /// The identity mapper owning this run's state
    pub fn mapper(&self) -> &IdentityMapper {
        &self.mapper
    }
}

//! Formatting-preserving transplant of anonymized values
//!
//! Spreadsheet round-trips through the tabular writer lose styling, so the
//! transplant step patches anonymized values straight into a copy of the
//! original workbook instead: every cell of the anonymized document whose
//! value is a known alias overwrites the same coordinate in the source
//! workbook, leaving that workbook's formatting intact.

use crate::anonymization::MappingFile;
use crate::domain::{MaskeraError, Result};
use std::path::Path;
use std::time::{Duration, Instant};

/// Summary of one transplant run
#[derive(Debug)]
pub struct TransplantSummary {
    /// Number of cells overwritten with an anonymized value
    pub cells_updated: usize,
    /// Wall-clock duration of the run
    pub duration: Duration,
}

/// Copy anonymized values into a style-preserving copy of the source workbook
///
/// `source` and `anonymized` must share the same cell grid; both first sheets
/// are walked in row/column order. The patched copy of `source` is saved at
/// `output`.
pub fn transplant(
    source: impl AsRef<Path>,
    anonymized: impl AsRef<Path>,
    mapping_path: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<TransplantSummary> {
    let start = Instant::now();
    let source = source.as_ref();
    let anonymized = anonymized.as_ref();
    let output = output.as_ref();

    let mapping = MappingFile::load(mapping_path.as_ref())?;
    let reverse = mapping.reverse_lookup();
    tracing::debug!(aliases = reverse.len(), "Built reverse lookup");

    let mut source_book = umya_spreadsheet::reader::xlsx::read(source)
        .map_err(|e| MaskeraError::Sheet(format!("Failed to open {}: {}", source.display(), e)))?;
    let anonymized_book = umya_spreadsheet::reader::xlsx::read(anonymized).map_err(|e| {
        MaskeraError::Sheet(format!("Failed to open {}: {}", anonymized.display(), e))
    })?;

    let anonymized_sheet = anonymized_book.get_sheet(&0).ok_or_else(|| {
        MaskeraError::Sheet(format!("No worksheet in {}", anonymized.display()))
    })?;
    let max_row = anonymized_sheet.get_highest_row();
    let max_col = anonymized_sheet.get_highest_column();

    let source_sheet = source_book
        .get_sheet_mut(&0)
        .ok_or_else(|| MaskeraError::Sheet(format!("No worksheet in {}", source.display())))?;

    let mut cells_updated = 0;
    for row in 1..=max_row {
        for col in 1..=max_col {
            let value = anonymized_sheet.get_value((col, row));
            if value.is_empty() || !reverse.contains_key(&value) {
                continue;
            }
            // Setting only the value keeps the source cell's style record.
            source_sheet.get_cell_mut((col, row)).set_value(value.as_str());
            cells_updated += 1;
            tracing::debug!(row, col, "Transplanted anonymized value");
        }
    }

    umya_spreadsheet::writer::xlsx::write(&source_book, output)
        .map_err(|e| MaskeraError::Sheet(format!("Failed to write {}: {}", output.display(), e)))?;

    tracing::info!(
        cells_updated,
        output = %output.display(),
        "Transplant complete"
    );

    Ok(TransplantSummary {
        cells_updated,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_mapping_file_fails() {
        let err = transplant(
            "/nonexistent/source.xlsx",
            "/nonexistent/anon.xlsx",
            "/nonexistent/m.json",
            "/nonexistent/out.xlsx",
        )
        .unwrap_err();
        assert!(matches!(err, MaskeraError::Mapping(_)));
    }
}

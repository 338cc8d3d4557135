//! Spreadsheet reading via calamine
//!
//! Only the first worksheet is read; multi-sheet workbooks are out of scope.

use crate::domain::{MaskeraError, Result};
use crate::sheet::table::{CellValue, SheetTable};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Read the first worksheet of a spreadsheet into a [`SheetTable`]
///
/// The first row becomes the header row; every following row becomes a data
/// row padded to the header width.
pub fn read_table(path: impl AsRef<Path>) -> Result<SheetTable> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| MaskeraError::Sheet(format!("No worksheet in {}", path.display())))??;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(header_text).collect(),
        None => {
            return Err(MaskeraError::Sheet(format!(
                "Worksheet in {} is empty",
                path.display()
            )))
        }
    };

    let data_rows: Vec<Vec<CellValue>> = rows
        .map(|row| row.iter().map(to_cell_value).collect())
        .collect();

    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = data_rows.len(),
        "Read worksheet"
    );

    Ok(SheetTable::new(headers, data_rows))
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn to_cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        // Formula errors carry no anonymizable content
        Data::Error(_) => CellValue::Empty,
    }
}

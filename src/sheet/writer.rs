//! Spreadsheet writing via rust_xlsxwriter

use crate::domain::Result;
use crate::sheet::table::{CellValue, SheetTable};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Write a [`SheetTable`] as a single-sheet xlsx workbook
///
/// The header row lands in row 0, data rows below it, mirroring the layout
/// the reader took apart.
pub fn write_table(table: &SheetTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in table.headers().iter().enumerate() {
        worksheet.write_string(0, col as u16, header.as_str())?;
    }

    for (row_idx, row) in table.rows().iter().enumerate() {
        let out_row = (row_idx + 1) as u32;
        for (col_idx, cell) in row.iter().enumerate() {
            let col = col_idx as u16;
            match cell {
                CellValue::Empty => {}
                CellValue::Text(s) => {
                    worksheet.write_string(out_row, col, s.as_str())?;
                }
                CellValue::Number(n) => {
                    worksheet.write_number(out_row, col, *n)?;
                }
                CellValue::Bool(b) => {
                    worksheet.write_boolean(out_row, col, *b)?;
                }
            }
        }
    }

    workbook.save(path)?;
    tracing::debug!(path = %path.display(), rows = table.row_count(), "Wrote worksheet");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::reader::read_table;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_preserves_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.xlsx");

        let table = SheetTable::new(
            vec!["Name".into(), "Count".into()],
            vec![
                vec![CellValue::Text("anna".into()), CellValue::Number(2.0)],
                vec![CellValue::Empty, CellValue::Bool(true)],
            ],
        );

        write_table(&table, &path).unwrap();
        let read_back = read_table(&path).unwrap();

        assert_eq!(read_back.headers(), table.headers());
        assert_eq!(read_back.get(0, 0).as_text(), Some("anna"));
        assert_eq!(read_back.get(0, 1), &CellValue::Number(2.0));
        assert_eq!(read_back.get(1, 1), &CellValue::Bool(true));
    }
}

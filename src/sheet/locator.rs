//! Marker-based column location
//!
//! Exported reports often carry preamble rows, so the labels identifying the
//! interesting columns appear as cell values inside the data area rather than
//! as column headers. The locator scans column values for a literal marker.

use crate::sheet::table::SheetTable;

/// Find the first column whose trimmed cell values contain `marker`
pub fn find_marker_column(table: &SheetTable, marker: &str) -> Option<usize> {
    (0..table.column_count()).find(|&col| {
        table.rows().iter().any(|row| {
            row[col]
                .as_text()
                .map(|text| text.trim() == marker)
                .unwrap_or(false)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::table::CellValue;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn sample_table() -> SheetTable {
        SheetTable::new(
            vec!["Unnamed: 0".into(), "Unnamed: 1".into(), "Unnamed: 2".into()],
            vec![
                vec![text("Teammedlemmar"), CellValue::Empty, CellValue::Empty],
                vec![text("Alias"), text("Användarnamn"), text("Aktivitet")],
                vec![text("anna.svensson@example.com"), text("anna.svensson"), text("Inget")],
            ],
        )
    }

    #[test]
    fn test_finds_marker_in_column_values() {
        let table = sample_table();
        assert_eq!(find_marker_column(&table, "Alias"), Some(0));
        assert_eq!(find_marker_column(&table, "Användarnamn"), Some(1));
    }

    #[test]
    fn test_marker_matching_trims_whitespace() {
        let table = SheetTable::new(
            vec!["a".into()],
            vec![vec![text("  Alias  ")]],
        );
        assert_eq!(find_marker_column(&table, "Alias"), Some(0));
    }

    #[test]
    fn test_missing_marker_returns_none() {
        let table = sample_table();
        assert_eq!(find_marker_column(&table, "Email"), None);
    }

    #[test]
    fn test_non_text_cells_ignored() {
        let table = SheetTable::new(
            vec!["a".into()],
            vec![vec![CellValue::Number(42.0)]],
        );
        assert_eq!(find_marker_column(&table, "42"), None);
    }
}

//! In-memory tabular model
//!
//! A [`SheetTable`] is the first worksheet of a spreadsheet loaded as a
//! header row plus data rows. Cells keep just enough typing to tell text
//! apart from everything else; only text cells are candidates for
//! anonymization.

/// A single cell value
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// The cell's text, if it is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the cell is empty or blank text
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

/// Rows × named columns, as read from the first worksheet
///
/// The header row is carried through verbatim; all coordinates are 0-based
/// data-row and column indices. Rows are padded to the header width on
/// construction so indexing within bounds never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    /// Create a table, padding every row to the header width
    pub fn new(headers: Vec<String>, mut rows: Vec<Vec<CellValue>>) -> Self {
        let width = headers.len();
        for row in &mut rows {
            row.resize(width, CellValue::Empty);
        }
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Cell at (data row, column)
    pub fn get(&self, row: usize, col: usize) -> &CellValue {
        &self.rows[row][col]
    }

    /// Replace the cell at (data row, column)
    pub fn set(&mut self, row: usize, col: usize, value: CellValue) {
        self.rows[row][col] = value;
    }
}

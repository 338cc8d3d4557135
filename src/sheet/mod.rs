//! Spreadsheet access
//!
//! Thin wrappers around the tabular-data libraries: calamine for reading the
//! first worksheet into a [`SheetTable`], rust_xlsxwriter for writing one
//! back, and the marker-based column locator.

pub mod locator;
pub mod reader;
pub mod table;
pub mod writer;

pub use locator::find_marker_column;
pub use reader::read_table;
pub use table::{CellValue, SheetTable};
pub use writer::write_table;

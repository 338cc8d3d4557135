//! Business logic
//!
//! The driver runs one anonymization pass over a spreadsheet; the transplant
//! step moves anonymized values back into a formatting-preserving copy of the
//! original workbook.

pub mod driver;
pub mod transplant;

pub use driver::{AnonymizationDriver, AnonymizeSummary, TableOutcome};
pub use transplant::{transplant, TransplantSummary};

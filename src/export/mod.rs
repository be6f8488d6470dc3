//! Export functionality for reports
//!
//! Currently supports CSV export of the learner's table next to the reference table.

mod table_csv;

pub use table_csv::{TableCsvExporter, TableExportRecord};

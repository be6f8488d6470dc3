//! CSV export of the Q-table comparison
//!
//! One row per `(x, y, action)`, row-major and in display action order.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::{Error, Result, q_learning::ValidationReport};

/// A single row in the table export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableExportRecord {
    pub x: usize,
    pub y: usize,
    pub action: String,
    pub reference: f64,
    pub user: String,
    pub correct: bool,
}

/// Exporter for Q-table comparison CSV files
pub struct TableCsvExporter;

impl TableCsvExporter {
    /// Flatten a validation report into export rows
    pub fn records(report: &ValidationReport) -> Vec<TableExportRecord> {
        report
            .entries
            .iter()
            .map(|entry| TableExportRecord {
                x: entry.position.x,
                y: entry.position.y,
                action: entry.action.as_str().to_string(),
                reference: entry.expected,
                user: entry.raw.clone(),
                correct: entry.correct,
            })
            .collect()
    }

    /// Write the report as CSV (with header) to any writer.
    ///
    /// # Returns
    /// Number of rows written
    pub fn write<W: Write>(report: &ValidationReport, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let records = Self::records(report);
        for record in &records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush().map_err(|source| Error::Io {
            operation: "flush CSV export".to_string(),
            source,
        })?;
        Ok(records.len())
    }

    /// Write the report to a file at `path`.
    pub fn export(report: &ValidationReport, path: &Path) -> Result<usize> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        Self::write(report, BufWriter::new(file))
    }
}

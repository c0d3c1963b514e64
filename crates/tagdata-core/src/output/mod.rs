//! Canonical table assembly and semicolon-delimited CSV output.
//!
//! The downstream tag-rendering tooling expects `;` as the field delimiter,
//! never the default comma.

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::record::{FieldSet, COLUMNS};

/// Field delimiter of the canonical output format.
pub const DELIMITER: u8 = b';';

/// An assembled table: the fixed 21-column schema plus one row per document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Assemble field sets into canonical rows.
    ///
    /// Every row carries all 21 columns in schema order; columns absent from
    /// a field set are filled with an empty string. Pure and total.
    pub fn assemble(field_sets: &[FieldSet]) -> Self {
        let rows = field_sets
            .iter()
            .map(|fields| {
                COLUMNS
                    .iter()
                    .map(|column| fields.get(*column).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// The schema header.
    pub fn header() -> [&'static str; 21] {
        COLUMNS
    }

    /// Assembled rows, in schema column order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the table as a semicolon-delimited CSV file, creating missing
    /// parent directories. Filesystem errors propagate unmodified.
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .from_path(path)?;

        writer.write_record(Self::header())?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        debug!("wrote {} rows to {}", self.rows.len(), path.display());
        Ok(())
    }

    /// Read a table back from a semicolon-delimited CSV file.
    pub fn read_from_path(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .from_path(path)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }
        Ok(Self { rows })
    }
}

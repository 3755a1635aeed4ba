//! Fixed-column tables and their tab-separated file encoding.

use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::info;

use crate::errors::CoreError;

/// Record terminator native to the build platform.
#[cfg(windows)]
const NATIVE_TERMINATOR: Terminator = Terminator::CRLF;
#[cfg(not(windows))]
const NATIVE_TERMINATOR: Terminator = Terminator::Any(b'\n');

/// An ordered table with a fixed header row.
///
/// Every data row has exactly as many fields as the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given header row.
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a data row.
    ///
    /// # Panics
    ///
    /// Panics if the row width differs from the header width.
    pub fn add_row(&mut self, fields: Vec<String>) {
        assert_eq!(
            fields.len(),
            self.headers.len(),
            "row width must match header width"
        );
        self.rows.push(fields);
    }

    /// The header row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in insertion order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows including the header row.
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Encode the table as tab-separated text into `writer`.
    pub fn write_tsv_to<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(QuoteStyle::Necessary)
            .terminator(NATIVE_TERMINATOR)
            .from_writer(writer);

        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Write the table to `path` as a TSV file, replacing any existing file.
    pub fn write_tsv(&self, path: &Path) -> Result<(), CoreError> {
        let file = std::fs::File::create(path).map_err(|source| CoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.write_tsv_to(file).map_err(|source| CoreError::Csv {
            path: path.display().to_string(),
            source,
        })?;

        info!(path = %path.display(), rows = self.row_count(), "Wrote TSV export");
        Ok(())
    }
}

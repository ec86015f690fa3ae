//! Report generation for joined operator entities
//!
//! Two independent projections over the joined entities are written as
//! comma-separated text with a fixed header row:
//!
//! - [`summary`] - One row per entity, ordered by call sign
//! - [`history`] - One row per history event, ordered by date
//!
//! Quoting is applied explicitly to the organization and notes columns only.
//! Commas are replaced with spaces in names and addresses; no other escaping
//! is performed, so the writer is configured to emit every field verbatim.
//!
//! # Basic Usage
//!
//! ```rust
//! use uls_processor::app::models::OperatorEntity;
//! use uls_processor::app::services::report_writer::write_summary;
//!
//! # fn example() -> uls_processor::Result<()> {
//! let entities = vec![OperatorEntity::new("KB1ABC")];
//! let mut output = Vec::new();
//!
//! let rows = write_summary(&mut output, &entities)?;
//! assert_eq!(rows, 1);
//! # Ok(())
//! # }
//! ```

pub mod history;
pub mod summary;

#[cfg(test)]
pub mod tests;

use crate::constants::REPORT_DATE_FORMAT;
use crate::{Error, Result};
use chrono::NaiveDate;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub use history::{history_rows, write_history, write_history_file};
pub use summary::{summary_row, write_summary, write_summary_file};

/// Create a writer that emits fields exactly as given
pub(crate) fn report_writer<W: Write>(output: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .has_headers(false)
        .from_writer(output)
}

/// Create or truncate a report file
pub(crate) fn create_report_file(path: &Path) -> Result<File> {
    File::create(path)
        .map_err(|e| Error::io(format!("Failed to create report '{}'", path.display()), e))
}

/// Write one record, naming the report and row in the error
pub(crate) fn write_row<W: Write>(
    writer: &mut csv::Writer<W>,
    row: &[String],
    report: &str,
    call_sign: &str,
) -> Result<()> {
    writer
        .write_record(row)
        .map_err(|e| Error::csv(format!("Failed to write {} row for {}", report, call_sign), e))
}

/// Flush buffered rows to the underlying output
pub(crate) fn finish<W: Write>(mut writer: csv::Writer<W>, report: &str) -> Result<()> {
    writer
        .flush()
        .map_err(|e| Error::io(format!("Failed to flush {} report", report), e))
}

/// Format a report date, empty when absent
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(REPORT_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Wrap a value in double quotes without escaping
pub fn quoted(value: &str) -> String {
    format!("\"{}\"", value)
}

/// Replace commas with spaces so a value cannot split a row
pub fn strip_commas(value: &str) -> String {
    value.replace(',', " ")
}

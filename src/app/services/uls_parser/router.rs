//! Line routing into record tables
//!
//! Each input line is split on the delimiter, its leading tag decides the
//! record type, and the fields are stored under the call sign found at the
//! tag's key position. Empty, short and unknown-tag lines are skipped; a
//! history line with a malformed date is the only line-level failure.

use super::field_parsers::{field, parse_required_date};
use super::stats::IngestStats;
use crate::Result;
use crate::app::models::{HistoryAction, HistoryEvent, classify};
use crate::app::services::record_tables::{RawRecord, RecordTables, RecordTag, ScalarTag};
use crate::constants::{FIELD_DELIMITER, MIN_FIELD_COUNT, hs};
use tracing::trace;

/// What happened to a single input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Line had no content
    Empty,
    /// Line had fewer than the minimum number of fields
    TooShort,
    /// Leading tag is not a known record type
    UnknownTag,
    /// Scalar row stored under a new call sign
    Inserted(ScalarTag),
    /// Scalar row dropped because its call sign was already present
    Duplicate(ScalarTag),
    /// History event appended
    HistoryAppended,
}

/// Builds record tables from input lines, one line at a time
///
/// The builder owns the tables while they are being filled; [`finish`]
/// hands them over once the whole input has been consumed.
///
/// [`finish`]: TableBuilder::finish
#[derive(Debug)]
pub struct TableBuilder {
    tables: RecordTables,
    stats: IngestStats,
    delimiter: char,
    line_number: usize,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new(FIELD_DELIMITER)
    }
}

impl TableBuilder {
    /// Create a builder splitting lines on the given delimiter
    pub fn new(delimiter: char) -> Self {
        Self {
            tables: RecordTables::new(),
            stats: IngestStats::new(),
            delimiter,
            line_number: 0,
        }
    }

    /// Number of lines ingested so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Statistics gathered so far
    pub fn stats(&self) -> &IngestStats {
        &self.stats
    }

    /// Route one raw input line
    ///
    /// Fields are split without trimming and consecutive delimiters produce
    /// empty fields.
    pub fn ingest_line(&mut self, line: &str) -> Result<LineOutcome> {
        self.line_number += 1;
        self.stats.total_lines += 1;

        if line.is_empty() {
            self.stats.empty_lines += 1;
            return Ok(LineOutcome::Empty);
        }

        let fields: RawRecord = line.split(self.delimiter).map(str::to_string).collect();
        self.route(fields)
    }

    fn route(&mut self, fields: RawRecord) -> Result<LineOutcome> {
        if fields.len() < MIN_FIELD_COUNT {
            trace!("Line {}: {} fields, skipping", self.line_number, fields.len());
            self.stats.short_lines += 1;
            return Ok(LineOutcome::TooShort);
        }

        let Some(tag) = RecordTag::parse(&fields[0]) else {
            trace!("Line {}: unknown tag '{}'", self.line_number, fields[0]);
            self.stats.unknown_tags += 1;
            return Ok(LineOutcome::UnknownTag);
        };

        let key = field(&fields, tag.key_position()).to_string();

        match tag {
            RecordTag::Scalar(scalar) => Ok(self.insert_scalar(scalar, key, fields)),
            RecordTag::History => self.append_history(key, &fields),
        }
    }

    fn insert_scalar(&mut self, tag: ScalarTag, key: String, fields: RawRecord) -> LineOutcome {
        if self.tables.insert(tag, key, fields) {
            self.stats.record_inserted(tag);
            LineOutcome::Inserted(tag)
        } else {
            trace!("Line {}: duplicate {} row ignored", self.line_number, tag);
            self.stats.duplicates_ignored += 1;
            LineOutcome::Duplicate(tag)
        }
    }

    fn append_history(&mut self, key: String, fields: &[String]) -> Result<LineOutcome> {
        let date = parse_required_date(field(fields, hs::DATE), self.line_number)?;
        let action = classify::<HistoryAction>(field(fields, hs::ACTION));
        if !action.is_known() {
            trace!(
                "Line {}: unrecognised history action '{}'",
                self.line_number, action.description
            );
        }
        let event = HistoryEvent::new(key.as_str(), field(fields, hs::LICENSE_KEY), date, action);

        self.tables.insert_history(key, event);
        self.stats.history_events += 1;
        Ok(LineOutcome::HistoryAppended)
    }

    /// Hand over the completed tables and statistics
    pub fn finish(self) -> (RecordTables, IngestStats) {
        (self.tables, self.stats)
    }
}

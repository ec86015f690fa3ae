//! Ingestion statistics for ULS downloads
//!
//! Skipped lines are not errors; they are only counted here so a run can
//! report how much of the input was actually used.

use crate::app::services::record_tables::ScalarTag;
use std::collections::BTreeMap;

/// Counts gathered while routing input lines into record tables
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct IngestStats {
    /// Total number of lines read
    pub total_lines: usize,

    /// Lines with no content
    pub empty_lines: usize,

    /// Lines with fewer fields than the minimum
    pub short_lines: usize,

    /// Lines whose tag is not a known record type
    pub unknown_tags: usize,

    /// Scalar rows stored, per record type
    pub records_by_tag: BTreeMap<String, usize>,

    /// Scalar rows dropped because their call sign was already present
    pub duplicates_ignored: usize,

    /// History events appended
    pub history_events: usize,
}

impl IngestStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a stored scalar row
    pub fn record_inserted(&mut self, tag: ScalarTag) {
        *self.records_by_tag.entry(tag.to_string()).or_default() += 1;
    }

    /// Number of stored rows for a record type
    pub fn records_for(&self, tag: ScalarTag) -> usize {
        self.records_by_tag.get(tag.as_str()).copied().unwrap_or(0)
    }

    /// Number of lines that were skipped for any reason
    pub fn lines_skipped(&self) -> usize {
        self.empty_lines + self.short_lines + self.unknown_tags
    }

    /// Number of lines that were routed into a table
    pub fn lines_accepted(&self) -> usize {
        self.records_by_tag.values().sum::<usize>() + self.history_events
    }

    /// Get a summary string of the ingestion
    pub fn summary(&self) -> String {
        format!(
            "Read {} lines: {} records, {} history events, {} duplicates ignored, {} skipped",
            self.total_lines,
            self.records_by_tag.values().sum::<usize>(),
            self.history_events,
            self.duplicates_ignored,
            self.lines_skipped()
        )
    }
}

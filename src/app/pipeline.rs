//! End-to-end processing of one ULS download.
//!
//! Stages run strictly in sequence, each handing its complete result to the
//! next: the whole input is read into record tables, the tables are joined
//! into operator entities, and both reports are written from the entities.

use crate::app::services::entity_joiner::join;
use crate::app::services::report_writer::{write_history_file, write_summary_file};
use crate::app::services::uls_parser::{IngestStats, read_file};
use crate::config::ProcessorConfig;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

/// Outcome of a processing run
#[derive(Debug, Clone, serde::Serialize)]
pub struct RunStats {
    /// Line routing statistics from ingestion
    pub ingest: IngestStats,

    /// Operator entities joined, one per license header
    pub entities: usize,

    /// Summary report rows written
    pub summary_rows: usize,

    /// History report rows written
    pub history_rows: usize,

    /// Path of the summary report
    pub summary_path: PathBuf,

    /// Path of the history report
    pub history_path: PathBuf,

    /// Wall-clock time for the whole run
    pub elapsed: Duration,
}

impl RunStats {
    /// Get a summary string of the run
    pub fn summary(&self) -> String {
        format!(
            "{} entities, {} history rows in {:.2}s",
            self.entities,
            self.history_rows,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Read, join and report one ULS download
///
/// # Errors
/// * `Error::Configuration` if the configuration is invalid
/// * `Error::Report` if the output directory does not exist
/// * `Error::Io` if the input cannot be read or a report cannot be written
/// * `Error::HistoryDate` if a history line carries a malformed date
pub fn process(config: &ProcessorConfig) -> Result<RunStats> {
    let start_time = Instant::now();
    config.validate()?;
    ensure_output_directory(&config.output_prefix)?;

    let (tables, ingest) = read_file(config)?;

    let entities = join(&tables);
    info!("Joined {} operator entities", entities.len());

    let summary_path = config.summary_path();
    let history_path = config.history_path();
    let summary_rows = write_summary_file(&summary_path, &entities)?;
    let history_rows = write_history_file(&history_path, &entities)?;

    let stats = RunStats {
        ingest,
        entities: entities.len(),
        summary_rows,
        history_rows,
        summary_path,
        history_path,
        elapsed: start_time.elapsed(),
    };
    info!("Processing complete: {}", stats.summary());
    Ok(stats)
}

fn ensure_output_directory(prefix: &Path) -> Result<()> {
    match prefix.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => Err(Error::report(format!(
            "Output directory '{}' does not exist",
            dir.display()
        ))),
        _ => Ok(()),
    }
}

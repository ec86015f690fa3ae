//! File and stream ingestion
//!
//! Reads a whole ULS download into record tables before anything else
//! happens. The file handle is owned by the reader for the duration of the
//! call and released on every return path.

use super::router::TableBuilder;
use super::stats::IngestStats;
use crate::app::services::record_tables::RecordTables;
use crate::config::ProcessorConfig;
use crate::constants::PROGRESS_UPDATE_INTERVAL;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Read a ULS download file into record tables
///
/// # Errors
/// * Returns `Error::Io` if the file cannot be opened or read
/// * Returns `Error::HistoryDate` if an `HS` line carries a malformed date
pub fn read_file(config: &ProcessorConfig) -> Result<(RecordTables, IngestStats)> {
    let path = &config.input_path;
    info!("Reading ULS data from {}", path.display());

    let file = File::open(path)
        .map_err(|e| Error::io(format!("Failed to open input file '{}'", path.display()), e))?;

    let progress = config.show_progress.then(create_spinner);
    let start_time = Instant::now();

    let mut builder = TableBuilder::new(config.delimiter);
    let result = ingest_lines(BufReader::new(file), &mut builder, progress.as_ref());

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }
    result?;

    let (tables, stats) = builder.finish();
    if tables.is_empty() {
        warn!("No ULS records found in {}", path.display());
    }
    info!(
        "{} in {:.2}s",
        stats.summary(),
        start_time.elapsed().as_secs_f64()
    );
    Ok((tables, stats))
}

/// Read ULS lines from any buffered source into record tables
pub fn ingest_reader<R: BufRead>(
    reader: R,
    delimiter: char,
) -> Result<(RecordTables, IngestStats)> {
    let mut builder = TableBuilder::new(delimiter);
    ingest_lines(reader, &mut builder, None)?;
    Ok(builder.finish())
}

fn ingest_lines<R: BufRead>(
    mut reader: R,
    builder: &mut TableBuilder,
    progress: Option<&ProgressBar>,
) -> Result<()> {
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).map_err(|e| {
            Error::io(
                format!("Failed to read input line {}", builder.line_number() + 1),
                e,
            )
        })?;
        if read == 0 {
            break;
        }

        builder.ingest_line(&decode_line(&buf))?;

        if let Some(pb) = progress {
            if builder.line_number() as u64 % PROGRESS_UPDATE_INTERVAL == 0 {
                pb.set_message(format!(
                    "{} lines read, {} accepted",
                    builder.line_number(),
                    builder.stats().lines_accepted()
                ));
            }
        }
    }

    debug!("Ingested {} lines", builder.line_number());
    Ok(())
}

/// Strip the line terminator and decode, replacing invalid UTF-8 with U+FFFD
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line)
}

fn create_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) =
        ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message("Reading ULS records...");
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

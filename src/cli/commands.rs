//! Command implementation for the ULS processor CLI
//!
//! This module contains the command execution logic, logging setup and
//! run summary reporting for the CLI interface.

use crate::app::pipeline::{RunStats, process};
use crate::app::services::record_tables::ScalarTag;
use crate::cli::args::Args;
use anyhow::{Context, Result};
use colored::*;
use tracing::debug;

/// Main command runner for the ULS processor
///
/// Returns `Ok(None)` without touching any file when either positional
/// argument is missing.
pub fn run(args: Args) -> Result<Option<RunStats>> {
    let Some(config) = args.to_config() else {
        return Ok(None);
    };

    setup_logging(&args);
    debug!("Command line arguments: {:?}", args);

    let stats = process(&config).with_context(|| {
        format!(
            "Failed to process ULS download '{}'",
            config.input_path.display()
        )
    })?;

    if !args.quiet {
        print_summary(&stats);
    }

    Ok(Some(stats))
}

/// Set up logging based on verbosity settings
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("uls_processor={}", log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    // A subscriber may already be installed when running under a test harness
    if result.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Print the run summary to stdout
fn print_summary(stats: &RunStats) {
    let ingest = &stats.ingest;

    println!("\n{}", "ULS processing complete".bright_green().bold());
    println!(
        "  {} {} ({} accepted, {} skipped, {} duplicates ignored)",
        "Lines read:".bright_cyan(),
        ingest.total_lines.to_string().bright_white().bold(),
        ingest.lines_accepted(),
        ingest.lines_skipped(),
        ingest.duplicates_ignored
    );
    println!(
        "  {} {}",
        "Licenses:".bright_cyan(),
        ingest.records_for(ScalarTag::Header).to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Operators:".bright_cyan(),
        stats.entities.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "History events:".bright_cyan(),
        stats.history_rows.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Summary report:".bright_cyan(),
        stats.summary_path.display()
    );
    println!(
        "  {} {}",
        "History report:".bright_cyan(),
        stats.history_path.display()
    );
    println!(
        "  {} {:.2}s",
        "Time elapsed:".bright_cyan(),
        stats.elapsed.as_secs_f64()
    );
}

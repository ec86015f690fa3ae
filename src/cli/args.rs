//! Command-line argument definitions for the ULS processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::ProcessorConfig;
use crate::constants::{DEFAULT_LOG_LEVEL, FIELD_DELIMITER};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the ULS processor
///
/// Converts an FCC ULS advanced search download into an operator summary
/// report and a license history report.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "uls-processor",
    version,
    about = "Convert FCC ULS advanced search downloads into summary and history CSV reports",
    long_about = "Reads a pipe-delimited FCC Universal Licensing System download, joins the \
                  header, entity, amateur, eligibility and history records of every license \
                  by call sign, and writes <PREFIX>-summary.csv and <PREFIX>-history.csv.\n\n\
                  Running without both positional arguments does nothing."
)]
pub struct Args {
    /// ULS download file to read
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Path and file name prefix for the generated reports
    ///
    /// `club` produces `club-summary.csv` and `club-history.csv`.
    #[arg(value_name = "OUTPUT_PREFIX")]
    pub output_prefix: Option<PathBuf>,

    /// Field delimiter of the input file
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "CHAR",
        default_value_t = FIELD_DELIMITER,
        help = "Field delimiter of the input file"
    )]
    pub delimiter: char,

    /// Show a spinner while reading the input
    #[arg(long = "progress", help = "Show a progress spinner while reading input")]
    pub progress: bool,

    /// Enable verbose logging output
    ///
    /// Use multiple times for increased verbosity: -v (info), -vv (debug), -vvv (trace)
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Also suppresses the run summary.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Get the log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => DEFAULT_LOG_LEVEL,
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show the progress spinner
    pub fn show_progress(&self) -> bool {
        self.progress && !self.quiet
    }

    /// Build the processing configuration, `None` unless both paths are given
    pub fn to_config(&self) -> Option<ProcessorConfig> {
        let input = self.input.as_ref()?;
        let output_prefix = self.output_prefix.as_ref()?;

        Some(
            ProcessorConfig::new(input, output_prefix)
                .with_delimiter(self.delimiter)
                .with_progress(self.show_progress()),
        )
    }
}

//! Configuration management and validation.
//!
//! Provides the processing configuration for a single ULS conversion run:
//! where to read the download from, where the reports go, and how the
//! input is split.

use crate::constants::{FIELD_DELIMITER, HISTORY_FILE_SUFFIX, SUMMARY_FILE_SUFFIX};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for a ULS processing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Path to the ULS advanced search data file
    pub input_path: PathBuf,

    /// Path and file name prefix for the generated reports
    pub output_prefix: PathBuf,

    /// Field delimiter of the input file
    pub delimiter: char,

    /// Show a progress spinner while reading input
    pub show_progress: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::new(),
            output_prefix: PathBuf::new(),
            delimiter: FIELD_DELIMITER,
            show_progress: false,
        }
    }
}

impl ProcessorConfig {
    /// Create a configuration for the given input file and output prefix
    pub fn new(input_path: impl Into<PathBuf>, output_prefix: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_prefix: output_prefix.into(),
            ..Default::default()
        }
    }

    /// Use a different field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable the ingestion progress spinner
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Path of the summary report, `<prefix>-summary.csv`
    pub fn summary_path(&self) -> PathBuf {
        with_suffix(&self.output_prefix, SUMMARY_FILE_SUFFIX)
    }

    /// Path of the history report, `<prefix>-history.csv`
    pub fn history_path(&self) -> PathBuf {
        with_suffix(&self.output_prefix, HISTORY_FILE_SUFFIX)
    }

    /// Validate the configuration before any file is touched
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(Error::configuration("Input path cannot be empty"));
        }

        if self.output_prefix.as_os_str().is_empty() {
            return Err(Error::configuration("Output prefix cannot be empty"));
        }

        if !self.delimiter.is_ascii() {
            return Err(Error::configuration(format!(
                "Delimiter '{}' must be a single ASCII character",
                self.delimiter
            )));
        }

        debug!(
            "Configuration valid: input={}, summary={}, history={}",
            self.input_path.display(),
            self.summary_path().display(),
            self.history_path().display()
        );
        Ok(())
    }
}

/// Append a suffix to the final component of a path prefix
fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut path = prefix.as_os_str().to_owned();
    path.push(suffix);
    PathBuf::from(path)
}

//! ULS Processor Library
//!
//! A Rust library for turning FCC Universal Licensing System (ULS) advanced
//! search downloads into operator summary and license history CSV reports.
//!
//! This library provides tools for:
//! - Routing pipe-delimited ULS records into per-call-sign lookup tables
//! - Classifying radio service, operator class and history action codes
//! - Joining the record tables into one operator entity per license
//! - Writing a call-sign ordered summary report and a date ordered history report

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod pipeline;
    pub mod services {
        pub mod entity_joiner;
        pub mod record_tables;
        pub mod report_writer;
        pub mod uls_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{HistoryEvent, OperatorEntity};
pub use app::pipeline::{RunStats, process};
pub use config::ProcessorConfig;

/// Result type alias for the ULS processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ULS processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Delimited text could not be read or written
    #[error("CSV error: {message}")]
    Csv {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// History record carried a date that is not MM/dd/yyyy
    #[error("Invalid history date '{value}' on line {line}: expected MM/dd/yyyy")]
    HistoryDate { line: usize, value: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Report writing error
    #[error("Report error: {message}")]
    Report { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV error with context
    pub fn csv(message: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            message: message.into(),
            source,
        }
    }

    /// Create a history date error for the given input line
    pub fn history_date(line: usize, value: impl Into<String>) -> Self {
        Self::HistoryDate {
            line,
            value: value.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a report writing error
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Csv {
            message: "CSV processing failed".to_string(),
            source: error,
        }
    }
}

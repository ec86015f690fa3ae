//! Application constants for the ULS processor
//!
//! This module contains the record tags, fixed field positions, date formats,
//! and report headers used throughout the ULS processor application.

// =============================================================================
// Input Format
// =============================================================================

/// Field delimiter used by ULS advanced search downloads
pub const FIELD_DELIMITER: char = '|';

/// Lines with fewer fields than this are skipped without inspection
pub const MIN_FIELD_COUNT: usize = 5;

/// Date format used by every date column in the export (MM/dd/yyyy)
pub const ULS_DATE_FORMAT: &str = "%m/%d/%Y";

/// Record type tags recognised at position 0 of each line
pub mod tags {
    /// License header - primary table, one row per license
    pub const HD: &str = "HD";

    /// Entity (licensee name and address)
    pub const EN: &str = "EN";

    /// License history event
    pub const HS: &str = "HS";

    /// Amateur operator class
    pub const AM: &str = "AM";

    /// Special conditions
    pub const SC: &str = "SC";

    /// Free-form license comments
    pub const CO: &str = "CO";

    /// Eligibility (market/licensee eligibility notes)
    pub const LM: &str = "LM";
}

// =============================================================================
// Field Positions
// =============================================================================

/// Position of the call sign on every scalar record type
pub const CALL_SIGN_POSITION: usize = 4;

/// Field positions within `HD` (license header) records
pub mod hd {
    pub const LICENSE_KEY: usize = 1;
    pub const FREQUENCY: usize = 2;
    pub const RADIO_SERVICE: usize = 6;
    pub const GRANTED: usize = 7;
    pub const EXPIRATION: usize = 8;
    pub const CANCELLED: usize = 9;
    pub const EFFECTIVE: usize = 42;
}

/// Field positions within `EN` (entity) records
pub mod en {
    pub const ORGANIZATION: usize = 7;
    pub const FIRST_NAME: usize = 8;
    pub const MIDDLE_INITIAL: usize = 9;
    pub const LAST_NAME: usize = 10;
    pub const SUFFIX: usize = 11;
    pub const ADDRESS: usize = 15;
}

/// Field positions within `HS` (history) records
///
/// History rows carry the call sign one position earlier than the scalar
/// record types.
pub mod hs {
    pub const LICENSE_KEY: usize = 1;
    pub const CALL_SIGN: usize = 3;
    pub const DATE: usize = 4;
    pub const ACTION: usize = 5;
}

/// Field positions within `AM` (amateur) records
pub mod am {
    pub const OPERATOR_CLASS: usize = 5;
    pub const GROUP: usize = 6;
}

/// Field positions within `LM` (eligibility) records
pub mod lm {
    pub const ELIGIBILITY: usize = 6;
}

// =============================================================================
// Text Normalization
// =============================================================================

/// Name suffix tokens that must survive title casing unchanged
pub const PRESERVED_SUFFIXES: &[&str] = &["II", "III"];

/// Title casing turns ordinal street numbers like "10TH" into "10Th"
pub const ORDINAL_ARTIFACT: &str = "Th ";

/// Replacement for [`ORDINAL_ARTIFACT`] in addresses
pub const ORDINAL_REPLACEMENT: &str = "th ";

// =============================================================================
// Report Output
// =============================================================================

/// Report date format (MM/dd/yyyy)
pub const REPORT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Separator between entries of the summary notes column
pub const NOTES_SEPARATOR: &str = ", ";

/// Summary report header columns
pub const SUMMARY_HEADER: &[&str] = &[
    "Call Sign",
    "Frequency",
    "Service",
    "Organization",
    "Contact",
    "Address",
    "Granted",
    "Effective",
    "Expires",
    "Cancelled",
    "Notes",
];

/// History report header columns
pub const HISTORY_HEADER: &[&str] = &["Date", "Call Sign", "Organization", "Contact", "Action"];

/// Suffix appended to the output prefix for the summary report
pub const SUMMARY_FILE_SUFFIX: &str = "-summary.csv";

/// Suffix appended to the output prefix for the history report
pub const HISTORY_FILE_SUFFIX: &str = "-history.csv";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when no verbosity flags are given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Number of lines between progress spinner updates
pub const PROGRESS_UPDATE_INTERVAL: u64 = 10_000;

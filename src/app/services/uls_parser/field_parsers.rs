//! Field parsing utilities for ULS records
//!
//! Records are addressed by position. Positions beyond the end of a short
//! record read as empty rather than failing, so a truncated secondary row
//! simply contributes fewer fields.

use crate::constants::ULS_DATE_FORMAT;
use crate::{Error, Result};
use chrono::NaiveDate;

/// Get a field by position, empty when the record is too short
pub fn field(record: &[String], position: usize) -> &str {
    record.get(position).map(String::as_str).unwrap_or("")
}

/// Get a field by position as owned text, `None` when missing or blank
pub fn optional_text(record: &[String], position: usize) -> Option<String> {
    let value = field(record, position);
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parse an exact `MM/dd/yyyy` date
///
/// Two-digit month and day and a four-digit year are required; chrono alone
/// would also accept unpadded values.
pub fn parse_uls_date(value: &str) -> Option<NaiveDate> {
    if !has_date_shape(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, ULS_DATE_FORMAT).ok()
}

/// Parse a required history date, failing with the input line number
pub fn parse_required_date(value: &str, line: usize) -> Result<NaiveDate> {
    parse_uls_date(value).ok_or_else(|| Error::history_date(line, value))
}

/// Parse an optional date field; blank, malformed or missing yields `None`
pub fn parse_optional_date(record: &[String], position: usize) -> Option<NaiveDate> {
    let value = field(record, position);
    if value.is_empty() {
        return None;
    }
    parse_uls_date(value)
}

fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[2] == b'/'
        && bytes[5] == b'/'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit())
}

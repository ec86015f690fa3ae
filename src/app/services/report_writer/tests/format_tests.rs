//! Tests for report field formatting helpers

use super::*;
use crate::app::services::report_writer::{format_date, quoted, strip_commas};

#[test]
fn test_format_date() {
    assert_eq!(format_date(Some(date(2015, 1, 1))), "01/01/2015");
    assert_eq!(format_date(Some(date(2021, 12, 31))), "12/31/2021");
    assert_eq!(format_date(None), "");
}

#[test]
fn test_quoted() {
    assert_eq!(quoted(""), "\"\"");
    assert_eq!(quoted("Arrl Inc"), "\"Arrl Inc\"");
}

#[test]
fn test_strip_commas() {
    assert_eq!(strip_commas("Doe, John"), "Doe  John");
    assert_eq!(strip_commas("No Commas"), "No Commas");
}

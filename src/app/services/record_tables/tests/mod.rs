//! Shared test utilities and fixtures for record table tests

use crate::app::models::{HistoryAction, HistoryEvent, classify};
use chrono::NaiveDate;


/// Build a raw record from string slices
pub fn raw(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|s| s.to_string()).collect()
}

/// Create a history event on the given date
pub fn create_test_event(call_sign: &str, year: i32, month: u32, day: u32) -> HistoryEvent {
    HistoryEvent::new(
        call_sign,
        "L1",
        NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        classify::<HistoryAction>("LIMOD"),
    )
}

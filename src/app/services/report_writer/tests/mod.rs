//! Shared test utilities and fixtures for report writer tests

pub mod format_tests;
pub mod history_tests;
pub mod summary_tests;

use crate::app::models::{HistoryAction, HistoryEvent, OperatorEntity, classify};
use chrono::NaiveDate;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Create an entity with a name and amateur service fields
pub fn create_test_entity(call_sign: &str, first: &str, last: &str) -> OperatorEntity {
    OperatorEntity {
        frequency: "146.52".to_string(),
        radio_service_description: "Amateur".to_string(),
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        ..OperatorEntity::new(call_sign)
    }
}

/// Create a history event for a call sign
pub fn create_test_event(call_sign: &str, on: NaiveDate, action: &str) -> HistoryEvent {
    HistoryEvent::new(call_sign, "3001", on, classify::<HistoryAction>(action))
}

/// Render a report into a string
pub fn render<F>(write: F, entities: &[OperatorEntity]) -> (usize, String)
where
    F: Fn(&mut Vec<u8>, &[OperatorEntity]) -> crate::Result<usize>,
{
    let mut output = Vec::new();
    let rows = write(&mut output, entities).unwrap();
    (rows, String::from_utf8(output).unwrap())
}

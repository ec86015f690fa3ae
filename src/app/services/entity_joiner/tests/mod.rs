//! Shared test utilities and fixtures for entity joiner tests


use crate::app::models::{HistoryAction, HistoryEvent, classify};
use crate::app::services::record_tables::{RecordTables, ScalarTag};
use chrono::NaiveDate;

/// Build a record of `len` empty fields with the given positions set
pub fn record(tag: &str, call_sign: &str, len: usize, values: &[(usize, &str)]) -> Vec<String> {
    let mut fields = vec![String::new(); len];
    fields[0] = tag.to_string();
    fields[4] = call_sign.to_string();
    for (position, value) in values {
        fields[*position] = value.to_string();
    }
    fields
}

/// Insert an `HD` row with the given service code and dates
pub fn add_header(
    tables: &mut RecordTables,
    call_sign: &str,
    service: &str,
    granted: &str,
    expires: &str,
) {
    let fields = record(
        "HD",
        call_sign,
        43,
        &[
            (1, "3001"),
            (2, "146.52"),
            (6, service),
            (7, granted),
            (8, expires),
        ],
    );
    tables.insert(ScalarTag::Header, call_sign, fields);
}

/// Insert an `EN` row with the given name parts and address
pub fn add_entity(
    tables: &mut RecordTables,
    call_sign: &str,
    organization: &str,
    name: [&str; 4],
    address: &str,
) {
    let fields = record(
        "EN",
        call_sign,
        16,
        &[
            (7, organization),
            (8, name[0]),
            (9, name[1]),
            (10, name[2]),
            (11, name[3]),
            (15, address),
        ],
    );
    tables.insert(ScalarTag::Entity, call_sign, fields);
}

/// Create a history event with the given date and action code
pub fn create_test_event(call_sign: &str, y: i32, m: u32, d: u32, action: &str) -> HistoryEvent {
    HistoryEvent::new(
        call_sign,
        "3001",
        NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        classify::<HistoryAction>(action),
    )
}

//! Tests for the history report

use super::*;
use crate::app::services::report_writer::{history_rows, write_history, write_history_file};
use std::fs;
use tempfile::TempDir;

fn render_history(entities: &[OperatorEntity]) -> (usize, String) {
    render(|out, e| write_history(out, e), entities)
}

fn with_history(mut entity: OperatorEntity, events: &[(NaiveDate, &str)]) -> OperatorEntity {
    entity.history = events
        .iter()
        .map(|(on, action)| create_test_event(&entity.call_sign, *on, action))
        .collect();
    entity
}

#[test]
fn test_header_only_without_history() {
    let (rows, output) = render_history(&[create_test_entity("KB1ABC", "John", "Doe")]);

    assert_eq!(rows, 0);
    assert_eq!(output, "Date,Call Sign,Organization,Contact,Action\n");
}

#[test]
fn test_row_layout() {
    let entity = with_history(
        OperatorEntity {
            organization: Some("Arrl Inc".to_string()),
            ..create_test_entity("W1AW", "Hiram", "Maxim")
        },
        &[(date(2020, 3, 1), "LIREN")],
    );

    let (rows, output) = render_history(&[entity]);
    assert_eq!(rows, 1);
    assert_eq!(
        output.lines().nth(1),
        Some("03/01/2020,W1AW,\"Arrl Inc\",Hiram Maxim,License Renewed")
    );
}

#[test]
fn test_events_ordered_by_date_across_entities() {
    let entities = vec![
        with_history(
            create_test_entity("KB1ABC", "John", "Doe"),
            &[(date(2019, 1, 1), "LIISS"), (date(2021, 6, 15), "LIREN")],
        ),
        with_history(
            create_test_entity("AA1XYZ", "Jane", "Roe"),
            &[(date(2020, 3, 1), "LIMOD")],
        ),
    ];

    let dates: Vec<NaiveDate> = history_rows(&entities)
        .into_iter()
        .map(|(_, event)| event.date)
        .collect();

    assert_eq!(dates, vec![date(2019, 1, 1), date(2020, 3, 1), date(2021, 6, 15)]);
}

#[test]
fn test_same_day_events_ordered_by_call_sign() {
    let same_day = date(2020, 3, 1);
    let entities = vec![
        with_history(create_test_entity("W5DEF", "Sam", "Poe"), &[(same_day, "LIREN")]),
        with_history(create_test_entity("AA1XYZ", "Jane", "Roe"), &[(same_day, "LIREN")]),
    ];

    let call_signs: Vec<&str> = history_rows(&entities)
        .into_iter()
        .map(|(entity, _)| entity.call_sign.as_str())
        .collect();

    assert_eq!(call_signs, vec!["AA1XYZ", "W5DEF"]);
}

#[test]
fn test_unknown_action_written_as_raw_code() {
    let entity = with_history(
        create_test_entity("KB1ABC", "John", "Doe"),
        &[(date(2020, 3, 1), "NEWCODE")],
    );

    let (_, output) = render_history(&[entity]);
    assert!(output.lines().nth(1).unwrap().ends_with(",NEWCODE"));
}

#[test]
fn test_write_history_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("club-history.csv");
    let entity = with_history(
        create_test_entity("KB1ABC", "John", "Doe"),
        &[(date(2019, 1, 1), "LIISS"), (date(2021, 6, 15), "LIREN")],
    );

    let rows = write_history_file(&path, &[entity]).unwrap();
    let content = fs::read_to_string(&path).unwrap();

    assert_eq!(rows, 2);
    assert_eq!(
        content,
        "Date,Call Sign,Organization,Contact,Action\n\
         01/01/2019,KB1ABC,\"\",John Doe,License Issued\n\
         06/15/2021,KB1ABC,\"\",John Doe,License Renewed\n"
    );
}

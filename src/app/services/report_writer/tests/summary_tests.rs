//! Tests for the summary report

use super::*;
use crate::app::services::report_writer::{summary_row, write_summary, write_summary_file};
use std::fs;
use tempfile::TempDir;

fn render_summary(entities: &[OperatorEntity]) -> (usize, String) {
    render(|out, e| write_summary(out, e), entities)
}

#[test]
fn test_header_only_for_no_entities() {
    let (rows, output) = render_summary(&[]);

    assert_eq!(rows, 0);
    assert_eq!(
        output,
        "Call Sign,Frequency,Service,Organization,Contact,Address,Granted,Effective,Expires,Cancelled,Notes\n"
    );
}

#[test]
fn test_rows_ordered_by_call_sign() {
    let entities = vec![
        create_test_entity("KB1ABC", "John", "Doe"),
        create_test_entity("AA1XYZ", "Jane", "Roe"),
        create_test_entity("W5DEF", "Sam", "Poe"),
    ];

    let (rows, output) = render_summary(&entities);
    let call_signs: Vec<&str> = output
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap())
        .collect();

    assert_eq!(rows, 3);
    assert_eq!(call_signs, vec!["AA1XYZ", "KB1ABC", "W5DEF"]);
}

#[test]
fn test_full_row_layout() {
    let entity = OperatorEntity {
        suffix: Some("Jr".to_string()),
        middle_initial: Some("J".to_string()),
        address: Some("123 Main St".to_string()),
        granted: Some(date(2015, 1, 1)),
        expiration: Some(date(2025, 1, 1)),
        ..create_test_entity("KB1ABC", "John", "Doe")
    };

    assert_eq!(
        summary_row(&entity).join(","),
        "KB1ABC,146.52,Amateur,\"\",John J Doe Jr,123 Main St,01/01/2015,,01/01/2025,,\"\""
    );
}

#[test]
fn test_organization_and_notes_are_quoted() {
    let entity = OperatorEntity {
        organization: Some("Arrl Inc".to_string()),
        eligibility: Some("Club".to_string()),
        operator_class_description: Some("General".to_string()),
        group: Some("B".to_string()),
        ..create_test_entity("W1AW", "", "")
    };

    let row = summary_row(&entity);
    assert_eq!(row[3], "\"Arrl Inc\"");
    assert_eq!(row[10], "\"Club, General, Group B\"");
}

#[test]
fn test_commas_removed_from_name_and_address() {
    let entity = OperatorEntity {
        address: Some("Suite 5, 1 Elm St".to_string()),
        ..create_test_entity("KB1ABC", "Doe,", "John")
    };

    let row = summary_row(&entity);
    assert!(!row[4].contains(','));
    assert_eq!(row[4], "Doe  John");
    assert_eq!(row[5], "Suite 5  1 Elm St");
}

#[test]
fn test_all_dates_formatted() {
    let entity = OperatorEntity {
        granted: Some(date(2015, 1, 2)),
        effective: Some(date(2016, 3, 4)),
        expiration: Some(date(2025, 5, 6)),
        cancelled: Some(date(2020, 12, 31)),
        ..OperatorEntity::new("KB1ABC")
    };

    let row = summary_row(&entity);
    assert_eq!(&row[6..10], &["01/02/2015", "03/04/2016", "05/06/2025", "12/31/2020"]);
}

#[test]
fn test_every_row_has_header_width() {
    let entities = vec![
        OperatorEntity::new("AA1XYZ"),
        create_test_entity("KB1ABC", "John", "Doe"),
    ];

    let (_, output) = render_summary(&entities);
    for line in output.lines() {
        assert_eq!(line.split(',').count(), 11, "line: {line}");
    }
}

#[test]
fn test_write_summary_file_replaces_existing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("club-summary.csv");
    fs::write(&path, "stale content\nmore stale content\n").unwrap();

    let rows = write_summary_file(&path, &[create_test_entity("KB1ABC", "John", "Doe")]).unwrap();
    let content = fs::read_to_string(&path).unwrap();

    assert_eq!(rows, 1);
    assert!(content.starts_with("Call Sign,"));
    assert!(!content.contains("stale"));
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_write_summary_file_into_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("club-summary.csv");

    let result = write_summary_file(&path, &[]);
    assert!(matches!(result, Err(crate::Error::Io { .. })));
}

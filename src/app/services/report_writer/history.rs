//! History report: one row per license history event

use super::{create_report_file, finish, format_date, quoted, report_writer, strip_commas, write_row};
use crate::Result;
use crate::app::models::{HistoryEvent, OperatorEntity};
use crate::constants::HISTORY_HEADER;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Flatten every entity's history into date order
///
/// Entities are visited in call sign order and the sort is stable, so events
/// on the same date are ordered by call sign, then by their position in the
/// entity's own history.
pub fn history_rows(entities: &[OperatorEntity]) -> Vec<(&OperatorEntity, &HistoryEvent)> {
    let mut ordered: Vec<&OperatorEntity> = entities.iter().collect();
    ordered.sort_by(|a, b| a.call_sign.cmp(&b.call_sign));

    let mut rows: Vec<(&OperatorEntity, &HistoryEvent)> = ordered
        .into_iter()
        .flat_map(|entity| entity.history.iter().map(move |event| (entity, event)))
        .collect();
    rows.sort_by_key(|(_, event)| event.date);
    rows
}

fn history_row(entity: &OperatorEntity, event: &HistoryEvent) -> Vec<String> {
    vec![
        format_date(Some(event.date)),
        entity.call_sign.clone(),
        quoted(entity.organization.as_deref().unwrap_or("")),
        strip_commas(&entity.full_name()),
        event.action_description.clone(),
    ]
}

/// Write the history report, events ordered by date
///
/// Returns the number of data rows written.
pub fn write_history<W: Write>(output: W, entities: &[OperatorEntity]) -> Result<usize> {
    let rows = history_rows(entities);

    let mut writer = report_writer(output);
    let header: Vec<String> = HISTORY_HEADER.iter().map(|h| h.to_string()).collect();
    write_row(&mut writer, &header, "history", "header")?;

    for (entity, event) in &rows {
        write_row(&mut writer, &history_row(entity, event), "history", &entity.call_sign)?;
    }

    finish(writer, "history")?;
    debug!("Wrote {} history rows", rows.len());
    Ok(rows.len())
}

/// Write the history report to a file, replacing any existing file
pub fn write_history_file(path: &Path, entities: &[OperatorEntity]) -> Result<usize> {
    info!("Writing history report to {}", path.display());
    let file = create_report_file(path)?;
    write_history(file, entities)
}

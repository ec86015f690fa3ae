//! Summary report: one row per operator entity

use super::{create_report_file, finish, format_date, quoted, report_writer, strip_commas, write_row};
use crate::Result;
use crate::app::models::OperatorEntity;
use crate::constants::SUMMARY_HEADER;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Build the summary row for one entity
pub fn summary_row(entity: &OperatorEntity) -> Vec<String> {
    vec![
        entity.call_sign.clone(),
        entity.frequency.clone(),
        entity.radio_service_description.clone(),
        quoted(entity.organization.as_deref().unwrap_or("")),
        strip_commas(&entity.full_name()),
        strip_commas(entity.address.as_deref().unwrap_or("")),
        format_date(entity.granted),
        format_date(entity.effective),
        format_date(entity.expiration),
        format_date(entity.cancelled),
        quoted(&entity.notes()),
    ]
}

/// Write the summary report, entities ordered by call sign
///
/// Returns the number of data rows written.
pub fn write_summary<W: Write>(output: W, entities: &[OperatorEntity]) -> Result<usize> {
    let mut ordered: Vec<&OperatorEntity> = entities.iter().collect();
    ordered.sort_by(|a, b| a.call_sign.cmp(&b.call_sign));

    let mut writer = report_writer(output);
    let header: Vec<String> = SUMMARY_HEADER.iter().map(|h| h.to_string()).collect();
    write_row(&mut writer, &header, "summary", "header")?;

    for entity in &ordered {
        write_row(&mut writer, &summary_row(entity), "summary", &entity.call_sign)?;
    }

    finish(writer, "summary")?;
    debug!("Wrote {} summary rows", ordered.len());
    Ok(ordered.len())
}

/// Write the summary report to a file, replacing any existing file
pub fn write_summary_file(path: &Path, entities: &[OperatorEntity]) -> Result<usize> {
    info!("Writing summary report to {}", path.display());
    let file = create_report_file(path)?;
    write_summary(file, entities)
}

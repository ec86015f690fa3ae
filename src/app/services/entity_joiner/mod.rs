//! Entity joining across ULS record tables
//!
//! Every call sign in the `HD` table becomes exactly one [`OperatorEntity`].
//! The secondary tables are consulted by call sign and each one that has a
//! row contributes its fields; a missing row leaves those fields unset.
//!
//! ## Architecture
//!
//! - [`join`] - Builds one entity per license header
//! - [`normalize`] - Title casing for names and addresses

pub mod normalize;

#[cfg(test)]
pub mod tests;

use crate::app::models::{HistoryEvent, OperatorClass, OperatorEntity, RadioService, classify};
use crate::app::services::record_tables::{RecordTables, ScalarTag};
use crate::app::services::uls_parser::field_parsers::{field, optional_text, parse_optional_date};
use crate::constants::{am, en, hd, lm};
use tracing::debug;

pub use normalize::{normalize_address, title_case};

/// Join the record tables into one entity per license header
///
/// The returned entities are in no particular order; reports impose their
/// own ordering.
pub fn join(tables: &RecordTables) -> Vec<OperatorEntity> {
    let mut entities = Vec::with_capacity(tables.len(ScalarTag::Header));
    let mut header_only = 0usize;
    let mut with_history = 0usize;

    for call_sign in tables.keys(ScalarTag::Header) {
        let entity = join_entity(tables, call_sign);

        if !entity.has_secondary_data() {
            header_only += 1;
        }
        if !entity.history.is_empty() {
            with_history += 1;
        }

        entities.push(entity);
    }

    debug!(
        "Joined {} entities ({} header only, {} with history)",
        entities.len(),
        header_only,
        with_history
    );

    let orphans = tables.orphan_history_count();
    if orphans > 0 {
        debug!("{} call signs have history but no license header", orphans);
    }

    entities
}

/// Build the entity for one call sign present in the `HD` table
pub fn join_entity(tables: &RecordTables, call_sign: &str) -> OperatorEntity {
    let mut entity = OperatorEntity::new(call_sign);

    if let Some(header) = tables.lookup(ScalarTag::Header, call_sign) {
        let service = classify::<RadioService>(field(header, hd::RADIO_SERVICE));
        entity.radio_service = service.code;
        entity.radio_service_description = service.description;

        entity.license_key = field(header, hd::LICENSE_KEY).to_string();
        entity.frequency = field(header, hd::FREQUENCY).to_string();

        entity.granted = parse_optional_date(header, hd::GRANTED);
        entity.expiration = parse_optional_date(header, hd::EXPIRATION);
        entity.cancelled = parse_optional_date(header, hd::CANCELLED);
        entity.effective = parse_optional_date(header, hd::EFFECTIVE);
    }

    if let Some(record) = tables.lookup(ScalarTag::Entity, call_sign) {
        entity.organization = title_case(field(record, en::ORGANIZATION));
        entity.first_name = title_case(field(record, en::FIRST_NAME));
        entity.middle_initial = title_case(field(record, en::MIDDLE_INITIAL));
        entity.last_name = title_case(field(record, en::LAST_NAME));
        entity.suffix = title_case(field(record, en::SUFFIX));
        entity.address = normalize_address(field(record, en::ADDRESS));
    }

    if let Some(record) = tables.lookup(ScalarTag::Amateur, call_sign) {
        let class = classify::<OperatorClass>(field(record, am::OPERATOR_CLASS));
        entity.operator_class = class.code;
        entity.operator_class_description = Some(class.description);
        entity.group = optional_text(record, am::GROUP);
    }

    if let Some(record) = tables.lookup(ScalarTag::Eligibility, call_sign) {
        entity.eligibility = optional_text(record, lm::ELIGIBILITY);
    }

    if let Some(events) = tables.history(call_sign) {
        entity.history = sorted_history(events);
    }

    entity
}

/// History events ordered by date; same-day events keep input order
fn sorted_history(events: &[HistoryEvent]) -> Vec<HistoryEvent> {
    let mut history = events.to_vec();
    history.sort_by_key(|event| event.date);
    history
}

//! Data models for ULS processing
//!
//! This module contains the core data structures for representing licensed
//! operators and their license history, as reconstructed from the record
//! types of a ULS advanced search download.

pub mod codes;

use crate::constants::NOTES_SEPARATOR;
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub use codes::{Classification, CodeDomain, HistoryAction, OperatorClass, RadioService, classify};

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s{2,}").unwrap_or_else(|e| panic!("invalid whitespace pattern: {e}"))
});

// =============================================================================
// History Event
// =============================================================================

/// A single dated action on a license, taken from an `HS` record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEvent {
    /// Call sign the event belongs to
    pub call_sign: String,

    /// Unique system identifier of the license
    pub license_key: String,

    /// Date the action was recorded
    pub date: NaiveDate,

    /// Classified action code
    pub action: HistoryAction,

    /// Human-readable action, or the raw code when it is not recognised
    pub action_description: String,
}

impl HistoryEvent {
    /// Create a history event from an already classified action
    pub fn new(
        call_sign: impl Into<String>,
        license_key: impl Into<String>,
        date: NaiveDate,
        action: Classification<HistoryAction>,
    ) -> Self {
        Self {
            call_sign: call_sign.into(),
            license_key: license_key.into(),
            date,
            action: action.code,
            action_description: action.description,
        }
    }
}

// =============================================================================
// Operator Entity
// =============================================================================

/// One licensed operator, joined from every record type sharing its call sign
///
/// Only the `HD` fields are guaranteed; everything sourced from a secondary
/// record type stays `None` when that record type had no row for the call sign.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatorEntity {
    pub call_sign: String,
    pub license_key: String,
    pub frequency: String,

    pub radio_service: RadioService,
    pub radio_service_description: String,

    pub operator_class: OperatorClass,
    pub operator_class_description: Option<String>,
    pub group: Option<String>,

    pub organization: Option<String>,
    pub first_name: Option<String>,
    pub middle_initial: Option<String>,
    pub last_name: Option<String>,
    pub suffix: Option<String>,
    pub address: Option<String>,

    pub granted: Option<NaiveDate>,
    pub effective: Option<NaiveDate>,
    pub expiration: Option<NaiveDate>,
    pub cancelled: Option<NaiveDate>,

    pub eligibility: Option<String>,

    /// License history sorted by date, oldest first
    pub history: Vec<HistoryEvent>,
}

impl OperatorEntity {
    /// Create an entity carrying only its call sign
    pub fn new(call_sign: impl Into<String>) -> Self {
        Self {
            call_sign: call_sign.into(),
            ..Default::default()
        }
    }

    /// First, middle, last name and suffix joined by single spaces
    pub fn full_name(&self) -> String {
        let joined = [
            &self.first_name,
            &self.middle_initial,
            &self.last_name,
            &self.suffix,
        ]
        .iter()
        .map(|part| part.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ");

        WHITESPACE_RUN.replace_all(joined.trim(), " ").into_owned()
    }

    /// Eligibility, operator class and group, each only when non-blank
    pub fn notes(&self) -> String {
        let mut notes: Vec<String> = Vec::new();

        if let Some(eligibility) = non_blank(&self.eligibility) {
            notes.push(eligibility.to_string());
        }
        if let Some(class) = non_blank(&self.operator_class_description) {
            notes.push(class.to_string());
        }
        if let Some(group) = non_blank(&self.group) {
            notes.push(format!("Group {}", group));
        }

        notes.join(NOTES_SEPARATOR)
    }

    /// Whether any secondary record type contributed to this entity
    pub fn has_secondary_data(&self) -> bool {
        self.organization.is_some()
            || self.first_name.is_some()
            || self.last_name.is_some()
            || self.address.is_some()
            || self.operator_class_description.is_some()
            || self.group.is_some()
            || self.eligibility.is_some()
            || !self.history.is_empty()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

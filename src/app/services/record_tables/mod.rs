//! Per-call-sign record tables for O(1) lookups during the join
//!
//! Every recognised record type in a ULS download gets its own table keyed by
//! call sign. The six scalar record types keep the first row seen for each
//! call sign; later rows for the same call sign are dropped. History rows are
//! appended to a per-call-sign list in input order.

use crate::app::models::HistoryEvent;
use crate::constants::{CALL_SIGN_POSITION, hs, tags};
use std::collections::HashMap;
use std::fmt;

#[cfg(test)]
pub mod tests;

/// The raw fields of one input line, addressed by position
pub type RawRecord = Vec<String>;

/// Record types stored as one row per call sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScalarTag {
    /// `HD` license header, the primary table
    Header,
    /// `EN` licensee name and address
    Entity,
    /// `AM` amateur operator class
    Amateur,
    /// `SC` special conditions
    SpecialCondition,
    /// `CO` license comments
    Comment,
    /// `LM` eligibility
    Eligibility,
}

impl ScalarTag {
    /// All scalar record types in input-format order
    pub const ALL: [ScalarTag; 6] = [
        ScalarTag::Header,
        ScalarTag::Entity,
        ScalarTag::Amateur,
        ScalarTag::SpecialCondition,
        ScalarTag::Comment,
        ScalarTag::Eligibility,
    ];

    /// Two-character tag as it appears in the input
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarTag::Header => tags::HD,
            ScalarTag::Entity => tags::EN,
            ScalarTag::Amateur => tags::AM,
            ScalarTag::SpecialCondition => tags::SC,
            ScalarTag::Comment => tags::CO,
            ScalarTag::Eligibility => tags::LM,
        }
    }
}

/// Record type of an input line, decided by its leading tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordTag {
    Scalar(ScalarTag),
    History,
}

impl RecordTag {
    /// Parse a leading tag; unknown tags yield `None`
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            tags::HD => Some(RecordTag::Scalar(ScalarTag::Header)),
            tags::EN => Some(RecordTag::Scalar(ScalarTag::Entity)),
            tags::AM => Some(RecordTag::Scalar(ScalarTag::Amateur)),
            tags::SC => Some(RecordTag::Scalar(ScalarTag::SpecialCondition)),
            tags::CO => Some(RecordTag::Scalar(ScalarTag::Comment)),
            tags::LM => Some(RecordTag::Scalar(ScalarTag::Eligibility)),
            tags::HS => Some(RecordTag::History),
            _ => None,
        }
    }

    /// Position of the call sign for this record type
    pub fn key_position(self) -> usize {
        match self {
            RecordTag::Scalar(_) => CALL_SIGN_POSITION,
            RecordTag::History => hs::CALL_SIGN,
        }
    }

    /// Two-character tag as it appears in the input
    pub fn as_str(self) -> &'static str {
        match self {
            RecordTag::Scalar(tag) => tag.as_str(),
            RecordTag::History => tags::HS,
        }
    }
}

impl fmt::Display for ScalarTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RecordTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup tables built from one ULS download
///
/// Tables are filled once during ingestion and only read afterwards. The
/// join takes them by shared reference, so no reader sees a table mid-build.
#[derive(Debug, Clone, Default)]
pub struct RecordTables {
    /// Scalar rows indexed by record type, then call sign
    scalar: HashMap<ScalarTag, HashMap<String, RawRecord>>,

    /// History events indexed by call sign, in input order
    history: HashMap<String, Vec<HistoryEvent>>,
}

impl RecordTables {
    /// Create an empty set of tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a scalar row unless the call sign is already present
    ///
    /// Returns `true` when the row was stored. The first row for a call sign
    /// wins; duplicates are neither merged nor overwritten.
    pub fn insert(&mut self, tag: ScalarTag, key: impl Into<String>, fields: RawRecord) -> bool {
        let table = self.scalar.entry(tag).or_default();
        match table.entry(key.into()) {
            std::collections::hash_map::Entry::Vacant(e) => {
                e.insert(fields);
                true
            }
            std::collections::hash_map::Entry::Occupied(_) => false,
        }
    }

    /// Append a history event for a call sign
    pub fn insert_history(&mut self, key: impl Into<String>, event: HistoryEvent) {
        self.history.entry(key.into()).or_default().push(event);
    }

    /// Get the row stored for a call sign
    pub fn lookup(&self, tag: ScalarTag, key: &str) -> Option<&RawRecord> {
        self.scalar.get(&tag).and_then(|table| table.get(key))
    }

    /// Check whether a record type has a row for a call sign
    pub fn contains(&self, tag: ScalarTag, key: &str) -> bool {
        self.lookup(tag, key).is_some()
    }

    /// History events for a call sign, in input order
    pub fn history(&self, key: &str) -> Option<&[HistoryEvent]> {
        self.history.get(key).map(Vec::as_slice)
    }

    /// Call signs present in a scalar table, in no particular order
    pub fn keys(&self, tag: ScalarTag) -> impl Iterator<Item = &str> {
        self.scalar
            .get(&tag)
            .into_iter()
            .flat_map(|table| table.keys().map(String::as_str))
    }

    /// Number of call signs in a scalar table
    pub fn len(&self, tag: ScalarTag) -> usize {
        self.scalar.get(&tag).map_or(0, HashMap::len)
    }

    /// Total number of history events across all call signs
    pub fn history_event_count(&self) -> usize {
        self.history.values().map(Vec::len).sum()
    }

    /// Number of call signs with history but no license header
    pub fn orphan_history_count(&self) -> usize {
        self.history
            .keys()
            .filter(|key| !self.contains(ScalarTag::Header, key))
            .count()
    }

    /// Check whether nothing has been ingested
    pub fn is_empty(&self) -> bool {
        self.scalar.values().all(HashMap::is_empty) && self.history.is_empty()
    }
}

//! ULS advanced search download parser
//!
//! This module turns the pipe-delimited lines of a ULS download into the
//! per-call-sign [`RecordTables`](crate::app::services::record_tables::RecordTables)
//! consumed by the entity joiner.
//!
//! ## Architecture
//!
//! - [`router`] - Line splitting, tag dispatch and table insertion
//! - [`field_parsers`] - Positional field access and date parsing
//! - [`reader`] - File and stream ingestion with optional progress display
//! - [`stats`] - Ingestion statistics
//!
//! ## Usage
//!
//! ```rust
//! use uls_processor::app::services::uls_parser::TableBuilder;
//! use uls_processor::app::services::record_tables::ScalarTag;
//!
//! # fn example() -> uls_processor::Result<()> {
//! let mut builder = TableBuilder::new('|');
//! builder.ingest_line("HD|3001|146.52||KB1ABC||HA|01/01/2015|01/01/2025|")?;
//! builder.ingest_line("HS|3001||KB1ABC|01/01/2015|LIISS")?;
//!
//! let (tables, stats) = builder.finish();
//! assert!(tables.contains(ScalarTag::Header, "KB1ABC"));
//! assert_eq!(stats.history_events, 1);
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod reader;
pub mod router;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use reader::{ingest_reader, read_file};
pub use router::{LineOutcome, TableBuilder};
pub use stats::IngestStats;

//! Parser for RCH simulation output files
//!
//! RCH files carry a free-form metadata block (`key: value` lines), a
//! whitespace-delimited column header line, and a fixed-column time-series
//! block delimited by `<BeginTimeSerie>`/`<EndTimeSerie>` markers. This
//! service converts one file's text into structured records.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration and structure discovery
//! - [`header`] - Column token normalization and positional disambiguation
//! - [`record_parser`] - Individual data row processing
//! - [`timestamp`] - Timestamp synthesis from split date/time columns
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use rch_processor::app::services::rch_parser::RchParser;
//!
//! # fn example() -> rch_processor::Result<()> {
//! let content = "Name: Test\nyy mm dd hh mm ss flow\n<BeginTimeSerie>\n\
//!                2020 6 15 13 5 30.7 12.5\n<EndTimeSerie>\n";
//!
//! let parser = RchParser::new();
//! let outcome = parser.parse(content, "test.rch")?;
//!
//! println!("Parsed {} of {} rows",
//!          outcome.stats.rows_parsed,
//!          outcome.stats.total_rows);
//! # Ok(())
//! # }
//! ```

pub mod header;
pub mod parser;
pub mod record_parser;
pub mod stats;
pub mod timestamp;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::RchParser;
pub use record_parser::RowError;
pub use stats::{ParseOutcome, ParseStats};

//! Core RCH parser implementation
//!
//! This module provides the main parser orchestration: structure discovery
//! over the header block and two-pass conversion of the data block into
//! time-series entries.

use tracing::{debug, warn};

use super::header::{normalize_metadata_key, process_headers};
use super::record_parser::parse_data_row;
use super::stats::{ParseOutcome, ParseStats};
use crate::app::models::ParsedRch;
use crate::constants::{BEGIN_TIME_SERIE, END_TIME_SERIE};
use crate::{Error, Result};

/// Parser for RCH simulation output files
///
/// The parser is a pure function over the supplied text: it performs no I/O,
/// holds no state between calls, and returns a freshly allocated result per
/// call, so one instance can serve any number of threads.
///
/// Failure semantics follow the format's structure: a missing begin marker or
/// header line aborts the parse, while per-row anomalies are absorbed: rows
/// with the wrong column count are dropped, rows with unusable date/time
/// components are kept with a sentinel timestamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct RchParser;

impl RchParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse the full text content of one RCH file
    ///
    /// `file_label` only decorates diagnostics and error messages; the caller
    /// is responsible for having read the file.
    pub fn parse(&self, content: &str, file_label: &str) -> Result<ParseOutcome> {
        let lines: Vec<&str> = content.lines().collect();

        // Pass 1: harvest metadata and locate the data block
        let mut metadata = std::collections::HashMap::new();
        let mut begin_index = None;

        for (index, line) in lines.iter().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed == BEGIN_TIME_SERIE {
                begin_index = Some(index);
                break;
            }
            if trimmed == END_TIME_SERIE {
                // Structure ends here even if the begin marker never appeared
                break;
            }
            if let Some((key, value)) = trimmed.split_once(':') {
                // Later duplicates overwrite earlier ones
                metadata.insert(normalize_metadata_key(key), value.trim().to_string());
            }
        }

        let begin_index = begin_index.ok_or_else(|| {
            Error::rch_format(
                file_label,
                format!("missing '{}' marker", BEGIN_TIME_SERIE),
            )
        })?;

        // The header is the nearest non-blank line above the begin marker
        let header_line = lines[..begin_index]
            .iter()
            .rev()
            .find(|line| !line.trim().is_empty())
            .ok_or_else(|| {
                Error::rch_format(
                    file_label,
                    format!("no column header line found before '{}'", BEGIN_TIME_SERIE),
                )
            })?;

        let raw_tokens: Vec<&str> = header_line.split_whitespace().collect();
        if raw_tokens.is_empty() {
            return Err(Error::rch_format(file_label, "empty column header line"));
        }

        let column_headers = process_headers(&raw_tokens);
        debug!(
            "Resolved {} columns in {}: {:?}",
            column_headers.len(),
            file_label,
            column_headers
        );

        // Pass 2: convert data rows, scanning to end of input and skipping
        // marker lines
        let mut stats = ParseStats::new();
        let mut timeseries = Vec::new();

        for (offset, line) in lines[begin_index + 1..].iter().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('<') {
                continue;
            }

            stats.total_rows += 1;
            let line_number = begin_index + offset + 2;

            match parse_data_row(trimmed, &column_headers) {
                Ok(entry) => {
                    if !entry.has_valid_timestamp() {
                        stats.invalid_timestamps += 1;
                        stats.record_error(format!(
                            "Line {}: date/time components missing or non-numeric",
                            line_number
                        ));
                        debug!(
                            "Row at line {} of {} kept with invalid timestamp",
                            line_number, file_label
                        );
                    }
                    timeseries.push(entry);
                    stats.rows_parsed += 1;
                }
                Err(row_error) => {
                    stats.rows_skipped += 1;
                    stats.record_error(format!("Line {}: {}", line_number, row_error));
                    warn!(
                        "Skipped malformed row at line {} of {}: {}",
                        line_number, file_label, row_error
                    );
                }
            }
        }

        debug!(
            "Parsed {} of {} rows from {} ({} skipped, {} invalid timestamps)",
            stats.rows_parsed,
            stats.total_rows,
            file_label,
            stats.rows_skipped,
            stats.invalid_timestamps
        );

        Ok(ParseOutcome {
            parsed: ParsedRch {
                metadata,
                column_headers,
                timeseries,
            },
            stats,
        })
    }
}

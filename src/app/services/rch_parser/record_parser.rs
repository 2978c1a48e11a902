//! Individual data row parsing for RCH files
//!
//! Converts one whitespace-delimited data line into a time-series entry,
//! applying per-cell numeric-or-text fallback and timestamp synthesis.

use std::collections::HashMap;

use super::timestamp::synthesize_timestamp;
use crate::app::models::{TimeSeriesEntry, Value};
use crate::constants::INVALID_TIMESTAMP;

/// Why a data row could not be converted into an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// Token count does not match the processed column count
    ColumnMismatch { expected: usize, found: usize },
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowError::ColumnMismatch { expected, found } => {
                write!(f, "expected {} values, found {}", expected, found)
            }
        }
    }
}

/// Parse one data-block line into a time-series entry
///
/// The line is split on runs of whitespace. A token count that differs from
/// the column count rejects the whole row; everything else succeeds: cells
/// that fail numeric parsing are kept as text, and a row whose date/time
/// components cannot be assembled gets the `"Invalid Date"` sentinel rather
/// than an error.
pub fn parse_data_row(line: &str, column_keys: &[String]) -> Result<TimeSeriesEntry, RowError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.len() != column_keys.len() {
        return Err(RowError::ColumnMismatch {
            expected: column_keys.len(),
            found: tokens.len(),
        });
    }

    let mut values = HashMap::with_capacity(column_keys.len());
    for (key, token) in column_keys.iter().zip(&tokens) {
        values.insert(key.clone(), Value::from_token(token));
    }

    let timestamp =
        synthesize_timestamp(&values).unwrap_or_else(|| INVALID_TIMESTAMP.to_string());

    Ok(TimeSeriesEntry { timestamp, values })
}

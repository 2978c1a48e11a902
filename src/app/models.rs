//! Core data structures for RCH processing
//!
//! Defines the parsed-file result and its building blocks: cell values,
//! time-series entries, and the metadata mapping extracted from the header
//! block of an RCH file.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::INVALID_TIMESTAMP;

/// A single cell value from an RCH data row
///
/// RCH columns are predominantly numeric but may legitimately contain
/// placeholder text (e.g. "N/A"); the variant preserves that distinction
/// instead of coercing. Serialized untagged, so JSON output carries plain
/// numbers and strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Token that parsed as a floating-point number
    Number(f64),
    /// Token kept verbatim after numeric parsing failed
    Text(String),
}

impl Value {
    /// Parse a raw token: number on success, verbatim text on failure
    ///
    /// Non-finite parses ("NaN", "inf") fall back to text so every numeric
    /// value is representable in JSON output.
    pub fn from_token(token: &str) -> Self {
        match token.parse::<f64>() {
            Ok(n) if n.is_finite() => Value::Number(n),
            _ => Value::Text(token.to_string()),
        }
    }

    /// Get the numeric value, if this is a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// Check whether this value is numeric
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }
}

/// One parsed data row: cell values keyed by processed column name, plus the
/// timestamp synthesized from the row's split date/time columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesEntry {
    /// ISO-like timestamp string, or the "Invalid Date" sentinel
    pub timestamp: String,

    /// Cell values keyed by processed column key
    pub values: HashMap<String, Value>,
}

impl TimeSeriesEntry {
    /// Get the value for a processed column key
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    /// Get the numeric value for a processed column key, if numeric
    pub fn get_number(&self, column: &str) -> Option<f64> {
        self.values.get(column).and_then(Value::as_f64)
    }

    /// Check whether timestamp synthesis succeeded for this row
    pub fn has_valid_timestamp(&self) -> bool {
        self.timestamp != INVALID_TIMESTAMP
    }
}

/// The complete parsed representation of one RCH file
///
/// Built in a single pass over the input text and returned by value; the
/// parser keeps no reference to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRch {
    /// Key/value pairs from the free-form header block, keys normalized to
    /// lowercase with spaces replaced by underscores
    pub metadata: HashMap<String, String>,

    /// Processed column keys in header order
    pub column_headers: Vec<String>,

    /// Parsed data rows in file order
    pub timeseries: Vec<TimeSeriesEntry>,
}

impl ParsedRch {
    /// Look up a metadata value by normalized key
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Number of data columns
    pub fn column_count(&self) -> usize {
        self.column_headers.len()
    }

    /// Number of retained data rows
    pub fn row_count(&self) -> usize {
        self.timeseries.len()
    }

    /// Count rows whose timestamp could not be synthesized
    pub fn invalid_timestamp_count(&self) -> usize {
        self.timeseries
            .iter()
            .filter(|e| !e.has_valid_timestamp())
            .count()
    }
}

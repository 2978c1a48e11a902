//! Parsing statistics and result structures for RCH processing
//!
//! Tracks row-level outcomes so callers can report how much of a partially
//! malformed file survived parsing.

use crate::app::models::ParsedRch;
use crate::constants::MAX_RETAINED_ERRORS;

/// Parsing result with the parsed file and row statistics
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// The structured representation of the file
    pub parsed: ParsedRch,

    /// Row-level parsing statistics
    pub stats: ParseStats,
}

/// Row-level parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of data rows encountered
    pub total_rows: usize,

    /// Number of rows successfully converted to entries
    pub rows_parsed: usize,

    /// Number of rows dropped for a column-count mismatch
    pub rows_skipped: usize,

    /// Number of retained rows carrying the invalid-timestamp sentinel
    pub invalid_timestamps: usize,

    /// Row-level diagnostics, capped to keep pathological files bounded
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_rows: 0,
            rows_parsed: 0,
            rows_skipped: 0,
            invalid_timestamps: 0,
            errors: Vec::new(),
        }
    }

    /// Record a row-level diagnostic, dropping it once the cap is reached
    pub fn record_error(&mut self, message: String) {
        if self.errors.len() < MAX_RETAINED_ERRORS {
            self.errors.push(message);
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.rows_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% of rows retained)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}

//! Application constants for RCH processor
//!
//! This module contains the format markers, sentinel values, and default
//! settings used throughout the RCH processor application.

// =============================================================================
// RCH Format Markers
// =============================================================================

/// Literal line that opens the time-series data block
pub const BEGIN_TIME_SERIE: &str = "<BeginTimeSerie>";

/// Literal line that closes the time-series data block
pub const END_TIME_SERIE: &str = "<EndTimeSerie>";

/// File extension for RCH simulation output files (matched case-insensitively)
pub const RCH_FILE_EXTENSION: &str = "rch";

// =============================================================================
// Timestamp Synthesis
// =============================================================================

/// Key under which the synthesized timestamp is stored on each entry
pub const TIMESTAMP_KEY: &str = "timestamp";

/// Sentinel emitted when a row's date/time components cannot be assembled
pub const INVALID_TIMESTAMP: &str = "Invalid Date";

/// Processed column keys holding the six timestamp components, in the order
/// they appear in the assembled string (year, month, day, hour, minute, second)
pub const TIMESTAMP_COMPONENT_KEYS: &[&str] = &["yy", "month", "dd", "hh", "minute", "ss"];

// =============================================================================
// Header Token Disambiguation
// =============================================================================

/// Raw header token that RCH files reuse for both month and minute
pub const AMBIGUOUS_MONTH_MINUTE_TOKEN: &str = "mm";

/// Raw header token whose repeats get an occurrence suffix
pub const SECONDS_TOKEN: &str = "ss";

// =============================================================================
// Diagnostics
// =============================================================================

/// Maximum number of row-level error strings retained in parse statistics
pub const MAX_RETAINED_ERRORS: usize = 100;

// =============================================================================
// Output
// =============================================================================

/// Extension for generated output documents
pub const JSON_FILE_EXTENSION: &str = "json";

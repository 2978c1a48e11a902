//! Test utilities for RCH parser testing
//!
//! Provides the shared fixture builder used across the parser test modules.

// Test modules
mod header_tests;
mod timestamp_tests;

/// Build a minimal RCH file from metadata lines, a header line, and data rows
pub fn build_rch(metadata: &[&str], header: &str, rows: &[&str]) -> String {
    let mut content = String::new();
    for line in metadata {
        content.push_str(line);
        content.push('\n');
    }
    content.push('\n');
    content.push_str(header);
    content.push('\n');
    content.push_str("<BeginTimeSerie>\n");
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    content.push_str("<EndTimeSerie>\n");
    content
}

/// The standard seven-column RCH header used by most fixtures
pub const STANDARD_HEADER: &str = "yy mm dd hh mm ss flow";

//! JSON output for parsed RCH files
//!
//! Serializes [`ParsedRch`](crate::app::models::ParsedRch) values into JSON
//! documents with deterministic key ordering and writes them to disk.

pub mod writer;

// Re-export main types for easy access
pub use writer::{to_json_document, write_json, WriterConfig};

//! RCH Processor Library
//!
//! A Rust library for converting MOHID RCH simulation output files into
//! structured time-series records and JSON documents.
//!
//! This library provides tools for:
//! - Parsing RCH flat files with proper metadata/data section handling
//! - Normalizing and disambiguating repeated column header tokens
//! - Synthesizing per-row timestamps from split date/time columns
//! - Writing JSON documents with column-ordered time-series entries
//! - Comprehensive error handling and recovery

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod json_writer;
        pub mod rch_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ParsedRch, TimeSeriesEntry, Value};
pub use app::services::rch_parser::{ParseOutcome, ParseStats, RchParser};

/// Result type alias for the RCH processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for RCH processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// RCH structural format error (missing marker, missing header)
    #[error("RCH format error in file '{file}': {message}")]
    RchFormat { file: String, message: String },

    /// JSON serialization or writing error
    #[error("JSON writing error: {message}")]
    JsonWriting {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },

    /// Batch conversion produced no output
    #[error("Conversion failed: {failed} of {total} file(s) could not be converted")]
    ConversionFailed { failed: usize, total: usize },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an RCH format error
    pub fn rch_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RchFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// Create a conversion failure error
    pub fn conversion_failed(failed: usize, total: usize) -> Self {
        Self::ConversionFailed { failed, total }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonWriting {
            message: "JSON serialization failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}

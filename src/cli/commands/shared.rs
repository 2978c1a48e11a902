//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::constants::RCH_FILE_EXTENSION;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of RCH files discovered
    pub files_discovered: usize,
    /// Number of files converted successfully
    pub files_converted: usize,
    /// Number of files that failed with a structural or I/O error
    pub files_failed: usize,
    /// Number of data rows retained across all files
    pub rows_parsed: usize,
    /// Number of data rows dropped for column-count mismatches
    pub rows_skipped: usize,
    /// Number of retained rows with an unusable timestamp
    pub invalid_timestamps: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
    /// Output file sizes in bytes
    pub output_sizes: Vec<(String, u64)>,
}

impl ProcessingStats {
    /// Calculate total output size in bytes
    pub fn total_output_size(&self) -> u64 {
        self.output_sizes.iter().map(|(_, size)| size).sum()
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging for a CLI command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rch_processor={}", log_level)));

    // Set up subscriber based on output preference; a second invocation in
    // the same process keeps the existing subscriber
    if quiet {
        // Minimal logging for quiet mode
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init();
    } else {
        // Standard logging with timestamps
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Discover RCH files under the given input path
///
/// A file input yields a single-element list; a directory is walked
/// recursively for `.rch` files (extension matched case-insensitively).
/// Results are sorted for deterministic processing order.
pub fn discover_rch_files(input_path: &Path) -> Result<Vec<PathBuf>> {
    use walkdir::WalkDir;

    if !input_path.exists() {
        return Err(Error::file_not_found(input_path.display().to_string()));
    }

    if input_path.is_file() {
        return Ok(vec![input_path.to_path_buf()]);
    }

    let mut rch_files = Vec::new();
    for entry in WalkDir::new(input_path).follow_links(false) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && has_rch_extension(path) {
            rch_files.push(path.to_path_buf());
        }
    }

    rch_files.sort();
    debug!(
        "Discovered {} RCH files under {}",
        rch_files.len(),
        input_path.display()
    );

    Ok(rch_files)
}

fn has_rch_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(RCH_FILE_EXTENSION))
        .unwrap_or(false)
}

/// Check if an error is critical enough to stop batch processing
pub fn is_critical_error(error: &Error) -> bool {
    matches!(
        error,
        Error::Configuration { .. } | Error::ProcessingInterrupted { .. }
    )
}

/// Create a styled progress bar for file conversion
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
            )
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

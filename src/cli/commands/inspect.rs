//! Inspect command implementation for RCH processor CLI
//!
//! Parses a single RCH file and summarizes its structure: metadata,
//! processed column keys, and row statistics.

use super::shared::{setup_logging, ProcessingStats};
use crate::app::services::rch_parser::RchParser;
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::{Error, Result};
use colored::*;
use serde_json::json;
use tracing::debug;

/// Inspect command runner for RCH processor
pub async fn run_inspect(args: InspectArgs) -> Result<ProcessingStats> {
    setup_logging(args.get_log_level(), false)?;
    debug!("Inspecting {}", args.input_path.display());

    if !args.input_path.is_file() {
        return Err(Error::file_not_found(args.input_path.display().to_string()));
    }

    let file_label = args.input_path.display().to_string();
    let content = std::fs::read_to_string(&args.input_path)
        .map_err(|e| Error::io(format!("Failed to read file {}", file_label), e))?;

    let outcome = RchParser::new().parse(&content, &file_label)?;

    match args.format {
        OutputFormat::Text => print_text_summary(&file_label, &outcome),
        OutputFormat::Json => print_json_summary(&file_label, &outcome)?,
    }

    Ok(ProcessingStats {
        files_discovered: 1,
        files_converted: 1,
        rows_parsed: outcome.stats.rows_parsed,
        rows_skipped: outcome.stats.rows_skipped,
        invalid_timestamps: outcome.stats.invalid_timestamps,
        ..Default::default()
    })
}

fn print_text_summary(file_label: &str, outcome: &crate::ParseOutcome) {
    let parsed = &outcome.parsed;
    let stats = &outcome.stats;

    println!("\n{} {}", "File:".bright_cyan(), file_label.bright_white());

    println!("\n{}", "Metadata".bright_green().bold());
    if parsed.metadata.is_empty() {
        println!("  (none)");
    } else {
        let mut keys: Vec<_> = parsed.metadata.keys().collect();
        keys.sort();
        for key in keys {
            println!("  {}: {}", key.bright_cyan(), parsed.metadata[key]);
        }
    }

    println!(
        "\n{} ({})",
        "Columns".bright_green().bold(),
        parsed.column_count()
    );
    println!("  {}", parsed.column_headers.join(", "));

    println!("\n{}", "Rows".bright_green().bold());
    println!("  Parsed: {}", stats.rows_parsed.to_string().bright_white());
    if stats.rows_skipped > 0 {
        println!(
            "  Skipped: {}",
            stats.rows_skipped.to_string().bright_yellow()
        );
    }
    let invalid_timestamps = parsed.invalid_timestamp_count();
    if invalid_timestamps > 0 {
        println!(
            "  Invalid timestamps: {}",
            invalid_timestamps.to_string().bright_yellow()
        );
    }
    if let (Some(first), Some(last)) = (parsed.timeseries.first(), parsed.timeseries.last()) {
        println!("  Range: {} .. {}", first.timestamp, last.timestamp);
    }
    println!();
}

fn print_json_summary(file_label: &str, outcome: &crate::ParseOutcome) -> Result<()> {
    let parsed = &outcome.parsed;
    let summary = json!({
        "file": file_label,
        "metadata": parsed.metadata,
        "columnHeaders": parsed.column_headers,
        "rows": {
            "parsed": outcome.stats.rows_parsed,
            "skipped": outcome.stats.rows_skipped,
            "invalidTimestamps": outcome.stats.invalid_timestamps,
        },
        "errors": outcome.stats.errors,
    });

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

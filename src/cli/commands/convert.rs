//! Convert command implementation for RCH processor CLI
//!
//! This module contains the batch conversion workflow: file discovery,
//! per-file parsing with graceful degradation, JSON output, and summary
//! reporting.

use super::shared::{
    create_progress_bar, discover_rch_files, is_critical_error, setup_logging, ProcessingStats,
};
use crate::app::services::json_writer::{write_json, WriterConfig};
use crate::app::services::rch_parser::RchParser;
use crate::cli::args::ConvertArgs;
use crate::constants::JSON_FILE_EXTENSION;
use crate::{Error, Result};
use colored::*;
use indicatif::HumanDuration;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Convert command runner for RCH processor
///
/// Orchestrates the conversion workflow:
/// 1. Set up logging and validate arguments
/// 2. Discover input files
/// 3. Parse each file and write its JSON document
/// 4. Report summary statistics
pub async fn run_convert(args: ConvertArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting RCH processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let files = discover_rch_files(&args.input_path)?;
    if files.is_empty() {
        return Err(Error::configuration(format!(
            "No .rch files found under {}",
            args.input_path.display()
        )));
    }

    info!("Converting {} RCH files", files.len());

    if args.dry_run {
        return run_dry_run(&files);
    }

    if let Some(output_dir) = &args.output_path {
        std::fs::create_dir_all(output_dir).map_err(|e| {
            Error::io(
                format!("Failed to create output directory {}", output_dir.display()),
                e,
            )
        })?;
    }

    let writer_config = WriterConfig {
        pretty: args.pretty,
        force_overwrite: args.force_overwrite,
    };
    let parser = RchParser::new();

    let mut stats = ProcessingStats {
        files_discovered: files.len(),
        ..Default::default()
    };

    let progress = args
        .show_progress()
        .then(|| create_progress_bar(files.len() as u64, "Converting RCH files"));

    for file in &files {
        match convert_file(&parser, file, args.output_path.as_deref(), &writer_config) {
            Ok(file_result) => {
                stats.files_converted += 1;
                stats.rows_parsed += file_result.rows_parsed;
                stats.rows_skipped += file_result.rows_skipped;
                stats.invalid_timestamps += file_result.invalid_timestamps;
                stats
                    .output_sizes
                    .push((file_result.output_name, file_result.output_bytes));
            }
            Err(e) => {
                error!("Failed to convert {}: {}", file.display(), e);
                stats.files_failed += 1;

                // Continue with remaining files unless the error is fatal
                if is_critical_error(&e) {
                    if let Some(pb) = &progress {
                        pb.abandon();
                    }
                    return Err(e);
                }
            }
        }

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    stats.processing_time = start_time.elapsed();

    if !args.quiet {
        print_summary(&stats);
    }

    if stats.files_converted == 0 {
        return Err(Error::conversion_failed(
            stats.files_failed,
            stats.files_discovered,
        ));
    }

    Ok(stats)
}

/// Per-file conversion result
struct FileResult {
    rows_parsed: usize,
    rows_skipped: usize,
    invalid_timestamps: usize,
    output_name: String,
    output_bytes: u64,
}

fn convert_file(
    parser: &RchParser,
    file: &Path,
    output_dir: Option<&Path>,
    writer_config: &WriterConfig,
) -> Result<FileResult> {
    let file_label = file.display().to_string();

    let content = std::fs::read_to_string(file)
        .map_err(|e| Error::io(format!("Failed to read file {}", file_label), e))?;

    let outcome = parser.parse(&content, &file_label)?;

    if outcome.stats.rows_skipped > 0 {
        warn!(
            "{}: dropped {} of {} rows (wrong column count)",
            file_label, outcome.stats.rows_skipped, outcome.stats.total_rows
        );
    }

    let output_path = resolve_output_path(file, output_dir);
    let output_bytes = write_json(&outcome.parsed, &output_path, writer_config)?;

    Ok(FileResult {
        rows_parsed: outcome.stats.rows_parsed,
        rows_skipped: outcome.stats.rows_skipped,
        invalid_timestamps: outcome.stats.invalid_timestamps,
        output_name: output_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| output_path.display().to_string()),
        output_bytes,
    })
}

/// Resolve the output path for one input file
///
/// With an output directory, the JSON lands there under the input's stem;
/// otherwise it is written next to the input file.
fn resolve_output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    match output_dir {
        Some(dir) => {
            let stem = input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "output".to_string());
            dir.join(format!("{}.{}", stem, JSON_FILE_EXTENSION))
        }
        None => input.with_extension(JSON_FILE_EXTENSION),
    }
}

/// List the files a conversion would process without writing anything
fn run_dry_run(files: &[PathBuf]) -> Result<ProcessingStats> {
    println!(
        "\n{}",
        "Dry run - no output will be written".bright_yellow().bold()
    );
    for file in files {
        println!("  {}", file.display());
    }
    println!("\n{} file(s) would be converted", files.len());

    Ok(ProcessingStats {
        files_discovered: files.len(),
        ..Default::default()
    })
}

fn print_summary(stats: &ProcessingStats) {
    println!("\n{}", "Conversion Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Files converted:".bright_cyan(),
        stats.files_converted.to_string().bright_white().bold()
    );
    if stats.files_failed > 0 {
        println!(
            "  {} {}",
            "Files failed:".bright_red(),
            stats.files_failed.to_string().bright_red().bold()
        );
    }
    println!(
        "  {} {}",
        "Rows parsed:".bright_cyan(),
        stats.rows_parsed.to_string().bright_white()
    );
    if stats.rows_skipped > 0 {
        println!(
            "  {} {}",
            "Rows skipped:".bright_yellow(),
            stats.rows_skipped.to_string().bright_yellow()
        );
    }
    if stats.invalid_timestamps > 0 {
        println!(
            "  {} {}",
            "Invalid timestamps:".bright_yellow(),
            stats.invalid_timestamps.to_string().bright_yellow()
        );
    }
    println!(
        "  {} {}",
        "Output size:".bright_cyan(),
        ProcessingStats::format_size(stats.total_output_size()).bright_white()
    );
    println!(
        "  {} {}",
        "Time elapsed:".bright_cyan(),
        HumanDuration(stats.processing_time).to_string().bright_white()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_next_to_input() {
        let path = resolve_output_path(Path::new("/data/run1/river.rch"), None);
        assert_eq!(path, Path::new("/data/run1/river.json"));
    }

    #[test]
    fn test_output_path_in_output_dir() {
        let path = resolve_output_path(Path::new("/data/run1/river.rch"), Some(Path::new("/out")));
        assert_eq!(path, Path::new("/out/river.json"));
    }
}

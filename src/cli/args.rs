//! Command-line argument definitions for RCH processor
//!
//! This module defines the complete CLI interface using clap derive API,
//! including per-command validation and logging helpers.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the RCH time-series processor
///
/// Converts MOHID RCH simulation output files into JSON documents suitable
/// for charting and tabular display.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "rch-processor",
    version,
    about = "Convert MOHID RCH simulation time-series files to JSON",
    long_about = "Converts MOHID RCH simulation output (metadata header plus a \
                  <BeginTimeSerie>/<EndTimeSerie> delimited data block) into JSON \
                  documents. Handles reused header tokens, partially malformed rows, \
                  and split date/time columns, and produces one .json file per input."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the RCH processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert RCH files to JSON (main command)
    Convert(ConvertArgs),
    /// Summarize the structure of a single RCH file
    Inspect(InspectArgs),
}

/// Output format for the inspect command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text summary
    Text,
    /// Machine-readable JSON summary
    Json,
}

/// Arguments for the convert command (main batch conversion)
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// RCH file or directory to convert
    ///
    /// A directory is walked recursively for files with the .rch extension
    /// (matched case-insensitively); a single file is converted as-is.
    #[arg(value_name = "PATH", help = "RCH file or directory to convert")]
    pub input_path: PathBuf,

    /// Output directory for generated JSON files
    ///
    /// Will be created if it doesn't exist. Each input file produces a
    /// <stem>.json. If not specified, output lands next to each input file.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for generated JSON files"
    )]
    pub output_path: Option<PathBuf>,

    /// Pretty-print generated JSON
    #[arg(long = "pretty", help = "Pretty-print generated JSON")]
    pub pretty: bool,

    /// Force overwrite of existing output files
    ///
    /// By default, the processor will not overwrite existing JSON files.
    #[arg(long = "force", help = "Force overwrite of existing output files")]
    pub force_overwrite: bool,

    /// Perform a dry run without actual conversion
    ///
    /// Lists the files that would be converted without writing any output.
    #[arg(
        long = "dry-run",
        help = "Show what would be converted without creating output files"
    )]
    pub dry_run: bool,

    /// Suppress progress output (errors still go to stderr)
    #[arg(short = 'q', long = "quiet", help = "Suppress progress output")]
    pub quiet: bool,

    /// Enable verbose debug logging
    #[arg(short = 'v', long = "verbose", help = "Enable verbose debug logging")]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Explicit log level (overrides --quiet/--verbose)"
    )]
    pub log_level: Option<String>,
}

impl ConvertArgs {
    /// Validate argument combinations before running
    pub fn validate(&self) -> Result<()> {
        if self.quiet && self.verbose {
            return Err(Error::configuration(
                "--quiet and --verbose are mutually exclusive",
            ));
        }

        if let Some(level) = &self.log_level {
            validate_log_level(level)?;
        }

        Ok(())
    }

    /// Resolve the effective log level from the flag combination
    pub fn get_log_level(&self) -> &str {
        if let Some(level) = &self.log_level {
            level
        } else if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }

    /// Whether to render a progress bar during conversion
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.dry_run
    }
}

/// Arguments for the inspect command (single-file summary)
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// RCH file to inspect
    #[arg(value_name = "FILE", help = "RCH file to inspect")]
    pub input_path: PathBuf,

    /// Summary output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "text",
        help = "Summary output format"
    )]
    pub format: OutputFormat,

    /// Enable verbose debug logging
    #[arg(short = 'v', long = "verbose", help = "Enable verbose debug logging")]
    pub verbose: bool,
}

impl InspectArgs {
    /// Resolve the effective log level
    pub fn get_log_level(&self) -> &str {
        if self.verbose { "debug" } else { "warn" }
    }
}

fn validate_log_level(level: &str) -> Result<()> {
    const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
    if LEVELS.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(Error::configuration(format!(
            "Invalid log level '{}' (expected one of: {})",
            level,
            LEVELS.join(", ")
        )))
    }
}

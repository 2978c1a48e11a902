use clap::Parser;
use rch_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Set up graceful shutdown handling
        let shutdown_signal = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");
        };

        // Run the main command, bailing out on interruption
        tokio::select! {
            result = commands::run(args) => {
                result
            }
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                Err(rch_processor::Error::processing_interrupted(
                    "Processing interrupted by user".to_string()
                ))
            }
        }
    });

    match result {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("RCH Processor - MOHID Time-Series Converter");
    println!("===========================================");
    println!();
    println!("Convert MOHID RCH simulation output files into JSON documents");
    println!("for charting and tabular analysis.");
    println!();
    println!("USAGE:");
    println!("    rch-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert RCH files to JSON (main command)");
    println!("    inspect     Summarize the structure of a single RCH file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert a single file (river.json lands next to it):");
    println!("    rch-processor convert river.rch");
    println!();
    println!("    # Convert a directory tree into an output folder:");
    println!("    rch-processor convert /path/to/simulation --output ./json --pretty");
    println!();
    println!("    # Summarize a file's metadata and columns:");
    println!("    rch-processor inspect river.rch --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    rch-processor <COMMAND> --help");
}

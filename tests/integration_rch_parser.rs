//! Integration tests for the RCH conversion pipeline
//!
//! These tests exercise the full path from on-disk RCH files through the
//! convert command to generated JSON documents, using synthetic fixtures.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use rch_processor::cli::args::ConvertArgs;
use rch_processor::cli::commands::convert::run_convert;
use rch_processor::{Error, RchParser};

/// A small but representative RCH file: free text, metadata, reused header
/// tokens, one malformed row, and a non-numeric cell
const SAMPLE_RCH: &str = "\
Time Serie Results File
Name: Ribeira Grande
Serie Initial Data: 2020 6 15

yy mm dd hh mm ss flow level
<BeginTimeSerie>
2020 6 15 13 5 30.7 12.5 0.8
2020 6 15 13 6 30.7 13.0 N/A
2020 6 15 13 7
<EndTimeSerie>
";

fn write_sample(dir: &Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, SAMPLE_RCH).unwrap();
    path
}

fn quiet_args(input: std::path::PathBuf) -> ConvertArgs {
    ConvertArgs {
        input_path: input,
        output_path: None,
        pretty: false,
        force_overwrite: false,
        dry_run: false,
        quiet: true,
        verbose: false,
        log_level: None,
    }
}

#[tokio::test]
async fn test_convert_single_file_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path(), "ribeira.rch");

    let stats = run_convert(quiet_args(input.clone())).await.unwrap();

    assert_eq!(stats.files_converted, 1);
    assert_eq!(stats.rows_parsed, 2);
    assert_eq!(stats.rows_skipped, 1);

    // Output lands next to the input file
    let output = dir.path().join("ribeira.json");
    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();

    assert_eq!(document["metadata"]["name"], "Ribeira Grande");
    assert_eq!(document["metadata"]["serie_initial_data"], "2020 6 15");

    let columns: Vec<&str> = document["columnHeaders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        columns,
        vec!["yy", "month", "dd", "hh", "minute", "ss", "flow", "level"]
    );

    let timeseries = document["timeseries"].as_array().unwrap();
    assert_eq!(timeseries.len(), 2);
    assert_eq!(timeseries[0]["timestamp"], "2020-06-15T13:05:30Z");
    assert_eq!(timeseries[0]["flow"], 12.5);
    assert_eq!(timeseries[1]["level"], "N/A");
}

#[tokio::test]
async fn test_convert_directory_into_output_dir() {
    let dir = TempDir::new().unwrap();
    let input_dir = dir.path().join("runs");
    let output_dir = dir.path().join("json");
    fs::create_dir(&input_dir).unwrap();
    write_sample(&input_dir, "a.rch");
    write_sample(&input_dir, "b.rch");

    let args = ConvertArgs {
        output_path: Some(output_dir.clone()),
        pretty: true,
        ..quiet_args(input_dir)
    };

    let stats = run_convert(args).await.unwrap();
    assert_eq!(stats.files_discovered, 2);
    assert_eq!(stats.files_converted, 2);
    assert!(output_dir.join("a.json").exists());
    assert!(output_dir.join("b.json").exists());
}

#[tokio::test]
async fn test_convert_continues_past_structural_failure() {
    let dir = TempDir::new().unwrap();
    write_sample(dir.path(), "good.rch");
    fs::write(
        dir.path().join("bad.rch"),
        "Name: Broken\nyy mm dd hh mm ss\nno begin marker here\n",
    )
    .unwrap();

    let stats = run_convert(quiet_args(dir.path().to_path_buf()))
        .await
        .unwrap();

    assert_eq!(stats.files_discovered, 2);
    assert_eq!(stats.files_converted, 1);
    assert_eq!(stats.files_failed, 1);
    assert!(dir.path().join("good.json").exists());
    assert!(!dir.path().join("bad.json").exists());
}

#[tokio::test]
async fn test_convert_fails_when_nothing_converted() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.rch"), "just some text\n").unwrap();

    let result = run_convert(quiet_args(dir.path().to_path_buf())).await;
    assert!(matches!(result, Err(Error::ConversionFailed { .. })));
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    write_sample(dir.path(), "sample.rch");

    let args = ConvertArgs {
        dry_run: true,
        ..quiet_args(dir.path().to_path_buf())
    };

    let stats = run_convert(args).await.unwrap();
    assert_eq!(stats.files_discovered, 1);
    assert_eq!(stats.files_converted, 0);
    assert!(!dir.path().join("sample.json").exists());
}

#[tokio::test]
async fn test_existing_output_requires_force() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path(), "sample.rch");
    fs::write(dir.path().join("sample.json"), "{}").unwrap();

    // Refused without --force: the only file fails, so conversion fails
    let result = run_convert(quiet_args(input.clone())).await;
    assert!(result.is_err());
    assert_eq!(fs::read_to_string(dir.path().join("sample.json")).unwrap(), "{}");

    let args = ConvertArgs {
        force_overwrite: true,
        ..quiet_args(input)
    };
    let stats = run_convert(args).await.unwrap();
    assert_eq!(stats.files_converted, 1);
}

#[test]
fn test_missing_input_path() {
    let parser = RchParser::new();
    // Sanity check that the library surface handles a structural failure the
    // same way the CLI reports it
    let result = parser.parse("no markers at all\n", "missing.rch");
    match result {
        Err(Error::RchFormat { file, .. }) => assert_eq!(file, "missing.rch"),
        other => panic!("expected RchFormat error, got {:?}", other),
    }
}

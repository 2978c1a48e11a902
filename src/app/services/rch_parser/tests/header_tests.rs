//! Tests for header token normalization and positional disambiguation

use super::super::header::{normalize_metadata_key, normalize_token, process_headers};

#[test]
fn test_normalize_lowercases() {
    assert_eq!(normalize_token("Flow"), "flow");
    assert_eq!(normalize_token("YY"), "yy");
}

#[test]
fn test_normalize_collapses_separators() {
    assert_eq!(normalize_token("flow/channel"), "flow_channel");
    assert_eq!(normalize_token("rain(mm)"), "rain_mm");
    assert_eq!(normalize_token("water-level.max"), "water_level_max");
}

#[test]
fn test_normalize_collapses_separator_runs() {
    assert_eq!(normalize_token("a--(b)"), "a_b");
    assert_eq!(normalize_token("x.(.)y"), "x_y");
}

#[test]
fn test_normalize_strips_edge_underscores() {
    assert_eq!(normalize_token("(flow)"), "flow");
    assert_eq!(normalize_token("-flow-"), "flow");
    assert_eq!(normalize_token("_flow_"), "flow");
}

#[test]
fn test_normalize_collapses_literal_underscore_runs() {
    assert_eq!(normalize_token("a__b"), "a_b");
    assert_eq!(normalize_token("water_-_level"), "water_level");
}

#[test]
fn test_normalize_maps_degree_glyphs_to_c() {
    // Temperature unit annotations arrive as °C or mojibake
    assert_eq!(normalize_token("T(\u{00B0}C)"), "t_cc");
    assert_eq!(normalize_token("T(\u{FFFD}C)"), "t_cc");
}

#[test]
fn test_month_minute_disambiguation() {
    let keys = process_headers(&["yy", "mm", "dd", "hh", "mm", "ss"]);
    assert_eq!(keys, vec!["yy", "month", "dd", "hh", "minute", "ss"]);
}

#[test]
fn test_mm_disambiguation_is_case_insensitive() {
    let keys = process_headers(&["MM", "mm"]);
    assert_eq!(keys, vec!["month", "minute"]);
}

#[test]
fn test_repeated_ss_gets_occurrence_suffix() {
    let keys = process_headers(&["ss", "flow", "ss", "ss"]);
    assert_eq!(keys, vec!["ss", "flow", "ss_1", "ss_2"]);
}

#[test]
fn test_output_length_matches_input_length() {
    let raw = ["yy", "mm", "dd", "hh", "mm", "ss", "flow", "T(\u{00B0}C)", "N/A"];
    assert_eq!(process_headers(&raw).len(), raw.len());
}

#[test]
fn test_metadata_key_normalization() {
    assert_eq!(normalize_metadata_key("Name"), "name");
    assert_eq!(
        normalize_metadata_key("Serie Initial Data"),
        "serie_initial_data"
    );
    assert_eq!(normalize_metadata_key("  Time Units  "), "time_units");
}

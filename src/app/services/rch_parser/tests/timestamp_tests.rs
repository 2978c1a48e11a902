//! Tests for timestamp synthesis from split date/time columns

use std::collections::HashMap;

use super::super::timestamp::synthesize_timestamp;
use crate::app::models::Value;

fn components(values: &[(&str, f64)]) -> HashMap<String, Value> {
    values
        .iter()
        .map(|(key, n)| (key.to_string(), Value::Number(*n)))
        .collect()
}

fn full_components() -> HashMap<String, Value> {
    components(&[
        ("yy", 2020.0),
        ("month", 6.0),
        ("dd", 15.0),
        ("hh", 13.0),
        ("minute", 5.0),
        ("ss", 30.7),
    ])
}

#[test]
fn test_timestamp_zero_padded_and_seconds_floored() {
    let timestamp = synthesize_timestamp(&full_components()).unwrap();
    assert_eq!(timestamp, "2020-06-15T13:05:30Z");
}

#[test]
fn test_midnight_components() {
    let values = components(&[
        ("yy", 1999.0),
        ("month", 12.0),
        ("dd", 31.0),
        ("hh", 0.0),
        ("minute", 0.0),
        ("ss", 0.0),
    ]);
    assert_eq!(
        synthesize_timestamp(&values).unwrap(),
        "1999-12-31T00:00:00Z"
    );
}

#[test]
fn test_missing_component_yields_none() {
    let mut values = full_components();
    values.remove("dd");
    assert_eq!(synthesize_timestamp(&values), None);
}

#[test]
fn test_textual_component_yields_none() {
    let mut values = full_components();
    values.insert("hh".to_string(), Value::Text("noon".to_string()));
    assert_eq!(synthesize_timestamp(&values), None);
}

#[test]
fn test_components_not_range_checked() {
    // String assembly only: out-of-range parts format as-is
    let mut values = full_components();
    values.insert("month".to_string(), Value::Number(13.0));
    assert_eq!(
        synthesize_timestamp(&values).unwrap(),
        "2020-13-15T13:05:30Z"
    );
}

#[test]
fn test_extra_columns_ignored() {
    let mut values = full_components();
    values.insert("flow".to_string(), Value::Number(42.0));
    values.insert("note".to_string(), Value::Text("ok".to_string()));
    assert_eq!(
        synthesize_timestamp(&values).unwrap(),
        "2020-06-15T13:05:30Z"
    );
}

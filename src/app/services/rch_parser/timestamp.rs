//! Timestamp synthesis from split date/time columns
//!
//! RCH rows carry their observation time as six separate numeric columns
//! (year, month, day, hour, minute, second). This module assembles them into
//! a single ISO-like string.

use std::collections::HashMap;

use crate::app::models::Value;
use crate::constants::TIMESTAMP_COMPONENT_KEYS;

/// Assemble `YYYY-MM-DDTHH:MM:SSZ` from a row's date/time components
///
/// Returns `None` when any of the six components is absent or non-numeric;
/// the caller substitutes the invalid-timestamp sentinel. Seconds are floored
/// to whole seconds (RCH emits fractional seconds for sub-minute output
/// intervals). Components are not range-checked.
pub fn synthesize_timestamp(values: &HashMap<String, Value>) -> Option<String> {
    let mut components = [0f64; 6];
    for (slot, key) in TIMESTAMP_COMPONENT_KEYS.iter().enumerate() {
        components[slot] = values.get(*key)?.as_f64()?;
    }

    let [year, month, day, hour, minute, second] = components;

    Some(format!(
        "{}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year as i64,
        month as i64,
        day as i64,
        hour as i64,
        minute as i64,
        second.floor() as i64
    ))
}

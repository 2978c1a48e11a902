//! JSON document assembly and file output for parsed RCH data

use std::path::Path;

use serde_json::{json, Map};
use tracing::{debug, info};

use crate::app::models::ParsedRch;
use crate::constants::TIMESTAMP_KEY;
use crate::{Error, Result};

/// Output options for JSON generation
#[derive(Debug, Clone, Default)]
pub struct WriterConfig {
    /// Pretty-print output with indentation
    pub pretty: bool,

    /// Overwrite an existing output file
    pub force_overwrite: bool,
}

/// Build the JSON document for a parsed RCH file
///
/// Time-series entries are emitted as objects with the timestamp first and
/// the remaining keys in column-header order; metadata keys are sorted. The
/// document is therefore byte-stable across runs for the same input.
pub fn to_json_document(parsed: &ParsedRch) -> Result<serde_json::Value> {
    let mut metadata = Map::with_capacity(parsed.metadata.len());
    let mut metadata_keys: Vec<_> = parsed.metadata.keys().collect();
    metadata_keys.sort();
    for key in metadata_keys {
        metadata.insert(key.clone(), json!(parsed.metadata[key]));
    }

    let mut timeseries = Vec::with_capacity(parsed.timeseries.len());
    for entry in &parsed.timeseries {
        let mut object = Map::with_capacity(parsed.column_headers.len() + 1);
        object.insert(TIMESTAMP_KEY.to_string(), json!(entry.timestamp));
        for column in &parsed.column_headers {
            if let Some(value) = entry.values.get(column) {
                object.insert(column.clone(), serde_json::to_value(value)?);
            }
        }
        timeseries.push(serde_json::Value::Object(object));
    }

    Ok(json!({
        "metadata": serde_json::Value::Object(metadata),
        "columnHeaders": parsed.column_headers,
        "timeseries": timeseries,
    }))
}

/// Serialize a parsed RCH file and write it to `output_path`
///
/// Refuses to overwrite an existing file unless `force_overwrite` is set.
/// Returns the number of bytes written.
pub fn write_json(parsed: &ParsedRch, output_path: &Path, config: &WriterConfig) -> Result<u64> {
    if output_path.exists() && !config.force_overwrite {
        return Err(Error::configuration(format!(
            "Output file already exists: {} (use --force to overwrite)",
            output_path.display()
        )));
    }

    let document = to_json_document(parsed)?;
    let serialized = if config.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };

    std::fs::write(output_path, &serialized).map_err(|e| {
        Error::io(
            format!("Failed to write JSON to {}", output_path.display()),
            e,
        )
    })?;

    debug!(
        "Wrote {} bytes to {}",
        serialized.len(),
        output_path.display()
    );
    info!(
        "Converted {} rows into {}",
        parsed.row_count(),
        output_path.display()
    );

    Ok(serialized.len() as u64)
}

//! Header token normalization and positional disambiguation
//!
//! RCH header lines reuse the token `mm` for both month and minute and may
//! repeat `ss`, so processed column keys cannot be derived token-by-token:
//! the fold below carries occurrence counters across the header line.

use crate::constants::{AMBIGUOUS_MONTH_MINUTE_TOKEN, SECONDS_TOKEN};

/// Normalize a raw header token into a column key
///
/// Lowercases the token, maps degree-sign and replacement-character glyphs to
/// `c` (RCH unit annotations like `(°C)` survive encoding round-trips badly),
/// collapses runs of `/ ( ) . space -` and existing underscores into a single
/// underscore, and strips leading/trailing underscores.
pub fn normalize_token(raw: &str) -> String {
    let mut key = String::with_capacity(raw.len());

    for ch in raw.to_lowercase().chars() {
        match ch {
            '\u{00B0}' | '\u{FFFD}' => key.push('c'),
            '/' | '(' | ')' | '.' | ' ' | '-' | '_' => {
                if !key.is_empty() && !key.ends_with('_') {
                    key.push('_');
                }
            }
            _ => key.push(ch),
        }
    }

    // Separator runs at the end leave one trailing underscore
    while key.ends_with('_') {
        key.pop();
    }

    key
}

/// Normalize a metadata key from a `key: value` header-block line
///
/// Metadata keys only need the simple form: lowercase with spaces replaced
/// by underscores.
pub fn normalize_metadata_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

/// Derive processed column keys from the raw header tokens
///
/// Applies [`normalize_token`] to each token while disambiguating repeats
/// positionally: the first `mm` is the month column, the second the minute
/// column; `ss` keeps its name on first occurrence and gains an occurrence
/// suffix (`ss_1`, `ss_2`, ...) on repeats. Output length always equals
/// input length.
pub fn process_headers(raw_tokens: &[&str]) -> Vec<String> {
    let mut month_minute_seen = 0usize;
    let mut seconds_seen = 0usize;

    raw_tokens
        .iter()
        .map(|raw| {
            if raw.eq_ignore_ascii_case(AMBIGUOUS_MONTH_MINUTE_TOKEN) {
                month_minute_seen += 1;
                if month_minute_seen == 1 {
                    "month".to_string()
                } else {
                    "minute".to_string()
                }
            } else if raw.eq_ignore_ascii_case(SECONDS_TOKEN) {
                seconds_seen += 1;
                if seconds_seen == 1 {
                    SECONDS_TOKEN.to_string()
                } else {
                    format!("{}_{}", SECONDS_TOKEN, seconds_seen - 1)
                }
            } else {
                normalize_token(raw)
            }
        })
        .collect()
}

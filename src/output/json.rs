//! JSON output, one object per line.

use crate::error::ClassifyError;
use crate::models::Classification;
use serde::Serialize;

#[derive(Serialize)]
#[serde(untagged)]
enum JsonRecord<'a> {
    Classified(&'a Classification),
    Failed { input: &'a str, error: String },
}

/// Serialize one outcome as a single JSON line (no trailing newline).
pub fn format_json(
    input: &str,
    result: &Result<Classification, ClassifyError>,
) -> Result<String, serde_json::Error> {
    let record = match result {
        Ok(c) => JsonRecord::Classified(c),
        Err(e) => JsonRecord::Failed {
            input,
            error: e.to_string(),
        },
    };
    serde_json::to_string(&record)
}

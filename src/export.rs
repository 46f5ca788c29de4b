//! Views over a generated batch for outer surfaces
//!
//! - `batch_to_json` / `case_to_json` - JSON bodies of the batch and of one case
//! - `lookup_case` - single-case lookup with the not-found messages shown to users
//! - `write_csv` - spreadsheet export, one row per record
//!
//! All functions are pure over a borrowed batch; where the batch lives (a session,
//! a cache, a file) is up to the caller.

use crate::core_types::{SchemaVariant, TestCaseRecord};
use serde_json::{json, Value};
use std::io::Write;
use thiserror::Error;

/// Columns shared by every variant, before the artifact columns
const COMMON_HEADERS: [&str; 7] = [
    "ID",
    "Title",
    "Description",
    "Input",
    "Expected Output",
    "Priority",
    "Type",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No test cases found in session")]
    NoBatch,

    #[error("Test case with ID {id} not found")]
    CaseNotFound { id: u64 },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Whether this is a lookup miss rather than a serialization failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoBatch | Self::CaseNotFound { .. })
    }

    /// `{"error": "<message>"}` body for JSON surfaces
    pub fn to_error_body(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}

/// The batch as a flat JSON array, artifact fields inlined
pub fn batch_to_json(records: &[TestCaseRecord]) -> Result<String, ExportError> {
    Ok(serde_json::to_string(records)?)
}

pub fn case_to_json(record: &TestCaseRecord) -> Result<String, ExportError> {
    Ok(serde_json::to_string(record)?)
}

/// First record carrying `id`
///
/// Ids are not guaranteed unique when the model repeats them, so the earliest wins.
pub fn find_case(records: &[TestCaseRecord], id: u64) -> Option<&TestCaseRecord> {
    records.iter().find(|record| record.id == id)
}

/// Look up `id` in a batch that may not exist yet
pub fn lookup_case(
    records: Option<&[TestCaseRecord]>,
    id: u64,
) -> Result<&TestCaseRecord, ExportError> {
    let records = records.ok_or(ExportError::NoBatch)?;
    find_case(records, id).ok_or(ExportError::CaseNotFound { id })
}

/// Header row for `variant`
pub fn csv_headers(variant: SchemaVariant) -> Vec<&'static str> {
    COMMON_HEADERS
        .iter()
        .copied()
        .chain(variant.fields().iter().map(|field| field.label()))
        .collect()
}

/// Write the batch as CSV with one column per artifact field of `variant`
///
/// Records carrying a different variant leave the missing columns empty.
pub fn write_csv<W: Write>(
    records: &[TestCaseRecord],
    variant: SchemaVariant,
    writer: W,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(csv_headers(variant))?;

    for record in records {
        let id = record.id.to_string();
        let mut row = vec![
            id.as_str(),
            record.title.as_str(),
            record.description.as_str(),
            record.input.as_str(),
            record.expected_output.as_str(),
            record.priority.as_str(),
            record.case_type.as_str(),
        ];
        row.extend(
            variant
                .fields()
                .iter()
                .map(|field| record.artifact(*field).unwrap_or_default()),
        );
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

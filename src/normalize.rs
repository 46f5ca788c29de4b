//! Validation and defaulting of model-produced test cases
//!
//! Entries that are not JSON objects are skipped with a warning. Accepted entries
//! become [`TestCaseRecord`]s with every field of the active variant populated;
//! unknown keys are dropped.
//!
//! Fallback ids and titles use the entry's 1-based position in the *raw* array,
//! counting skipped entries. `[{..}, "junk", {..}]` therefore yields ids 1 and 3.

use crate::core_types::{CodeArtifacts, SchemaVariant, TestCaseRecord};
use crate::error::{GenResult, GenerationError};
use crate::logging::{log_trace, log_warn};
use crate::response_parser::json_kind;
use serde_json::{Map, Value};

/// Normalize the decoded array into a non-empty batch
///
/// # Errors
///
/// Returns [`GenerationError::Schema`] when no entry survives validation,
/// including when `entries` is empty.
pub fn normalize_cases(
    entries: Vec<Value>,
    variant: SchemaVariant,
) -> GenResult<Vec<TestCaseRecord>> {
    let total = entries.len();
    let mut records = Vec::with_capacity(total);

    for (index, entry) in entries.into_iter().enumerate() {
        let position = index + 1;
        match entry {
            Value::Object(case) => {
                log_trace!(position = position, "Accepted test case entry");
                records.push(normalize_case(&case, position, variant));
            }
            other => {
                log_warn!(
                    position = position,
                    entry_type = json_kind(&other),
                    "Test case entry is not an object, skipping"
                );
            }
        }
    }

    if records.is_empty() {
        return Err(GenerationError::no_valid_test_cases(total));
    }
    Ok(records)
}

/// Build one record from an object entry at 1-based raw `position`
pub fn normalize_case(
    case: &Map<String, Value>,
    position: usize,
    variant: SchemaVariant,
) -> TestCaseRecord {
    let text = |key: &str, default: &str| {
        field_text(case, key).unwrap_or_else(|| default.to_string())
    };

    TestCaseRecord {
        id: case_id(case).unwrap_or(position as u64),
        title: field_text(case, "title").unwrap_or_else(|| format!("Test Case {position}")),
        description: text("description", "No description provided"),
        input: text("input", "Not specified"),
        expected_output: text("expected_output", "Not specified"),
        priority: text("priority", "Medium"),
        case_type: text("type", "Functional"),
        artifacts: CodeArtifacts::build(variant, |field| {
            field_text(case, field.key()).unwrap_or_else(|| field.missing_default())
        }),
    }
}

/// Upstream id, accepted only as a JSON integer >= 1
fn case_id(case: &Map<String, Value>) -> Option<u64> {
    case.get("id").and_then(Value::as_u64).filter(|id| *id >= 1)
}

/// Text of a field; `None` when absent or null
fn field_text(case: &Map<String, Value>, key: &str) -> Option<String> {
    match case.get(key)? {
        Value::Null => None,
        Value::Array(items) if items.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Array(items) if items.iter().all(Value::is_string) => Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        other => Some(other.to_string()),
    }
}

//! Response parsing for chat-completion replies
//!
//! Turns a raw response body into the JSON array of candidate test cases, in three
//! steps that each fail with their own [`ParseStage`]:
//!
//! 1. Decode the envelope and take `choices[0].message.content`
//! 2. Strip a surrounding markdown fence (with or without a `json` tag)
//! 3. Parse what remains as a JSON array
//!
//! Non-2xx bodies go through [`ResponseParser::error_message`] instead.

use crate::error::{GenResult, GenerationError, ParseStage};
use crate::logging::log_debug;
use crate::transport::ChatCompletionResponse;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Leading fence with optional language tag, body, optional trailing fence
static FENCE_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?s)^```[ \t]*(?i:json)?[ \t]*\r?\n?(.*?)\s*(?:```)?\s*$").ok());

/// Number of characters of model output echoed into debug logs
const PREVIEW_CHARS: usize = 200;

pub struct ResponseParser;

impl ResponseParser {
    /// Decode the success envelope and return the first choice's content, trimmed
    pub fn extract_content(body: &str) -> GenResult<String> {
        let envelope: Value = serde_json::from_str(body)
            .map_err(|e| GenerationError::parse_error(ParseStage::Envelope, e.to_string()))?;

        let response: ChatCompletionResponse = serde_json::from_value(envelope).map_err(|e| {
            GenerationError::parse_error(ParseStage::EnvelopeShape, e.to_string())
        })?;

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            GenerationError::parse_error(ParseStage::EnvelopeShape, "No choices in response")
        })?;

        let content = choice.message.content.ok_or_else(|| {
            GenerationError::parse_error(
                ParseStage::EnvelopeShape,
                "First choice has no message content",
            )
        })?;

        let content = content.trim().to_string();
        log_debug!(
            content_length = content.len(),
            content_preview = content.chars().take(PREVIEW_CHARS).collect::<String>(),
            "Model output received"
        );
        Ok(content)
    }

    /// Remove a markdown code fence wrapping the whole content
    ///
    /// Content that does not start with a fence is returned unchanged (trimmed).
    pub fn strip_code_fence(content: &str) -> &str {
        let trimmed = content.trim();
        if !trimmed.starts_with("```") {
            return trimmed;
        }

        let stripped = FENCE_PATTERN
            .as_ref()
            .and_then(|pattern| pattern.captures(trimmed))
            .and_then(|captures| captures.get(1))
            .map(|body| body.as_str().trim())
            .unwrap_or(trimmed);

        log_debug!(
            original_length = trimmed.len(),
            stripped_length = stripped.len(),
            "Stripped code fence from model output"
        );
        stripped
    }

    /// Parse cleaned content into the array of candidate entries
    pub fn parse_case_array(content: &str) -> GenResult<Vec<Value>> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| GenerationError::parse_error(ParseStage::Payload, e.to_string()))?;

        match value {
            Value::Array(entries) => Ok(entries),
            other => Err(GenerationError::parse_error(
                ParseStage::Payload,
                format!("response is not a JSON array (got {})", json_kind(&other)),
            )),
        }
    }

    /// Full success-path pipeline: envelope, fence, array
    pub fn parse_success_body(body: &str) -> GenResult<Vec<Value>> {
        let content = Self::extract_content(body)?;
        Self::parse_case_array(Self::strip_code_fence(&content))
    }

    /// Human-readable message for a non-2xx response body
    ///
    /// Precedence: `error.message` when `error` is an object, `error` itself when it
    /// is not, top-level `message`, and finally a generic status line.
    pub fn error_message(status: u16, body: &str) -> String {
        let fallback = format!("Request failed with status {status}");

        let Ok(Value::Object(details)) = serde_json::from_str::<Value>(body) else {
            return fallback;
        };

        if let Some(error) = details.get("error") {
            return match error {
                Value::Object(error_obj) => error_obj
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or(fallback),
                other => value_text(other),
            };
        }

        details.get("message").map(value_text).unwrap_or(fallback)
    }
}

/// String content without quotes; any other value as compact JSON
fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

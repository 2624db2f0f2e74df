//! Reply interpreters: read the model's free-form text as data or a verdict.
//!
//! Neither interpreter returns an error. Extraction falls back to an
//! unapproved object and verification falls back to `false`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};
use tracing::warn;

use docscan_core::ApiReply;

/// A leading ```/```json marker or a trailing ``` marker.
static CODE_FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A```(?:json)?|```\z").unwrap());

/// Remove Markdown code-fence markers wrapping the whole text.
pub fn strip_code_fence(text: &str) -> String {
    CODE_FENCE_RE.replace_all(text.trim(), "").trim().to_string()
}

/// Extraction mode: parse the reply content as a JSON object.
///
/// Returns `{"approved": false, "raw_response": ...}` when the content is not
/// a JSON object. `raw_response` holds the reply text, or the whole reply
/// when there is no text.
pub fn interpret_extraction(reply: &ApiReply) -> Value {
    parse_extraction(reply).unwrap_or_else(|reason| {
        warn!(reason = %reason, "Extraction reply unusable");
        extraction_fallback(reply)
    })
}

/// The reply content as a JSON object, or why it is not one.
pub fn parse_extraction(reply: &ApiReply) -> Result<Value, String> {
    let Some(raw) = reply.content() else {
        return Err(missing_content_reason(reply));
    };

    match serde_json::from_str::<Value>(&strip_code_fence(raw)) {
        Ok(value @ Value::Object(_)) => Ok(value),
        Ok(other) => Err(format!("reply is a JSON {}, not an object", json_kind(&other))),
        Err(e) => Err(format!("reply is not JSON: {e}")),
    }
}

/// `{"approved": false, "raw_response": ...}` for an unusable reply.
pub fn extraction_fallback(reply: &ApiReply) -> Value {
    let raw = reply.content().unwrap_or_default().trim();
    let raw_response = if raw.is_empty() {
        reply.to_value()
    } else {
        Value::String(raw.to_string())
    };
    json!({ "approved": false, "raw_response": raw_response })
}

/// Verification mode: only an exact `true` (case-insensitive) is affirmative.
pub fn interpret_verification(reply: &ApiReply) -> bool {
    parse_verification(reply).unwrap_or_else(|reason| {
        warn!(reason = %reason, "Unexpected verification reply");
        false
    })
}

/// The reply as a literal `true` / `false`, or why it is neither.
pub fn parse_verification(reply: &ApiReply) -> Result<bool, String> {
    let Some(raw) = reply.content() else {
        return Err(missing_content_reason(reply));
    };

    match raw.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(format!("reply is not a boolean literal: {other:?}")),
    }
}

fn missing_content_reason(reply: &ApiReply) -> String {
    match reply {
        ApiReply::Completion(_) => "reply has no message content".to_string(),
        ApiReply::HttpError { status, details } => {
            format!("OpenAI HTTP error {status}: {details}")
        }
        ApiReply::InvalidJson { message, .. } => {
            format!("Invalid JSON response from OpenAI: {message}")
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Structured-response extraction from free-form completion text.
//!
//! Completions usually wrap the JSON we asked for in prose or a fenced code
//! block. This module slices the span between the leftmost `{` and the
//! rightmost `}` and parses it. The scan is deliberately not brace-balanced:
//! a stray `}` inside a string value, or several JSON objects in one reply,
//! can produce a truncated or invalid span. Callers treat every failure the
//! same way (fall back to the deterministic engine), so the limitation is
//! benign — it only changes *which* replies fall back.

use serde_json::Value;
use thiserror::Error;

/// Why extraction failed. The two variants exist for logging only; callers
/// must not branch on them.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// No `{...}` span present in the text
    #[error("completion contains no JSON object")]
    NoObject,
    /// A span was found but did not parse as JSON
    #[error("embedded JSON failed to parse: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Extract the first embedded JSON object from completion text.
pub fn json_object(text: &str) -> Result<Value, ExtractError> {
    let trimmed = text.trim();

    // Whole reply is already JSON - common with well-behaved models
    if trimmed.starts_with('{') {
        if let Ok(value) = serde_json::from_str(trimmed) {
            return Ok(value);
        }
    }

    let start = trimmed.find('{').ok_or(ExtractError::NoObject)?;
    let end = trimmed.rfind('}').ok_or(ExtractError::NoObject)?;
    if end < start {
        return Err(ExtractError::NoObject);
    }

    Ok(serde_json::from_str(&trimmed[start..=end])?)
}

/// Extract a typed record from completion text.
///
/// Deserialization failures (missing required fields, wrong shapes) are
/// reported as parse errors so callers fall back exactly as they would for
/// malformed JSON.
pub fn typed<T: serde::de::DeserializeOwned>(text: &str) -> Result<T, ExtractError> {
    let value = json_object(text)?;
    Ok(serde_json::from_value(value)?)
}

/// Strip fenced-code-block markers from completion text.
///
/// Used by tools that consume the completion verbatim (markup generation)
/// rather than extracting JSON.
pub fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }

    let mut lines: Vec<&str> = trimmed.lines().collect();
    // Drop the opening fence (possibly with a language tag) and a closing fence
    lines.remove(0);
    if lines.last().map(|l| l.trim() == "```").unwrap_or(false) {
        lines.pop();
    }
    lines.join("\n").trim().to_string()
}

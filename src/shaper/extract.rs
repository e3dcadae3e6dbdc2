//! Structured payload extraction from raw model text.
//!
//! Models wrap the requested JSON object in prose often enough that the
//! shaper cannot parse the raw text directly. [`extract_json_object`] is a
//! best-effort outermost-brace scan: everything from the first `{` through
//! the last `}`. [`parse_reply`] then validates the payload against the
//! canonical [`Reply`] shape. Both are pure functions so malformed, partial,
//! and prose-wrapped inputs can be tested without a network in sight.

use crate::reply::{Feedback, Reply};

/// Why a raw model response could not be turned into a [`Reply`].
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// No brace-delimited object found in the text.
    #[error("no brace-delimited JSON object found in model output")]
    NoPayload,

    /// The brace-delimited span is not valid JSON.
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(String),

    /// A required field is missing, not a string, or empty after trimming.
    #[error("payload field missing or empty: {0}")]
    MissingField(&'static str),
}

/// Locate the outermost brace-delimited span in free text.
///
/// Returns the slice from the first `{` through the last `}`, or `None`
/// when no such span exists. The span is not guaranteed to be valid JSON;
/// that is [`parse_reply`]'s job.
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

/// Extract and validate a [`Reply`] from raw model text.
///
/// `message` and `suggestion` must be present, strings, and non-empty after
/// trimming. The optional `feedback` object is normalized: absent or `null`
/// becomes `None`, and a present-but-incomplete object (either sub-field
/// missing, non-string, or empty) is discarded rather than failing the
/// whole reply.
///
/// # Errors
///
/// Returns [`ExtractError`] when no payload is found, the payload is not
/// valid JSON, or a required field is missing/empty.
pub fn parse_reply(raw: &str) -> Result<Reply, ExtractError> {
    let payload = extract_json_object(raw).ok_or(ExtractError::NoPayload)?;

    let value: serde_json::Value =
        serde_json::from_str(payload).map_err(|e| ExtractError::InvalidJson(e.to_string()))?;

    let message = required_string(&value, "message")?;
    let suggestion = required_string(&value, "suggestion")?;
    let feedback = normalize_feedback(value.get("feedback"));

    Ok(Reply {
        message,
        suggestion,
        feedback,
    })
}

/// Read a required non-empty string field.
fn required_string(
    value: &serde_json::Value,
    field: &'static str,
) -> Result<String, ExtractError> {
    value
        .get(field)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .ok_or(ExtractError::MissingField(field))
}

/// Normalize the optional feedback sub-object.
///
/// Valid only when both `corrected` and `explanation` are non-empty strings;
/// anything else (absent, null, wrong type, incomplete) becomes `None`.
fn normalize_feedback(value: Option<&serde_json::Value>) -> Option<Feedback> {
    let object = value?;
    let corrected = object.get("corrected")?.as_str()?.trim();
    let explanation = object.get("explanation")?.as_str()?.trim();
    if corrected.is_empty() || explanation.is_empty() {
        return None;
    }
    Some(Feedback {
        corrected: corrected.to_owned(),
        explanation: explanation.to_owned(),
    })
}

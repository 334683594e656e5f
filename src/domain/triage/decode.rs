//! Fail-closed decoding of completion replies.
//!
//! Replies are plain text that should contain JSON, frequently wrapped in a
//! Markdown code fence despite instructions. Decoding strips the fence, then
//! deserializes into the typed value for the operation. Any mismatch, from
//! malformed JSON to a missing key to an out-of-range confidence, yields a
//! [`DecodeError`] and the caller substitutes its canned fallback.

use thiserror::Error;

use super::analysis::AnalysisResult;
use super::followup::FollowupQuestion;

/// A completion reply that could not be decoded into the expected shape.
#[derive(Debug, Error)]
#[error("undecodable completion reply: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Strips a surrounding Markdown code fence (``` or ```json) from a reply.
///
/// Non-fenced replies pass through with only outer whitespace trimmed. Kept
/// as a standalone function so fence handling stays testable without any
/// completion client in the picture.
pub fn strip_code_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Language tag on the opening fence, if any.
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = match rest.rfind("```") {
        Some(closing) => &rest[..closing],
        None => rest,
    };
    rest.trim()
}

/// Decodes a suggestion reply: a bare JSON array of suggestion strings.
pub fn decode_suggestions(reply: &str) -> Result<Vec<String>, DecodeError> {
    Ok(serde_json::from_str(strip_code_fences(reply))?)
}

/// Decodes a follow-up reply into one question.
pub fn decode_followup(reply: &str) -> Result<FollowupQuestion, DecodeError> {
    Ok(serde_json::from_str(strip_code_fences(reply))?)
}

/// Decodes an analysis reply and clamps the condition and test lists to
/// their documented bounds.
pub fn decode_analysis(reply: &str) -> Result<AnalysisResult, DecodeError> {
    let mut result: AnalysisResult = serde_json::from_str(strip_code_fences(reply))?;
    result.clamp_bounds();
    Ok(result)
}

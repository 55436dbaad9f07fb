//! Two-stage decoding of JSON objects out of model replies.
//!
//! Models are instructed to answer with JSON only, but in practice replies
//! arrive wrapped in prose, markdown fences, or apologies. Stage one parses
//! the reply directly; stage two extracts the first top-level `{...}` block
//! (first `{` through last `}`) and parses that. Anything else is a typed
//! failure, never a guess.

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("reply contains no JSON object")]
    MissingObject,

    #[error("extracted JSON object failed to parse: {0}")]
    Invalid(#[source] serde_json::Error),
}

/// Decodes a `T` from a model reply using the two-stage strategy.
pub fn json_object<T: DeserializeOwned>(raw: &str) -> Result<T, DecodeError> {
    let trimmed = raw.trim();

    // Stage 1: the reply is exactly the JSON we asked for.
    if let Ok(value) = serde_json::from_str::<T>(trimmed) {
        return Ok(value);
    }

    // Stage 2: salvage the outermost brace block from surrounding text.
    let start = trimmed.find('{').ok_or(DecodeError::MissingObject)?;
    let end = trimmed.rfind('}').ok_or(DecodeError::MissingObject)?;
    if end < start {
        return Err(DecodeError::MissingObject);
    }

    serde_json::from_str::<T>(&trimmed[start..=end]).map_err(DecodeError::Invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_direct_parse() {
        let v: Value = json_object(r#"{"score": 85}"#).unwrap();
        assert_eq!(v["score"], 85);
    }

    #[test]
    fn test_leading_and_trailing_prose_falls_back_to_brace_block() {
        let raw = r#"Sure! Here is the analysis you asked for:
{"score": 42, "notes": ["a", "b"]}
Let me know if you need anything else."#;
        let v: Value = json_object(raw).unwrap();
        assert_eq!(v["score"], 42);
        assert_eq!(v["notes"][1], "b");
    }

    #[test]
    fn test_markdown_fences_are_covered_by_the_brace_block() {
        let raw = "```json\n{\"score\": 7}\n```";
        let v: Value = json_object(raw).unwrap();
        assert_eq!(v["score"], 7);
    }

    #[test]
    fn test_nested_objects_use_outermost_braces() {
        let raw = r#"prefix {"outer": {"inner": 1}, "k": 2} suffix"#;
        let v: Value = json_object(raw).unwrap();
        assert_eq!(v["outer"]["inner"], 1);
        assert_eq!(v["k"], 2);
    }

    #[test]
    fn test_no_object_at_all() {
        let result: Result<Value, _> = json_object("I cannot produce JSON for that.");
        assert!(matches!(result, Err(DecodeError::MissingObject)));
    }

    #[test]
    fn test_brace_block_that_is_not_json() {
        let result: Result<Value, _> = json_object("see {not json at all} above");
        assert!(matches!(result, Err(DecodeError::Invalid(_))));
    }

    #[test]
    fn test_closing_brace_before_opening_brace() {
        let result: Result<Value, _> = json_object("} oops {");
        assert!(matches!(result, Err(DecodeError::MissingObject)));
    }
}

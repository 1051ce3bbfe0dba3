//! Payload extraction and strict decoding of model output.
//!
//! Models are told to answer with bare JSON, but in practice replies arrive
//! fenced or wrapped in prose. Extraction tolerates that; decoding does not
//! tolerate shape mismatches.

use serde::de::DeserializeOwned;

use crate::error::AssistError;

/// Slice the JSON object out of a model reply (handles ```json fences and
/// surrounding prose; returns None when there is no object at all).
pub fn extract_json(output: &str) -> Option<&str> {
    let trimmed = output.trim();

    if let Some(start) = trimmed.find("```json") {
        let rest = &trimmed[start + 7..];
        return Some(
            rest.find("```")
                .map(|end| rest[..end].trim())
                .unwrap_or_else(|| rest.trim()),
        );
    }

    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    (start <= end).then(|| &trimmed[start..=end])
}

/// Decode a model reply into the expected result shape. Any mismatch
/// (no JSON, missing field, wrong type, extra keys) is a schema
/// validation failure.
pub fn decode_payload<T: DeserializeOwned>(output: &str) -> Result<T, AssistError> {
    let json = extract_json(output).ok_or_else(|| {
        AssistError::Schema(format!("no JSON object in model output: {output}"))
    })?;
    serde_json::from_str(json).map_err(|e| AssistError::Schema(format!("{e}: {json}")))
}

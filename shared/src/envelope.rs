//! Decoding of the search endpoint body, bare or wrapped in the API envelope.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::SearchResponse;

/// Why a search body could not be turned into a [`SearchResponse`].
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The server answered with `success: false`.
    #[error("server rejected search: {0}")]
    Rejected(String),
    /// An envelope without a `data` payload.
    #[error("response envelope has no data")]
    MissingPayload,
    /// The payload did not match the search response shape.
    #[error("malformed search payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

// {"success": bool, "message": str, "data": {...}}
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Option<Value>,
}

/// Decode a search body, unwrapping the API envelope when present.
///
/// Both `{"posts": [...]}` and `{"success": true, "data": {"posts": [...]}}`
/// are accepted.
pub fn decode_search_response(body: Value) -> Result<SearchResponse, DecodeError> {
    if !is_envelope(&body) {
        return Ok(serde_json::from_value(body)?);
    }

    let envelope: Envelope = serde_json::from_value(body)?;
    if envelope.success == Some(false) {
        return Err(DecodeError::Rejected(envelope.message));
    }

    match envelope.data {
        Some(Value::Null) | None => Err(DecodeError::MissingPayload),
        Some(data) => Ok(serde_json::from_value(data)?),
    }
}

fn is_envelope(body: &Value) -> bool {
    body.as_object().is_some_and(|object| {
        !object.contains_key("posts")
            && (object.contains_key("data") || object.contains_key("success"))
    })
}

// Request parameter parsing shared by the handlers

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::models::{clamp_limit, DEFAULT_LIMIT};

/// Parse a chat id path segment; it must be a positive integer.
pub fn parse_chat_id(raw: &str) -> Result<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Error::InvalidInput(format!("invalid chat id: {:?}", raw))),
    }
}

/// Read the optional `limit` query parameter.
///
/// Missing, non-numeric or non-positive values fall back to `DEFAULT_LIMIT`;
/// larger values are capped at `MAX_LIMIT`.
pub fn parse_limit(query: &HashMap<String, String>) -> i64 {
    query
        .get("limit")
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .map_or(DEFAULT_LIMIT, clamp_limit)
}

/// Decode a JSON request body.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| Error::InvalidInput(format!("invalid JSON: {}", e)))
}

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::constants::ENVELOPE_DATA_FIELD;
use crate::error::{ApiError, Result};

/// Strips a pagination envelope.
///
/// An object exposing a `data` field yields that field; any other body comes back
/// unchanged. A bare array has no `data` field, so applying this twice is the same as
/// applying it once.
pub fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) => match map.remove(ENVELOPE_DATA_FIELD) {
            Some(inner) => inner,
            None => Value::Object(map),
        },
        other => other,
    }
}

/// Decodes a list endpoint body into records. `null` (bare or as `{data: null}`) is an
/// empty page.
pub fn decode_records<T: DeserializeOwned>(path: &str, body: Value) -> Result<Vec<T>> {
    match unwrap_envelope(body) {
        Value::Null => Ok(Vec::new()),
        records => serde_json::from_value(records).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        }),
    }
}

/// Decodes a single-record body. Item endpoints are never enveloped.
pub fn decode_record<T: DeserializeOwned>(path: &str, body: Value) -> Result<T> {
    serde_json::from_value(body).map_err(|source| ApiError::Decode {
        path: path.to_string(),
        source,
    })
}

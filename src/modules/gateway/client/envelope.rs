use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::error::ClientError;

/// Strips the backend's `{statusCode, data}` success envelope.
///
/// Bodies without a `data` key are already bare payloads and pass through.
pub fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Decodes an enveloped or bare payload.
pub fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ClientError> {
    serde_json::from_value(unwrap_envelope(body)).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Like [`decode`], but `None` for null or undecodable payloads.
pub fn decode_optional<T: DeserializeOwned>(body: Value, endpoint: &str) -> Option<T> {
    let body = unwrap_envelope(body);
    if body.is_null() {
        return None;
    }

    serde_json::from_value(body)
        .map_err(|e| warn!(%endpoint, error = %e, "response could not be decoded"))
        .ok()
}

//! Best-effort JSON decoding for upstream telemetry.
//!
//! Upstream bodies are trusted to be roughly the right shape, nothing more.
//! A field that is missing, `null` or of the wrong JSON type decodes to its
//! zero value instead of failing the whole record, and a body that is not a
//! JSON object at all decodes to the all-zero record.
//!
//! The fallback is all-or-nothing at the body level: a body that fails to
//! parse as JSON (an out-of-range number such as `1e400`, invalid UTF-8 in a
//! string) loses every field, not just the offending one. Keys match
//! case-sensitively, so `"LATITUDE"` does not fill `latitude`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Field-level `deserialize_with` that swallows type mismatches.
///
/// Use together with `#[serde(default)]` so absent fields are covered too.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Decode a whole response body, falling back to `T::default()` when the
/// body is not decodable at all.
pub fn decode_body<T>(body: &[u8]) -> T
where
    T: DeserializeOwned + Default,
{
    let value = match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value) if value.is_object() => value,
        Ok(_) => {
            tracing::warn!("Upstream body is not a JSON object, using defaults");
            return T::default();
        }
        Err(e) => {
            tracing::warn!("Upstream body is not valid JSON, using defaults: {}", e);
            return T::default();
        }
    };

    T::deserialize(value).unwrap_or_else(|e| {
        tracing::warn!("Upstream body could not be decoded, using defaults: {}", e);
        T::default()
    })
}

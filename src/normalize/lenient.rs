//! Tolerant decoding for columns the backend serializes inconsistently: decimals come
//! back as `"12.50"` from some endpoints and `12.5` from others, and nullable text or
//! collection columns arrive as `null`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads a JSON number or a numeric string as `f64`. Anything else is `None`.
pub fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// `deserialize_with` helper for `Option<f64>` fields. Non-numeric input decodes to
/// `None` instead of failing the whole record.
pub fn optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_f64))
}

/// `deserialize_with` helper for fields that default when missing: an explicit `null`
/// also yields `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

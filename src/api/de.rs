//! Field decoders for API payloads.

use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;

/// Decode an explicit `null` as the type's default value.
///
/// Pair with `#[serde(default)]` so a missing key decodes the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keep a present value verbatim, `null` included. A missing key falls back
/// to `None` through `#[serde(default)]`.
pub fn present_raw<'de, D>(deserializer: D) -> Result<Option<Box<RawValue>>, D::Error>
where
    D: Deserializer<'de>,
{
    Box::<RawValue>::deserialize(deserializer).map(Some)
}

//! Serde helpers for backend payloads that send `null` where a value is expected.

use serde::{Deserialize, Deserializer};

/// `null` reads as `T::default()`. Pair it with `#[serde(default)]` so a
/// missing field behaves the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

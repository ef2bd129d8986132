//! Deserialization helpers for server records.

use serde::{Deserialize, Deserializer};

/// Deserialize a field, mapping JSON `null` to the type's default value.
///
/// Combined with `#[serde(default)]` this gives missing and `null` fields the same
/// zero value.
///
/// # Errors
///
/// Returns the deserializer's error if the value is present but of the wrong type.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let option = Option::<T>::deserialize(deserializer)?;
    Ok(option.unwrap_or_default())
}

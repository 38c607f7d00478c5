//! Serde helpers for questionnaire payloads

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default (used for enum fields whose
/// default variant is `Unknown`).
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

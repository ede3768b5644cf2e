//! Serde adapter for collection fields the service may send as `null`.
//!
//! `#[serde(default)]` only covers a missing key; pair it with
//! `deserialize_with = "crate::shared::null_default::deserialize"` so an
//! explicit `null` also decodes to the empty value.

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

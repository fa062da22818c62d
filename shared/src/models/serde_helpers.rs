//! Common serde helpers for documents written by older versions of the server
//!
//! Earlier writers emitted `null` (or nothing at all) for fields the client
//! left blank, so readers treat both as the type's default.

use serde::{Deserialize, Deserializer};

/// Deserialize a value that treats null as `T::default()`
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Deserialize an optional string that treats `""` as absent
pub fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.filter(|s| !s.is_empty()))
}

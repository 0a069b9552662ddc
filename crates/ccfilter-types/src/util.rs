use serde::{Deserialize, Deserializer};

/// Deserialize a field that may be `null`, falling back to the type's default.
///
/// Claude emits `null` for optional metadata in some versions; a missing field
/// and a `null` field are treated the same way.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

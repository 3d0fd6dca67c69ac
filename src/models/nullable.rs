use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like a missing field.
///
/// The backend sends `null` for averages over periods with nothing logged.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

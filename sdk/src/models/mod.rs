use serde::{Deserialize, Deserializer};

pub mod cluster;
pub mod consumer;
pub mod envelope;
pub mod lag;

// The service encodes empty lists as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

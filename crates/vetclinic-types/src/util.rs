use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating `""` (and whitespace) as absent.
///
/// The records service encodes unset text columns as empty strings rather
/// than `null`, so both shapes collapse to `None` here.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional number, treating the type's zero value as absent.
///
/// Used for vital signs: a weight or heart rate of zero is how the service
/// reports "not measured".
pub fn zero_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default + PartialEq,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.filter(|v| *v != T::default()))
}

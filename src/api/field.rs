//! Three-state response field.
//!
//! Upstream can omit a key, send it as `null`, or send a value. All three are
//! kept apart so the projection copies what was received, nothing more.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// The key was not in the payload.
    Missing,
    /// The key was present with a JSON `null`.
    Null,
    Present(T),
}

impl<T> Field<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Field::Present(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Missing
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Present(value)
    }
}

/// Only reached when the key exists; a missing key falls back to `Default`.
impl<'de, T> Deserialize<'de> for Field<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Field::Present(value),
            None => Field::Null,
        })
    }
}

/// `Missing` is skipped by the containers; if serialized anyway it is `null`.
impl<T> Serialize for Field<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Field::Present(value) => value.serialize(serializer),
            Field::Missing | Field::Null => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, Serialize)]
    struct Wrapper {
        #[serde(default, skip_serializing_if = "Field::is_missing")]
        value: Field<String>,
    }

    #[test]
    fn distinguishes_missing_null_and_present() {
        let missing: Wrapper = serde_json::from_value(json!({})).unwrap();
        let null: Wrapper = serde_json::from_value(json!({"value": null})).unwrap();
        let present: Wrapper = serde_json::from_value(json!({"value": "x"})).unwrap();

        assert_eq!(missing.value, Field::Missing);
        assert_eq!(null.value, Field::Null);
        assert_eq!(present.value, Field::Present("x".to_string()));
    }

    #[test]
    fn null_survives_serialization_and_missing_is_dropped() {
        let null = Wrapper { value: Field::Null };
        let missing = Wrapper { value: Field::Missing };

        assert_eq!(serde_json::to_value(&null).unwrap(), json!({"value": null}));
        assert_eq!(serde_json::to_value(&missing).unwrap(), json!({}));
    }
}

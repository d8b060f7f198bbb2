//! Request body type for create and update calls.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{Error, InvalidInputError};

/// A JSON object sent as a create or update body.
///
/// Guaranteed to be an object; field semantics are left to the resource's
/// schema and the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Create a payload from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a JSON object.
    pub fn new(value: Value) -> Result<Self, Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(InvalidInputError::Other {
                message: "request body must be a JSON object".to_string(),
            }
            .into()),
        }
    }

    pub fn insert(&mut self, field: impl Into<String>, value: Value) {
        self.0.insert(field.into(), value);
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl Serialize for Payload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Payload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Payload::new(value).map_err(serde::de::Error::custom)
    }
}

impl std::ops::Index<&str> for Payload {
    type Output = Value;

    fn index(&self, field: &str) -> &Self::Output {
        &self.0[field]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_objects() {
        assert!(Payload::new(json!([1, 2])).is_err());
        assert!(Payload::new(json!("text")).is_err());
    }

    #[test]
    fn serializes_as_plain_object() {
        let payload = Payload::new(json!({"nombre_vacuna": "Rabia"})).unwrap();
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"nombre_vacuna": "Rabia"}));
    }
}

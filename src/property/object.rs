use crate::error::PropertyError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::{Deref, DerefMut};

/// The persisted configuration of a single workflow step.
///
/// Key order is significant and preserved: the underlying map keeps insertion
/// order, so a round trip through a form schema reproduces the source layout.
///
/// `==` compares keys and values but ignores their order. Compare
/// [`PropertyObject::key_list`] as well when the order matters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyObject(Map<String, Value>);

impl PropertyObject {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Parses a property object from a JSON document whose root must be an object.
    pub fn from_json_str(json: &str) -> Result<Self, PropertyError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| PropertyError::InvalidJson(e.to_string()))?;
        Self::from_value(value)
    }

    /// Wraps an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, PropertyError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(PropertyError::NotAnObject {
                found: json_kind(&other).to_string(),
            }),
        }
    }

    /// Inserts a scalar entry. An existing key keeps its position.
    pub fn insert_scalar(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), Value::String(value.into()));
    }

    /// Inserts an object-sequence entry. An existing key keeps its position.
    pub fn insert_sequence(&mut self, key: impl Into<String>, elements: Vec<PropertyObject>) {
        let array = elements
            .into_iter()
            .map(|element| Value::Object(element.0))
            .collect();
        self.0.insert(key.into(), Value::Array(array));
    }

    /// Returns the keys in their stored order.
    pub fn key_list(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl Deref for PropertyObject {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PropertyObject {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Map<String, Value>> for PropertyObject {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<PropertyObject> for Value {
    fn from(object: PropertyObject) -> Self {
        Value::Object(object.0)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for PropertyObject {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

use serde_json::{Map, Value};

/// The shape of a top-level property value, decided once at the schema boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueShape<'a> {
    /// A plain string value, edited as a single field.
    Scalar(&'a str),
    /// An array whose every element is a JSON object, edited as a repeatable group.
    ObjectSequence(Vec<&'a Map<String, Value>>),
    /// Anything else. Such values are dropped from the schema.
    Unsupported,
}

impl ValueShape<'_> {
    pub fn is_supported(&self) -> bool {
        !matches!(self, ValueShape::Unsupported)
    }
}

/// Classifies a JSON value into the shapes the form schema understands.
///
/// Numbers, booleans and null are not scalars here; only strings are. An
/// array qualifies as an object sequence only if every element is an object,
/// so an empty array is an empty sequence.
pub fn classify(value: &Value) -> ValueShape<'_> {
    match value {
        Value::String(s) => ValueShape::Scalar(s),
        Value::Array(items) => items
            .iter()
            .map(Value::as_object)
            .collect::<Option<Vec<_>>>()
            .map_or(ValueShape::Unsupported, ValueShape::ObjectSequence),
        _ => ValueShape::Unsupported,
    }
}

/// Yields the string-valued pairs of a nested element, in key order.
pub fn scalar_pairs(element: &Map<String, Value>) -> impl Iterator<Item = (&str, &str)> {
    element
        .iter()
        .filter_map(|(key, value)| value.as_str().map(|v| (key.as_str(), v)))
}

use serde_json::{Map, Value};

/// The two accepted shapes of an OpenAPI `examples` field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Examples<'a> {
    /// Plain sequence of example values (JSON Schema style)
    List(&'a [Value]),
    /// `{ name -> { value, summary, ... } }` (OpenAPI media type style)
    Named(&'a Map<String, Value>),
}

impl<'a> Examples<'a> {
    /// Classify an `examples` value. Scalars carry no usable example.
    pub fn classify(value: &'a Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(Self::List(items)),
            Value::Object(named) => Some(Self::Named(named)),
            _ => None,
        }
    }

    /// The `value` of the example registered under `name`
    pub fn named(&self, name: &str) -> Option<&'a Value> {
        match self {
            Self::Named(named) => named.get(name).and_then(|wrapper| wrapper.get("value")),
            Self::List(_) => None,
        }
    }

    /// First list element, or the `value` of the first named example
    pub fn first(&self) -> Option<&'a Value> {
        match self {
            Self::List(items) => items.first(),
            Self::Named(named) => named.values().next().and_then(|wrapper| wrapper.get("value")),
        }
    }
}

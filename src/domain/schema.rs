use serde_json::Value;

use super::error::ResolutionError;

/// Schema extension naming a fake-value generator
pub const FAKER_KEY: &str = "x-faker";
/// Schema extension giving the number of items to generate for arrays
pub const COUNT_KEY: &str = "x-count";
/// Largest array length `x-count` can request
pub const MAX_ITEM_COUNT: usize = 10_000;

/// Values of the `type` keyword the generator can synthesize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaType {
    Array,
    Object,
    String,
    Number,
    Integer,
    Boolean,
}

impl SchemaType {
    pub fn from_value(value: &Value) -> Result<Self, ResolutionError> {
        match value.as_str() {
            Some("array") => Ok(Self::Array),
            Some("object") => Ok(Self::Object),
            Some("string") => Ok(Self::String),
            Some("number") => Ok(Self::Number),
            Some("integer") => Ok(Self::Integer),
            Some("boolean") => Ok(Self::Boolean),
            _ => Err(ResolutionError::UnknownType(value.to_string())),
        }
    }
}

/// Number of array items requested by `x-count`.
///
/// Accepts integers, floats (truncated) and numeric strings. Anything
/// missing, non-numeric or below 1 counts as 1; larger requests are capped
/// at [`MAX_ITEM_COUNT`].
pub fn item_count(schema: &Value) -> usize {
    let requested = match schema.get(COUNT_KEY) {
        Some(Value::Number(n)) => n.as_u64().or_else(|| n.as_f64().and_then(truncate)),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().and_then(truncate),
        _ => None,
    };

    match requested {
        Some(count) if count >= 1 => count.min(MAX_ITEM_COUNT as u64) as usize,
        _ => 1,
    }
}

fn truncate(f: f64) -> Option<u64> {
    f.is_finite().then(|| f.max(0.0) as u64)
}

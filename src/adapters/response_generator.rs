use crate::adapters::faker_provider::FakerProvider;
use crate::domain::schema::{item_count, FAKER_KEY};
use crate::domain::{Examples, FakeValueProvider, FakerDirective, Locale, ResolutionError, SchemaType};
use serde_json::{json, Map, Value};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Builds one example value for an OpenAPI / JSON-Schema style node.
///
/// Strategies are tried in a fixed order on every node:
///
/// 1. `x-faker` directive (failures are logged and skipped)
/// 2. `example` / `examples`
/// 3. first `enum` entry
/// 4. `allOf`, shallow-merged left to right
/// 5. first `oneOf` / `anyOf` alternative
/// 6. `type` (arrays and objects recurse, primitives get placeholders)
/// 7. wrapped `schema` of a response or parameter object
///
/// The generator holds no state besides its provider and never mutates the
/// schema it reads.
#[derive(Clone)]
pub struct ResponseGenerator {
    provider: Arc<dyn FakeValueProvider>,
}

impl ResponseGenerator {
    pub fn new(provider: Arc<dyn FakeValueProvider>) -> Self {
        Self { provider }
    }

    /// Generator backed by a [`FakerProvider`] for `locale`
    pub fn with_locale(locale: Locale) -> Self {
        Self::new(Arc::new(FakerProvider::new(locale)))
    }

    /// Generate an example value for `schema`.
    ///
    /// `preferred_example` selects a named entry of an `examples` mapping when
    /// present. `path` only labels diagnostics and is forwarded unchanged to
    /// nested schemas.
    pub fn generate(
        &self,
        schema: &Value,
        preferred_example: Option<&str>,
        path: &str,
    ) -> Result<Value, ResolutionError> {
        if !schema.is_object() {
            return Err(ResolutionError::UnresolvableSchema);
        }

        if let Some(directive) = schema.get(FAKER_KEY) {
            match self.generate_by_faker(directive) {
                Ok(value) => return Ok(value),
                Err(e) => warn!(
                    "Failed to generate fake value using {} at path '{}': {}. Falling back to schema.",
                    directive, path, e
                ),
            }
        }

        if schema.get("example").is_some() || schema.get("examples").is_some() {
            return Self::best_example(schema, preferred_example);
        }

        if let Some(first) = schema
            .get("enum")
            .and_then(Value::as_array)
            .and_then(|options| options.first())
        {
            return Ok(first.clone());
        }

        if let Some(members) = schema.get("allOf").and_then(Value::as_array) {
            return self.generate_all_of(members, path);
        }

        if let Some(alternative) = first_alternative(schema) {
            return self.generate(alternative, None, path);
        }

        if let Some(schema_type) = schema.get("type") {
            return self.generate_by_type(schema, schema_type, path);
        }

        if let Some(inner) = schema.get("schema") {
            return self.generate(inner, preferred_example, path);
        }

        Err(ResolutionError::UnresolvableSchema)
    }

    fn generate_by_faker(&self, directive: &Value) -> Result<Value, ResolutionError> {
        match FakerDirective::from_value(directive)? {
            FakerDirective::Template(template) => {
                self.provider.render_template(&template).map(Value::String)
            }
            FakerDirective::Call(call) => {
                self.provider.call(&call.namespace, &call.method, &call.args)
            }
        }
    }

    fn best_example(schema: &Value, preferred_example: Option<&str>) -> Result<Value, ResolutionError> {
        let examples = schema.get("examples").and_then(Examples::classify);

        if let (Some(name), Some(examples)) = (preferred_example, examples) {
            if let Some(value) = examples.named(name) {
                return Ok(value.clone());
            }
        }

        if let Some(example) = schema.get("example") {
            return Ok(example.clone());
        }

        examples
            .and_then(|examples| examples.first())
            .cloned()
            .ok_or(ResolutionError::NoExampleFound)
    }

    fn generate_all_of(&self, members: &[Value], path: &str) -> Result<Value, ResolutionError> {
        members
            .iter()
            .try_fold(Value::Object(Map::new()), |merged, member| {
                let value = self.generate(member, None, path)?;
                Ok(merge_shallow(merged, value))
            })
    }

    fn generate_by_type(
        &self,
        schema: &Value,
        schema_type: &Value,
        path: &str,
    ) -> Result<Value, ResolutionError> {
        match SchemaType::from_value(schema_type)? {
            SchemaType::Array => self.generate_array(schema, path),
            SchemaType::Object => self.generate_object(schema, path),
            SchemaType::String => Ok(json!("string")),
            SchemaType::Number | SchemaType::Integer => Ok(json!(1)),
            SchemaType::Boolean => Ok(json!(true)),
        }
    }

    fn generate_array(&self, schema: &Value, path: &str) -> Result<Value, ResolutionError> {
        let items = schema.get("items").ok_or(ResolutionError::UnresolvableSchema)?;
        let count = item_count(schema);

        (0..count)
            .map(|_| self.generate(items, None, path))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }

    fn generate_object(&self, schema: &Value, path: &str) -> Result<Value, ResolutionError> {
        let mut object = Map::new();

        if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
            for (name, property) in properties {
                object.insert(name.clone(), self.generate(property, None, path)?);
            }
        }

        Ok(Value::Object(object))
    }
}

impl Default for ResponseGenerator {
    fn default() -> Self {
        Self::with_locale(Locale::default())
    }
}

impl fmt::Debug for ResponseGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseGenerator")
            .field("locale", &self.provider.locale())
            .finish()
    }
}

/// First alternative of `oneOf`, or of `anyOf` when `oneOf` offers none
fn first_alternative(schema: &Value) -> Option<&Value> {
    ["oneOf", "anyOf"].iter().find_map(|keyword| {
        schema
            .get(*keyword)
            .and_then(Value::as_array)
            .and_then(|alternatives| alternatives.first())
    })
}

/// Right-biased shallow merge. Two objects combine key by key; any other
/// pairing keeps the later value.
fn merge_shallow(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base), Value::Object(overlay)) => {
            base.extend(overlay);
            Value::Object(base)
        }
        (_, overlay) => overlay,
    }
}

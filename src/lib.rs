//! # Exemplar - example values from OpenAPI schemas
//!
//! Exemplar turns a JSON-Schema-like descriptor (an OpenAPI schema, media type
//! or response object) into one concrete example value. Mock servers and
//! documentation tooling use it to show a plausible payload for a schema.
//!
//! ## Strategies
//!
//! For every schema node the first matching rule wins:
//!
//! - **`x-faker`**: realistic values from a faker-style generator
//!   (`"internet.email"`, `"lorem.words(3)"`, `"{{name.lastName}}, {{name.firstName}}"`)
//! - **`example` / `examples`**: explicit examples, optionally picked by name
//! - **`enum`**: the first candidate
//! - **`allOf`**: members merged left to right
//! - **`oneOf` / `anyOf`**: the first alternative
//! - **`type`**: placeholders for primitives, recursion for arrays and objects
//!   (`x-count` sets the array length)
//! - **`schema`**: unwraps response and parameter objects
//!
//! ## Quick Start
//!
//! ```rust
//! use exemplar::adapters::response_generator::ResponseGenerator;
//! use exemplar::domain::Locale;
//! use serde_json::json;
//!
//! let generator = ResponseGenerator::with_locale(Locale::En);
//! let schema = json!({
//!     "type": "object",
//!     "properties": {
//!         "id": {"type": "integer"},
//!         "status": {"type": "string", "enum": ["available", "sold"]}
//!     }
//! });
//!
//! let value = generator.generate(&schema, None, "/pets").unwrap();
//! assert_eq!(value, json!({"id": 1, "status": "available"}));
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: schema vocabulary, directive parser, errors and the
//!   `FakeValueProvider` port
//! - **Adapters**: the response generator and the `fake`-backed provider
//! - **Config**: settings for the command line tool

pub mod adapters;
pub mod cli;
pub mod config;
pub mod document;
pub mod domain;

use crate::adapters::response_generator::ResponseGenerator;
use crate::domain::ResolutionError;
use serde_json::Value;

/// Generate an example for `schema` with an English [`ResponseGenerator`].
///
/// Build a [`ResponseGenerator`] once and reuse it to choose a locale or a
/// custom fake-value provider.
pub fn generate(
    schema: &Value,
    preferred_example: Option<&str>,
    path: &str,
) -> Result<Value, ResolutionError> {
    ResponseGenerator::default().generate(schema, preferred_example, path)
}
